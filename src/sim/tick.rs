//! Simulation tick
//!
//! Fixed-rate physics steps plus one variable-rate frame update, run in a
//! fixed order:
//! 1. physics: mover drive, body integration, contacts
//! 2. frame: mover jump, speed picker, camera
//!
//! An obstacle hit only marks the world for restart. The host applies it at
//! the end of the frame and skips that frame's update.

use std::collections::BTreeSet;

use super::collision::{Tag, circle_aabb_collision};
use super::mover::{ContactResponse, SpeedReceiver, Tracked};
use super::state::{GameEvent, World};
use crate::consts::*;

/// Input edges for a single frame (pressed this frame)
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Lock the slider value in
    pub lock_in: bool,
    /// Jump
    pub jump: bool,
}

impl FrameInput {
    /// One key bound to both actions
    pub fn key(pressed: bool) -> Self {
        Self {
            lock_in: pressed,
            jump: pressed,
        }
    }
}

/// Advance physics by one fixed step
///
/// No-op once a restart is pending.
pub fn physics_step(world: &mut World, dt: f32) {
    if world.reset_pending() {
        return;
    }
    world.physics_steps += 1;

    let Some(mover) = world.mover.as_mut() else {
        return;
    };
    mover.fixed_update();

    let gravity = world.settings.gravity;
    let Some(body) = mover.body_mut() else {
        return;
    };
    if !body.is_simulated() {
        return;
    }
    body.step(dt, gravity);

    let mut touching = BTreeSet::new();
    for collider in &world.level.colliders {
        let hit = circle_aabb_collision(body.position(), body.radius(), &collider.bounds);
        if !hit.hit {
            continue;
        }
        touching.insert(collider.id);
        if collider.tag == Tag::Ground {
            body.resolve_contact(hit.normal, hit.penetration);
        }
    }

    let mut restart = None;
    for id in world.contacts.update(touching) {
        let Some(collider) = world.level.collider(id) else {
            continue;
        };
        log::debug!("Contact begin: {:?} #{}", collider.tag, id);
        if mover.on_collision_begin(collider.tag) == ContactResponse::RestartLevel {
            restart = Some(id);
            break;
        }
    }

    if let Some(id) = restart {
        log::info!("Hit obstacle #{} after {} steps", id, world.physics_steps);
        world.push_event(GameEvent::ObstacleHit { id });
        world.request_reset();
    }
}

/// Per-frame update
pub fn frame_update(world: &mut World, input: &FrameInput, dt: f32) {
    world.frames += 1;

    // Jump before the picker so the lock-in press doesn't also jump
    let jumped = world
        .mover
        .as_mut()
        .is_some_and(|mover| mover.update(input.jump));
    if jumped {
        world.push_event(GameEvent::Jumped);
    }

    let receiver = world.mover.as_mut().map(|m| m as &mut dyn SpeedReceiver);
    if let Some(speed) = world.picker.update(dt, input.lock_in, receiver) {
        world.push_event(GameEvent::SpeedLocked { speed });
    }

    let target = world.mover.as_ref().map(|m| m as &dyn Tracked);
    world.camera.update(target);
}

/// Fixed-timestep accumulator driving a [`World`]
#[derive(Debug, Clone, Default)]
pub struct Clock {
    accumulator: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the physics steps owed for `frame_dt`, then one frame update.
    /// Returns the number of physics steps taken.
    ///
    /// A restart requested during physics ends the frame: remaining steps,
    /// leftover time and this frame's input are dropped, and the fresh world
    /// is left untouched until the next call.
    pub fn advance(&mut self, world: &mut World, input: &FrameInput, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= PHYSICS_DT && substeps < MAX_SUBSTEPS {
            physics_step(world, PHYSICS_DT);
            self.accumulator -= PHYSICS_DT;
            substeps += 1;

            if world.reset_pending() {
                self.accumulator = 0.0;
                world.reset();
                return substeps;
            }
        }

        frame_update(world, input, dt);
        substeps
    }
}
