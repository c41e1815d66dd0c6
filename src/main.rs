//! Speed Hop entry point
//!
//! Headless native runner: plays a session with a simple autopilot and logs
//! what happens.
//!
//! Usage: `speed-hop [settings.json] [seed]`

use std::path::PathBuf;

use speed_hop::Settings;
use speed_hop::consts::DEFAULT_SEED;
use speed_hop::sim::{Clock, FrameInput, GameEvent, PickerState, World};

/// Simulated frame rate of the runner
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this much simulated time
const SESSION_SECS: f32 = 90.0;
/// Stop after this many restarts
const MAX_ATTEMPTS: u32 = 3;
/// Seconds of slider sweep before the autopilot locks in
const LOCK_IN_DELAY: f32 = 0.75;
/// Jump when the next obstacle is this many seconds away
const JUMP_LEAD_SECS: f32 = 0.3;

/// Picks inputs for the next frame
#[derive(Debug, Default)]
struct Autopilot {
    waited: f32,
}

impl Autopilot {
    fn input(&mut self, world: &World, dt: f32) -> FrameInput {
        if world.picker.state() == PickerState::Unlocked {
            self.waited += dt;
            if self.waited >= LOCK_IN_DELAY {
                self.waited = 0.0;
                return FrameInput::key(true);
            }
            return FrameInput::default();
        }

        let (Some(pos), Some(mover)) = (world.player_position(), world.mover.as_ref()) else {
            return FrameInput::default();
        };
        let grounded = pos.y <= world.settings.level.ground_y + world.settings.player_radius + 0.05;
        let lead = mover.speed() * JUMP_LEAD_SECS + world.settings.player_radius;
        let obstacle_close = world
            .level
            .obstacles()
            .filter(|c| c.bounds.max.x > pos.x)
            .any(|c| c.bounds.min.x - pos.x < lead);

        FrameInput::key(grounded && obstacle_close)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let seed = match args.next() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid seed {:?}, using default", raw);
            DEFAULT_SEED
        }),
        None => DEFAULT_SEED,
    };

    let settings = Settings::load_or_default(settings_path.as_deref());
    log::info!("Speed Hop (native) starting...");

    let mut world = World::new(settings, seed);
    let mut clock = Clock::new();
    let mut pilot = Autopilot::default();
    let mut elapsed = 0.0;
    let mut best_x = f32::MIN;

    while elapsed < SESSION_SECS && world.attempt < MAX_ATTEMPTS {
        let input = pilot.input(&world, FRAME_DT);
        clock.advance(&mut world, &input, FRAME_DT);
        elapsed += FRAME_DT;

        if let Some(pos) = world.player_position() {
            best_x = best_x.max(pos.x);
        }

        for event in world.drain_events() {
            match event {
                GameEvent::SpeedLocked { speed } => {
                    log::info!("Locked in {:.2} (shown as {})", speed, world.label.text())
                }
                GameEvent::Jumped => log::debug!("Jump at t={:.2}s", elapsed),
                GameEvent::ObstacleHit { id } => log::info!("Crashed into obstacle #{}", id),
                GameEvent::LevelReset { attempt } => log::info!("Attempt {} begins", attempt + 1),
            }
        }
    }

    log::info!(
        "Session over after {:.1}s: {} restarts, furthest x = {:.1}",
        elapsed,
        world.attempt,
        best_x
    );
}
