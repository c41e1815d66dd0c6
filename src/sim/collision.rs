//! Circle vs box collision and contact-begin tracking
//!
//! The mover is a circle, everything it can touch is an axis-aligned box.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What an entity is, for collision filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// Walkable surface
    Ground,
    /// Touching this restarts the level
    Obstacle,
}

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box resting on `ground_y` with its left edge at `x`
    pub fn standing(x: f32, ground_y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, ground_y), Vec2::new(x + width, ground_y + height))
    }

    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// A static collider in the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub id: u32,
    pub tag: Tag,
    pub bounds: Aabb,
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the box
    pub point: Vec2,
    /// Surface normal pointing from the box toward the circle
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a circle against a box
pub fn circle_aabb_collision(center: Vec2, radius: f32, aabb: &Aabb) -> CollisionResult {
    let point = aabb.closest_point(center);
    let delta = center - point;
    let dist_sq = delta.length_squared();

    if aabb.contains(center) {
        // Center inside: push out through the nearest face
        let to_min = center - aabb.min;
        let to_max = aabb.max - center;
        let faces = [
            (to_min.x, Vec2::NEG_X),
            (to_max.x, Vec2::X),
            (to_min.y, Vec2::NEG_Y),
            (to_max.y, Vec2::Y),
        ];
        let (depth, normal) = faces
            .into_iter()
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or((0.0, Vec2::Y));
        return CollisionResult {
            hit: true,
            point,
            normal,
            penetration: depth + radius,
        };
    }

    if dist_sq >= radius * radius {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    CollisionResult {
        hit: true,
        point,
        normal: delta / dist,
        penetration: radius - dist,
    }
}

/// Remembers which colliders were touching last step so only new
/// contacts are reported.
#[derive(Debug, Clone, Default)]
pub struct ContactTracker {
    touching: BTreeSet<u32>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the touching set, returning ids that just started touching
    pub fn update(&mut self, now_touching: BTreeSet<u32>) -> Vec<u32> {
        let began = now_touching.difference(&self.touching).copied().collect();
        self.touching = now_touching;
        began
    }

    pub fn clear(&mut self) {
        self.touching.clear();
    }
}
