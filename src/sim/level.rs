//! Obstacle course generation
//!
//! Deterministic for a given seed, so a reset rebuilds the exact same run.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Collider, Tag};
use crate::settings::LevelSettings;

/// Ground slab depth below the walkable surface
const GROUND_DEPTH: f32 = 2.0;
/// Ground extends this far behind the spawn point
const GROUND_BACKSTOP: f32 = 20.0;
/// Ground extends this far past the last obstacle
const GROUND_RUNOFF: f32 = 40.0;

/// Static layout of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub seed: u64,
    /// Ground first, then obstacles left to right (sorted by id)
    pub colliders: Vec<Collider>,
}

impl Level {
    /// Build the course for `seed`
    pub fn generate(seed: u64, params: &LevelSettings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut colliders = Vec::with_capacity(params.obstacle_count as usize + 1);
        let mut next_id = 1;

        let mut x = params.first_obstacle_x;
        let mut obstacles = Vec::with_capacity(params.obstacle_count as usize);
        for _ in 0..params.obstacle_count {
            let height = if params.height_max > params.height_min {
                rng.random_range(params.height_min..=params.height_max)
            } else {
                params.height_min
            };
            next_id += 1;
            obstacles.push(Collider {
                id: next_id,
                tag: Tag::Obstacle,
                bounds: Aabb::standing(x, params.ground_y, params.obstacle_width, height),
            });

            let gap = if params.gap_max > params.gap_min {
                rng.random_range(params.gap_min..=params.gap_max)
            } else {
                params.gap_min
            };
            x += params.obstacle_width + gap;
        }

        colliders.push(Collider {
            id: 1,
            tag: Tag::Ground,
            bounds: Aabb::new(
                Vec2::new(-GROUND_BACKSTOP, params.ground_y - GROUND_DEPTH),
                Vec2::new(x + GROUND_RUNOFF, params.ground_y),
            ),
        });
        colliders.extend(obstacles);

        log::debug!(
            "Generated level seed={} obstacles={} length={:.1}",
            seed,
            params.obstacle_count,
            x
        );

        Self { seed, colliders }
    }

    /// Obstacles only
    pub fn obstacles(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter().filter(|c| c.tag == Tag::Obstacle)
    }

    pub fn collider(&self, id: u32) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_level() {
        let params = LevelSettings::default();
        assert_eq!(Level::generate(42, &params), Level::generate(42, &params));
    }

    #[test]
    fn test_different_seed_different_level() {
        let params = LevelSettings::default();
        assert_ne!(
            Level::generate(1, &params).colliders,
            Level::generate(2, &params).colliders
        );
    }

    #[test]
    fn test_obstacles_respect_params() {
        let params = LevelSettings::default();
        let level = Level::generate(7, &params);
        let obstacles: Vec<_> = level.obstacles().collect();
        assert_eq!(obstacles.len(), params.obstacle_count as usize);

        assert_eq!(obstacles[0].bounds.min.x, params.first_obstacle_x);
        for o in &obstacles {
            let h = o.bounds.max.y - o.bounds.min.y;
            assert!(h >= params.height_min - 1e-5 && h <= params.height_max + 1e-5);
            assert_eq!(o.bounds.min.y, params.ground_y);
        }
        for pair in obstacles.windows(2) {
            let gap = pair[1].bounds.min.x - pair[0].bounds.max.x;
            assert!(gap >= params.gap_min - 1e-4 && gap <= params.gap_max + 1e-4);
        }
    }

    #[test]
    fn test_ground_spans_course() {
        let params = LevelSettings::default();
        let level = Level::generate(7, &params);
        let ground = &level.colliders[0];
        assert_eq!(ground.tag, Tag::Ground);
        assert_eq!(ground.bounds.max.y, params.ground_y);
        let last = level.obstacles().last().unwrap();
        assert!(ground.bounds.max.x > last.bounds.max.x);
        assert!(ground.bounds.min.x < 0.0);
    }
}
