/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Neighbor geometry is toroidal: boids near one edge of the domain
 * perceive boids near the opposite edge as nearby.
 */

use rand::Rng;

use crate::params::FlockParams;
use crate::trig;
use crate::vector::{vec2, wrap_coord, Vec2};
use crate::EPSILON;

/// One flocking entity: a point agent with position, velocity, and a
/// per-tick transient acceleration.
#[derive(Clone, Copy, Debug)]
pub struct Boid {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
}

/// Pre-tick snapshot of one boid, read by every other boid during a step.
#[derive(Clone, Copy, Debug)]
pub struct BoidState {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Boid {
    /// Creates a boid at `(x, y)` with a randomly directed initial velocity
    /// whose magnitude lies in `[0.75 * max_speed, max_speed]`.
    pub fn new(x: f32, y: f32, params: &FlockParams, rng: &mut impl Rng) -> Self {
        let angle = rng.gen_range(0.0..trig::TWO_PI);
        let mag = 0.75 * params.max_speed + rng.gen::<f32>() * 0.25 * params.max_speed;
        Self {
            position: vec2(x, y),
            velocity: vec2(mag * trig::cos(angle), mag * trig::sin(angle)),
            acceleration: Vec2::ZERO,
        }
    }

    /// Creates a boid with an explicit velocity, bypassing the random
    /// initialization. Intended for hosts that place boids deterministically
    /// and for tests.
    pub fn with_velocity(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            position: vec2(x, y),
            velocity: vec2(vx, vy),
            acceleration: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Screen-style orientation angle of the boid in radians, computed with
    /// the fast atan2. Implementation-defined when the velocity is exactly
    /// zero, which does not occur after a nonzero initial velocity.
    pub fn heading(&self) -> f32 {
        trig::atan2(self.velocity.x, -self.velocity.y)
    }

    pub(crate) fn snapshot(&self) -> BoidState {
        BoidState {
            position: self.position,
            velocity: self.velocity,
        }
    }

    /// Accumulates the three weighted steering forces against the pre-tick
    /// snapshot. `index` is this boid's own slot in `others` and is skipped
    /// during every neighbor scan.
    pub(crate) fn plan(&mut self, index: usize, others: &[BoidState], params: &FlockParams) {
        // Unit mass, so force accumulates directly as acceleration.
        let separation = self.separation(index, others, params) * params.separation_weight;
        let alignment = self.alignment(index, others, params) * params.alignment_weight;
        let cohesion = self.cohesion(index, others, params) * params.cohesion_weight;
        self.acceleration += separation + alignment + cohesion;
    }

    /// Commits the planned acceleration: clamp speed, advance the position,
    /// reset the acceleration, and wrap back onto the torus.
    pub(crate) fn integrate(&mut self, params: &FlockParams) {
        self.velocity = (self.velocity + self.acceleration).limit(params.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
        self.position = vec2(
            wrap_coord(self.position.x, params.width),
            wrap_coord(self.position.y, params.height),
        );
    }

    /// Returns the magnitude-limited steering correction toward a desired
    /// direction: desired rescaled to `max_speed`, minus the current
    /// velocity, limited to `max_force`. Zero in, zero out.
    fn reynolds(&self, desired: Vec2, params: &FlockParams) -> Vec2 {
        if desired.is_zero() {
            return Vec2::ZERO;
        }
        (desired * (params.max_speed / desired.norm()) - self.velocity).limit(params.max_force)
    }

    /// Steering force toward a target position.
    fn seek(&self, target: Vec2, params: &FlockParams) -> Vec2 {
        self.reynolds(target - self.position, params)
    }

    // Calculate separation force (avoid crowding neighbors)
    fn separation(&self, index: usize, others: &[BoidState], params: &FlockParams) -> Vec2 {
        let mut steer = Vec2::ZERO;
        let mut count = 0;

        for (i, other) in others.iter().enumerate() {
            if i == index {
                continue;
            }
            let offset = self
                .position
                .toral_sub(other.position, params.width, params.height);
            let dist_sq = offset.norm_squared();
            if dist_sq < params.separation_radius_sq {
                // Closer neighbors push proportionally harder; the floor
                // keeps coincident boids from producing infinities.
                steer += offset * (1.0 / dist_sq.max(EPSILON));
                count += 1;
            }
        }

        if count > 0 {
            steer = steer * (1.0 / count as f32);
        }
        self.reynolds(steer, params)
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    fn alignment(&self, index: usize, others: &[BoidState], params: &FlockParams) -> Vec2 {
        let mut steer = Vec2::ZERO;
        let mut count = 0;

        for (i, other) in others.iter().enumerate() {
            if i == index {
                continue;
            }
            let dist_sq = self
                .position
                .toral_sub(other.position, params.width, params.height)
                .norm_squared();
            if dist_sq < params.alignment_radius_sq {
                steer += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            steer = steer * (1.0 / count as f32);
        }
        self.reynolds(steer, params)
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    fn cohesion(&self, index: usize, others: &[BoidState], params: &FlockParams) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for (i, other) in others.iter().enumerate() {
            if i == index {
                continue;
            }
            let dist_sq = self
                .position
                .toral_sub(other.position, params.width, params.height)
                .norm_squared();
            if dist_sq < params.cohesion_radius_sq {
                sum += other.position;
                count += 1;
            }
        }

        if count > 0 {
            self.seek(sum * (1.0 / count as f32), params)
        } else {
            Vec2::ZERO
        }
    }
}
