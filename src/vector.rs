/*
 * Vector Module
 *
 * This module defines the immutable 2D vector value type used throughout
 * the flocking core, along with the toroidal (wrap-around) difference and
 * the coordinate wrap that keeps positions inside the fundamental domain.
 */

use std::ops::{Add, AddAssign, Mul, Sub};

/// An immutable 2D vector. Every operation returns a new value; equality
/// is exact component-wise comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor.
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

impl Vec2 {
    pub const ZERO: Vec2 = vec2(0.0, 0.0);

    /// True iff both components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn norm_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Returns this vector unchanged if its magnitude is at most `max`,
    /// otherwise rescaled to magnitude exactly `max`. The zero vector is
    /// returned as-is, never divided by its own (zero) norm.
    pub fn limit(self, max: f32) -> Vec2 {
        let norm = self.norm();
        if norm <= max || norm == 0.0 {
            self
        } else {
            self * (max / norm)
        }
    }

    /// Shortest vector on the torus from `other` to `self`.
    ///
    /// Each component of `self - other` is wrapped into the interval
    /// `[-dim/2, dim/2]` (the minimal-image convention), which yields the
    /// exact shortest connecting vector when opposite edges of the
    /// `width x height` rectangle are glued together. Toroidal distance is
    /// the norm of this difference.
    pub fn toral_sub(self, other: Vec2, width: f32, height: f32) -> Vec2 {
        vec2(
            wrap_delta(self.x - other.x, width),
            wrap_delta(self.y - other.y, height),
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        vec2(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        vec2(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f32) -> Vec2 {
        vec2(self.x * scalar, self.y * scalar)
    }
}

/// Wraps a coordinate difference into `[-dim/2, dim/2]`.
fn wrap_delta(delta: f32, dim: f32) -> f32 {
    if delta > dim / 2.0 {
        delta - dim
    } else if delta < -dim / 2.0 {
        delta + dim
    } else {
        delta
    }
}

/// Wraps a coordinate into `[0, dim)`. Corrects a single wrap only, which
/// suffices because per-tick displacement is bounded by the speed limit.
pub fn wrap_coord(x: f32, dim: f32) -> f32 {
    if x >= dim {
        x - dim
    } else if x < 0.0 {
        x + dim
    } else {
        x
    }
}
