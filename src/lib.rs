/*
 * Toroidal Flocking Core - Module Definitions
 *
 * This file defines the module structure for the flocking simulation core.
 * The crate simulates emergent group movement of point agents on a bounded,
 * wrap-around 2D plane using the three classical Reynolds steering rules:
 * separation, alignment, and cohesion. Rendering, input, and loop cadence
 * belong to the hosting application and are not part of this crate.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use flock::Flock;
pub use params::{FlockParams, ParamsError};
pub use vector::Vec2;

// Define modules
pub mod boid;
pub mod flock;
pub mod params;
pub mod trig;
pub mod vector;

// Constants

/// Floor applied to squared neighbor distances before inverse-distance
/// weighting, so coincident boids cannot produce infinite forces.
pub const EPSILON: f32 = 1.0e-6;
