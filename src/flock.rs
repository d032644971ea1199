/*
 * Flock Module
 *
 * This module defines the Flock struct: an ordered collection of boids
 * sharing one toroidal domain and one set of species parameters, advanced
 * one synchronous tick at a time.
 *
 * A step is two-phase: every boid first plans its steering against the
 * same pre-tick snapshot of the whole membership, then all updates are
 * committed. The outcome therefore does not depend on membership order,
 * unlike a sequential in-place pass where late boids would observe
 * already-advanced neighbors.
 */

use rand::Rng;

use crate::boid::{Boid, BoidState};
use crate::params::{FlockParams, ParamsError};

/// An ordered collection of boids of one species.
pub struct Flock {
    params: FlockParams,
    boids: Vec<Boid>,
    // Scratch buffer reused across ticks.
    snapshot: Vec<BoidState>,
}

impl Flock {
    /// Creates an empty flock, rejecting invalid parameters up front.
    pub fn new(params: FlockParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            boids: Vec::new(),
            snapshot: Vec::new(),
        })
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    /// Replaces the species parameters mid-simulation, with the same
    /// validation as construction.
    pub fn set_params(&mut self, params: FlockParams) -> Result<(), ParamsError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Appends a boid to the membership.
    pub fn add(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    /// Scatters `n` randomly headed boids uniformly over the domain.
    pub fn spawn(&mut self, n: usize, rng: &mut impl Rng) {
        self.boids.reserve(n);
        for _ in 0..n {
            let x = rng.gen_range(0.0..self.params.width);
            let y = rng.gen_range(0.0..self.params.height);
            let boid = Boid::new(x, y, &self.params, rng);
            self.boids.push(boid);
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Advances the whole flock by exactly one tick.
    pub fn step(&mut self) {
        self.snapshot.clear();
        self.snapshot.extend(self.boids.iter().map(Boid::snapshot));

        for (i, boid) in self.boids.iter_mut().enumerate() {
            boid.plan(i, &self.snapshot, &self.params);
        }
        for boid in &mut self.boids {
            boid.integrate(&self.params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Flock;
    use crate::boid::Boid;
    use crate::params::{FlockParams, ParamsError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn construction_rejects_invalid_parameters() {
        let params = FlockParams {
            max_force: -0.1,
            ..FlockParams::default()
        };
        assert!(matches!(
            Flock::new(params),
            Err(ParamsError::NegativeTunable { .. })
        ));
    }

    #[test]
    fn reconfiguration_rejects_invalid_parameters_and_keeps_the_old_ones() {
        let mut flock = Flock::new(FlockParams::default()).unwrap();
        let bad = FlockParams {
            width: -5.0,
            ..FlockParams::default()
        };
        assert!(flock.set_params(bad).is_err());
        assert_eq!(*flock.params(), FlockParams::default());
    }

    #[test]
    fn spawn_places_boids_inside_the_domain() {
        let mut flock = Flock::new(FlockParams::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        flock.spawn(64, &mut rng);
        assert_eq!(flock.len(), 64);
        for boid in flock.boids() {
            let p = boid.position();
            assert!(p.x >= 0.0 && p.x < flock.params().width);
            assert!(p.y >= 0.0 && p.y < flock.params().height);
        }
    }

    #[test]
    fn stepping_an_empty_flock_is_a_no_op() {
        let mut flock = Flock::new(FlockParams::default()).unwrap();
        assert!(flock.is_empty());
        flock.step();
        assert!(flock.is_empty());
    }

    #[test]
    fn membership_order_does_not_change_the_outcome() {
        // Snapshot semantics: the same three boids added in different
        // orders must end a tick in the same (per-boid) states.
        let params = FlockParams {
            width: 100.0,
            height: 100.0,
            ..FlockParams::default()
        };
        let spots = [(10.0, 10.0, 1.0, 0.0), (14.0, 12.0, 0.0, 1.0), (12.0, 15.0, -1.0, 0.5)];

        let mut forward = Flock::new(params).unwrap();
        for &(x, y, vx, vy) in &spots {
            forward.add(Boid::with_velocity(x, y, vx, vy));
        }
        let mut reverse = Flock::new(params).unwrap();
        for &(x, y, vx, vy) in spots.iter().rev() {
            reverse.add(Boid::with_velocity(x, y, vx, vy));
        }

        forward.step();
        reverse.step();

        for (a, b) in forward.boids().iter().zip(reverse.boids().iter().rev()) {
            assert_eq!(a.position(), b.position());
            assert_eq!(a.velocity(), b.velocity());
        }
    }
}
