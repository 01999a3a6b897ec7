//! Advancing every body by one fixed step.

use crate::bodies::{Body, BodyId, Kinemat};
use crate::gravity::{acceleration_on, CouplingTable};
use euclid::default::Vector2D;

/// Which positions a body sees when it works out its acceleration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateOrder {
    /// Bodies move one at a time in registration order, and each one sees the
    /// bodies before it at their already-advanced positions.
    /// This is not physically right (the coupling is lopsided within a step),
    /// but existing Earth-Mars trajectories were produced this way.
    Sequential,
    /// Every acceleration is computed from the same snapshot before anything moves.
    /// Plain symplectic Euler.
    Synchronized,
}

impl Default for UpdateOrder {
    fn default() -> Self {
        UpdateOrder::Sequential
    }
}

/// Advance all the kinemats by `dt`.
pub fn step(
    kinemats: &mut [Kinemat],
    bodies: &[Body],
    table: &CouplingTable,
    dt: f64,
    order: UpdateOrder,
) {
    match order {
        UpdateOrder::Sequential => {
            for id in (0..kinemats.len()).map(BodyId) {
                let acc = acceleration_on(id, bodies, kinemats, table);
                kinemats[id.index()].update(dt, acc);
            }
        }
        UpdateOrder::Synchronized => {
            let accs: Vec<Vector2D<f64>> = (0..kinemats.len())
                .map(|idx| acceleration_on(BodyId(idx), bodies, kinemats, table))
                .collect();
            for (kmat, acc) in kinemats.iter_mut().zip(accs) {
                kmat.update(dt, acc);
            }
        }
    }
}
