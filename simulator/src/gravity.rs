//! Newtonian gravity between pairs of bodies.

use crate::bodies::{Body, BodyId, Kinemat};
use euclid::default::{Point2D, Vector2D};

/// `G * m_i * m_j` for every pair of bodies.
/// Masses never change, so this gets built once and never touched again.
#[derive(Clone, Debug)]
pub struct CouplingTable {
    count: usize,
    /// Row-major, `count * count`. The diagonal is zero.
    constants: Vec<f64>,
}

impl CouplingTable {
    pub fn new(bodies: &[Body], grav_constant: f64) -> Self {
        let count = bodies.len();
        let mut constants = vec![0.0; count * count];
        for (i, a) in bodies.iter().enumerate() {
            for (j, b) in bodies.iter().enumerate().skip(i + 1) {
                let coupling = grav_constant * a.mass * b.mass;
                constants[i * count + j] = coupling;
                constants[j * count + i] = coupling;
            }
        }
        Self { count, constants }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The coupling constant between two bodies. Symmetric.
    pub fn get(&self, a: BodyId, b: BodyId) -> f64 {
        self.constants[a.index() * self.count + b.index()]
    }

    /// The force `b` exerts on `a`, using wherever `kinemats` says they are right now.
    pub fn force_on(&self, a: BodyId, b: BodyId, kinemats: &[Kinemat]) -> Vector2D<f64> {
        force(
            kinemats[a.index()].pos,
            kinemats[b.index()].pos,
            self.get(a, b),
        )
    }
}

/// Force exerted on a body at `a` by a body at `b`, given their coupling constant.
/// Points from `a` towards `b` with magnitude `coupling / r^2`.
///
/// Nothing stops `a == b`; you get infinities or NaNs back.
pub fn force(a: Point2D<f64>, b: Point2D<f64>, coupling: f64) -> Vector2D<f64> {
    let delta = a - b;
    // |r|^3 in one go instead of a sqrt and then a cube
    let r3 = (delta.x * delta.x + delta.y * delta.y).powf(1.5);
    Vector2D::new(-coupling * delta.x / r3, -coupling * delta.y / r3)
}

/// Total acceleration on body `a` from every other body.
pub fn acceleration_on(
    a: BodyId,
    bodies: &[Body],
    kinemats: &[Kinemat],
    table: &CouplingTable,
) -> Vector2D<f64> {
    let mut wip_force = Vector2D::<f64>::zero();
    for other in (0..kinemats.len()).map(BodyId) {
        if other == a {
            continue;
        }
        wip_force += table.force_on(a, other, kinemats);
    }
    wip_force / bodies[a.index()].mass
}
