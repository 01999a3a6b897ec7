//! Handles bodies and such

use euclid::default::{Point2D, Vector2D};

/// The representation of a body, like a star or a planet.
/// Doesn't store its position or velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Display name. Also how scenario files and queries refer to the body.
    pub name: String,
    /// In kg. Never changes once the simulation starts.
    pub mass: f64,
    /// In meters. Only the link analysis cares about this.
    pub radius: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
        }
    }
}

/// A Kinemat holds all the kinematic information about something.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kinemat {
    pub pos: Point2D<f64>,
    pub vel: Vector2D<f64>,
}

impl Kinemat {
    pub fn new(pos: Point2D<f64>, vel: Vector2D<f64>) -> Self {
        Self { pos, vel }
    }

    pub fn zero() -> Self {
        Self {
            pos: Point2D::zero(),
            vel: Vector2D::zero(),
        }
    }

    /// Semi-implicit Euler: the position moves with the velocity we just updated.
    pub fn update(&mut self, dt: f64, acc: Vector2D<f64>) {
        self.vel += acc * dt;
        self.pos += self.vel * dt;
    }
}

/// An Orbiter is a combination of a Body and a Kinemat.
/// In other words, a thing and where it is (and how fast it's going.)
#[derive(Clone, Debug, PartialEq)]
pub struct Orbiter(pub Body, pub Kinemat);

/// Handle to a body inside a `SolarSystem`.
/// It's just the order the body was registered in, so it's stable for the whole run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Everything a body has been through.
/// Index 0 is where it started; every completed step pushes one more entry.
#[derive(Clone, Debug, Default)]
pub struct History {
    positions: Vec<Point2D<f64>>,
    velocities: Vec<Vector2D<f64>>,
}

impl History {
    pub(crate) fn starting_at(kmat: Kinemat) -> Self {
        Self {
            positions: vec![kmat.pos],
            velocities: vec![kmat.vel],
        }
    }

    pub(crate) fn record(&mut self, kmat: Kinemat) {
        self.positions.push(kmat.pos);
        self.velocities.push(kmat.vel);
    }

    pub fn positions(&self) -> &[Point2D<f64>] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vector2D<f64>] {
        &self.velocities
    }

    /// Number of recorded samples, including the initial one.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The kinemat at a recorded step, if there is one.
    pub fn at(&self, step: usize) -> Option<Kinemat> {
        Some(Kinemat::new(
            *self.positions.get(step)?,
            *self.velocities.get(step)?,
        ))
    }
}
