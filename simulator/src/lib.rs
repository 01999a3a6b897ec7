//! Handles the simulation of the solar system

pub mod analysis;
pub mod bodies;
pub mod config;
mod error;
pub mod gravity;
pub mod integrator;

pub use analysis::{conjunction_windows_in, LinkSample, LinkSummary};
pub use config::{SimulationConfig, AU, DAY_SECONDS, GRAV_CONSTANT, SPEED_OF_LIGHT, YEAR_SECONDS};
pub use error::SimError;
pub use integrator::UpdateOrder;

use crate::bodies::{Body, BodyId, History, Kinemat, Orbiter};
use crate::gravity::CouplingTable;

/// A set of bodies pulling on each other, plus everything they've done so far.
pub struct SolarSystem {
    /// Indexed by `BodyId`, in the order they were given.
    bodies: Vec<Body>,
    /// Where everything is right now. Same indexing as `bodies`.
    kinemats: Vec<Kinemat>,
    /// One per body. Always all the same length.
    histories: Vec<History>,
    couplings: CouplingTable,
    config: SimulationConfig,
    steps_elapsed: usize,
}

impl SolarSystem {
    /// Set up a run. Everything that could make the run meaningless gets checked
    /// here, before a single step happens.
    pub fn new(orbiters: Vec<Orbiter>, config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        validate_orbiters(&orbiters)?;

        let mut bodies = Vec::with_capacity(orbiters.len());
        let mut kinemats = Vec::with_capacity(orbiters.len());
        let mut histories = Vec::with_capacity(orbiters.len());
        for Orbiter(body, kmat) in orbiters {
            bodies.push(body);
            kinemats.push(kmat);
            histories.push(History::starting_at(kmat));
        }
        let couplings = CouplingTable::new(&bodies, config.grav_constant);

        log::debug!(
            "Solar system with {} bodies, dt = {}s, {} steps planned ({:?} order)",
            bodies.len(),
            config.dt,
            config.total_steps(),
            config.update_order
        );

        Ok(SolarSystem {
            bodies,
            kinemats,
            histories,
            couplings,
            config,
            steps_elapsed: 0,
        })
    }

    /// Advance everything by one step and record where it all ended up.
    /// This works even past the end time; stopping is up to the caller.
    pub fn step(&mut self) {
        integrator::step(
            &mut self.kinemats,
            &self.bodies,
            &self.couplings,
            self.config.dt,
            self.config.update_order,
        );
        for (history, &kmat) in self.histories.iter_mut().zip(self.kinemats.iter()) {
            history.record(kmat);
        }
        self.steps_elapsed += 1;
        log::trace!("step {} done, t = {}s", self.steps_elapsed, self.elapsed());
    }

    /// Whether the elapsed time has reached the configured end time.
    pub fn is_finished(&self) -> bool {
        self.elapsed() >= self.config.end_time
    }

    /// Step until the end time. Returns how many steps this call took.
    pub fn run(&mut self) -> usize {
        let start = self.steps_elapsed;
        while !self.is_finished() {
            self.step();
        }
        let taken = self.steps_elapsed - start;
        log::debug!(
            "Ran {} steps, simulated {}s with {} samples per body",
            taken,
            self.elapsed(),
            self.samples()
        );
        taken
    }

    /// Simulated seconds so far.
    /// Worked out from the step count so it doesn't pick up rounding drift.
    pub fn elapsed(&self) -> f64 {
        self.steps_elapsed as f64 * self.config.dt
    }

    pub fn steps(&self) -> usize {
        self.steps_elapsed
    }

    /// How many samples each body's history has. Always `steps() + 1`.
    pub fn samples(&self) -> usize {
        self.steps_elapsed + 1
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn couplings(&self) -> &CouplingTable {
        &self.couplings
    }

    /// All the bodies, in registration order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(idx, body)| (BodyId(idx), body))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Panics if `id` didn't come from this system.
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.index()]
    }

    /// Panics if `id` didn't come from this system.
    pub fn kinemat(&self, id: BodyId) -> Kinemat {
        self.kinemats[id.index()]
    }

    /// Panics if `id` didn't come from this system.
    pub fn history(&self, id: BodyId) -> &History {
        &self.histories[id.index()]
    }

    /// Like `body`, but an `id` from somewhere else is an error instead of a panic.
    pub fn get_body(&self, id: BodyId) -> Result<&Body, SimError> {
        self.bodies
            .get(id.index())
            .ok_or(SimError::UnknownBodyId(id.index()))
    }

    pub fn body_id(&self, name: &str) -> Result<BodyId, SimError> {
        self.bodies
            .iter()
            .position(|body| body.name == name)
            .map(BodyId)
            .ok_or_else(|| SimError::UnknownBody(name.to_string()))
    }

    /// Where a body was at a recorded step.
    pub fn kinemat_at(&self, id: BodyId, step: usize) -> Result<Kinemat, SimError> {
        self.histories
            .get(id.index())
            .ok_or(SimError::UnknownBodyId(id.index()))?
            .at(step)
            .ok_or(SimError::StepOutOfRange {
                step,
                samples: self.samples(),
            })
    }

    /// Total kinetic energy at a recorded step, in joules.
    pub fn kinetic_energy(&self, step: usize) -> Result<f64, SimError> {
        let mut total = 0.0;
        for (id, body) in self.bodies() {
            let vel = self.kinemat_at(id, step)?.vel;
            total += 0.5 * body.mass * vel.square_length();
        }
        Ok(total)
    }

    /// Total gravitational potential energy at a recorded step, in joules.
    pub fn potential_energy(&self, step: usize) -> Result<f64, SimError> {
        let mut total = 0.0;
        for a in (0..self.bodies.len()).map(BodyId) {
            let a_pos = self.kinemat_at(a, step)?.pos;
            for b in (a.index() + 1..self.bodies.len()).map(BodyId) {
                let b_pos = self.kinemat_at(b, step)?.pos;
                total -= self.couplings.get(a, b) / (a_pos - b_pos).length();
            }
        }
        Ok(total)
    }

    pub fn total_energy(&self, step: usize) -> Result<f64, SimError> {
        Ok(self.kinetic_energy(step)? + self.potential_energy(step)?)
    }
}

/// Checks everything about the bodies that would make a run nonsense.
fn validate_orbiters(orbiters: &[Orbiter]) -> Result<(), SimError> {
    if orbiters.is_empty() {
        return Err(SimError::NoBodies);
    }
    for (idx, Orbiter(body, kmat)) in orbiters.iter().enumerate() {
        if !(body.mass > 0.0 && body.mass.is_finite()) {
            return Err(SimError::NonPositiveMass {
                name: body.name.clone(),
                mass: body.mass,
            });
        }
        if !(body.radius >= 0.0 && body.radius.is_finite()) {
            return Err(SimError::NegativeRadius {
                name: body.name.clone(),
                radius: body.radius,
            });
        }
        for Orbiter(other, other_kmat) in &orbiters[..idx] {
            if other.name == body.name {
                return Err(SimError::DuplicateName(body.name.clone()));
            }
            if other_kmat.pos == kmat.pos {
                return Err(SimError::CoincidentBodies {
                    first: other.name.clone(),
                    second: body.name.clone(),
                });
            }
        }
    }
    Ok(())
}
