//! A ready-to-run setup: the bodies, the run settings, and which link to watch.

use simulator::bodies::{BodyId, Orbiter};
use simulator::{SimError, SimulationConfig, SolarSystem};

/// Names of the three bodies a link report is about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkBodies {
    pub observer: String,
    pub target: String,
    /// The body that might get in the way. Usually the star.
    pub occluder: String,
}

impl LinkBodies {
    pub fn new(
        observer: impl Into<String>,
        target: impl Into<String>,
        occluder: impl Into<String>,
    ) -> Self {
        Self {
            observer: observer.into(),
            target: target.into(),
            occluder: occluder.into(),
        }
    }

    /// Look up (observer, target, occluder) in a system.
    pub fn resolve(&self, system: &SolarSystem) -> Result<(BodyId, BodyId, BodyId), SimError> {
        Ok((
            system.body_id(&self.observer)?,
            system.body_id(&self.target)?,
            system.body_id(&self.occluder)?,
        ))
    }
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub config: SimulationConfig,
    pub orbiters: Vec<Orbiter>,
    pub link: Option<LinkBodies>,
}

impl Scenario {
    /// Validate and set up the system. Nothing has been stepped yet.
    pub fn into_system(self) -> Result<SolarSystem, SimError> {
        SolarSystem::new(self.orbiters, self.config)
    }
}
