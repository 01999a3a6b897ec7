//! Reads scenarios from files and builds them out of prefabs.
//! Mostly it just re-exports its contents.

pub mod builder;
pub use builder::{SolarSystemBuilder, SolarSystemBuilderEntry}; // SolarSystemBuilder directly
pub mod deserialize;
pub mod prefabs; // prefabs::bodies::whatever
pub mod scenario;
pub use deserialize::*;
pub use scenario::{LinkBodies, Scenario};

use thiserror::Error;

#[macro_use]
extern crate lazy_static;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("couldn't read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("couldn't parse scenario: {0}")]
    Parse(#[from] json5::Error),

    #[error("no prefab body named {0:?}")]
    UnknownPrefab(String),
}
