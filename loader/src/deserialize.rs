//! Lets you load a scenario from a file.

use serde::Deserialize;

/// A Vector2D or Point2D.
#[derive(Deserialize, Default, Clone, Copy)]
struct Vec2D(f64, f64);

/// A point in space with children in relation to it.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Orbiter {
        body: Body,
        kinemat: Kinemat,
        #[serde(default)]
        children: Vec<Entry>,
    },
    Locus {
        pos: Vec2D,
        #[serde(default)]
        children: Vec<Entry>,
    },
}

/// A Body in space
#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Prefab(String), // A pre-made pre-defined Body
    Custom { name: String, mass: f64, radius: f64 },
}

#[derive(Deserialize)]
struct Kinemat {
    pos: Vec2D,
    #[serde(default)]
    vel: Vec2D,
}

/// Anything left out falls back to `SimulationConfig::default()`.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    grav_constant: Option<f64>,
    signal_speed: Option<f64>,
    dt: Option<f64>,
    end_time: Option<f64>,
    update_order: Option<RawUpdateOrder>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawUpdateOrder {
    Sequential,
    Synchronized,
}

#[derive(Deserialize)]
struct RawLink {
    observer: String,
    target: String,
    occluder: String,
}

#[derive(Deserialize)]
struct RawScenario {
    #[serde(default)]
    config: RawConfig,
    #[serde(default)]
    link: Option<RawLink>,
    system: Vec<Entry>,
}

use crate::builder::{SolarSystemBuilder, SolarSystemBuilderEntry as SSBE};
use crate::scenario::{LinkBodies, Scenario};
use crate::LoadError;
use euclid::default::{Point2D, Vector2D};
use simulator::{bodies, SimulationConfig, UpdateOrder};

/// Parses a scenario file's contents.
pub fn load(contents: &str) -> Result<Scenario, LoadError> {
    let raw: RawScenario = json5::from_str(contents)?;
    let mut builder = SolarSystemBuilder::new();

    for root in raw.system {
        builder.add(do_one_level(root)?);
    }

    let scenario = Scenario {
        config: make_config(raw.config),
        orbiters: builder.construct(),
        link: raw
            .link
            .map(|link| LinkBodies::new(link.observer, link.target, link.occluder)),
    };
    log::debug!(
        "Loaded scenario with {} bodies, link: {:?}",
        scenario.orbiters.len(),
        scenario.link
    );
    Ok(scenario)
}

/// Reads and parses a scenario file.
pub fn load_path<P: AsRef<std::path::Path>>(path: P) -> Result<Scenario, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load(&contents)
}

fn make_config(raw: RawConfig) -> SimulationConfig {
    let defaults = SimulationConfig::default();
    SimulationConfig {
        grav_constant: raw.grav_constant.unwrap_or(defaults.grav_constant),
        signal_speed: raw.signal_speed.unwrap_or(defaults.signal_speed),
        dt: raw.dt.unwrap_or(defaults.dt),
        end_time: raw.end_time.unwrap_or(defaults.end_time),
        update_order: match raw.update_order {
            Some(RawUpdateOrder::Sequential) => UpdateOrder::Sequential,
            Some(RawUpdateOrder::Synchronized) => UpdateOrder::Synchronized,
            None => defaults.update_order,
        },
    }
}

/// Helper function to DFS convert from serde to real
fn do_one_level(entry: Entry) -> Result<SSBE, LoadError> {
    Ok(match entry {
        Entry::Locus { pos, children } => SSBE::new_locus(Point2D::new(pos.0, pos.1))
            .add_bulk(children.into_iter().map(do_one_level).collect::<Result<Vec<_>, _>>()?),
        Entry::Orbiter {
            body,
            kinemat,
            children,
        } => SSBE::new_parts(
            match body {
                Body::Prefab(id) => get_body_from_id(&id)?,
                Body::Custom { name, mass, radius } => bodies::Body { name, mass, radius },
            },
            bodies::Kinemat {
                pos: Point2D::new(kinemat.pos.0, kinemat.pos.1),
                vel: Vector2D::new(kinemat.vel.0, kinemat.vel.1),
            },
        )
        .add_bulk(children.into_iter().map(do_one_level).collect::<Result<Vec<_>, _>>()?),
    })
}

/// Gets a premade Body from a string
fn get_body_from_id(id: &str) -> Result<bodies::Body, LoadError> {
    use crate::prefabs;
    use std::collections::HashMap;

    macro_rules! maker {
        (
            $($name:ident),*
        ) => {
            {
                let mut h: HashMap<String, fn() -> bodies::Body> = HashMap::new();
                $( h.insert(stringify!($name).to_string(), prefabs::bodies::$name); )*
                h
            }
        };
    }

    lazy_static! {
        static ref BODIES: HashMap<String, fn() -> bodies::Body> = {
            let h = maker![
                sun,
                mercury,
                venus,
                earth,
                luna,
                mars,
                phobos,
                deimos,
                jupiter
            ];

            h
        };
    }

    BODIES
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab(id.to_string()))
}
