//! Lets you construct solar systems with nested orbiting more easily.

use euclid::default::{Point2D, Vector2D};
use simulator::bodies::*;

/// Use this struct to construct a solar system easily
#[derive(Default)]
pub struct SolarSystemBuilder {
    /// The stuff in the solar system
    entries: Vec<SolarSystemBuilderEntry>,
}

impl SolarSystemBuilder {
    /// Make a new empty Builder.
    pub fn new() -> Self {
        SolarSystemBuilder {
            entries: Vec::new(),
        }
    }

    /// Add an entry to the Builder.
    pub fn add(&mut self, ssbe: SolarSystemBuilderEntry) -> &mut Self {
        self.entries.push(ssbe);
        self
    }

    /// Calculates the absolute positions and velocities of all entries, and returns them
    /// in depth-first order, suitable for passing to SolarSystem::new().
    pub fn construct(&mut self) -> Vec<Orbiter> {
        let mut out: Vec<Orbiter> = Vec::new();
        // Drain will remove the stuff from the entries
        for base_entry in self.entries.drain(..) {
            // Always base it on (0, 0)
            SolarSystemBuilder::construct_one_level(
                base_entry,
                Point2D::zero(),
                Vector2D::zero(),
                &mut out,
            );
        }
        log::debug!("Built {} orbiters", out.len());
        out
    }

    /// Inner function for construct()'s recursion.
    fn construct_one_level(
        entry: SolarSystemBuilderEntry,
        parent_pos: Point2D<f64>,
        parent_vel: Vector2D<f64>,
        out: &mut Vec<Orbiter>,
    ) {
        use SolarSystemBuilderEntry as SSBE;

        match entry {
            SSBE::Orbit(Orbiter(body, kmat), children) => {
                let pos = parent_pos + kmat.pos.to_vector();
                let vel = parent_vel + kmat.vel;
                out.push(Orbiter(body, Kinemat::new(pos, vel)));
                for child in children {
                    SolarSystemBuilder::construct_one_level(child, pos, vel, out);
                }
            }

            SSBE::Locus(point, children) => {
                // Loci don't move, but they do sit relative to whatever holds them
                let pos = parent_pos + point.to_vector();
                for child in children {
                    SolarSystemBuilder::construct_one_level(child, pos, Vector2D::zero(), out);
                }
            }
        }
    }
}

/// One entry in a SolarSystemBuilder
#[derive(Clone, Debug)]
pub enum SolarSystemBuilderEntry {
    /// Orbiters have an orbiter associated with them, and have children.
    /// The kinemat is relative to the parent.
    Orbit(Orbiter, Vec<SolarSystemBuilderEntry>),
    /// Loci only consider the position, and no Orbiter is added to the SolarSystem because of it.
    /// Still has children.
    Locus(Point2D<f64>, Vec<SolarSystemBuilderEntry>),
}

impl SolarSystemBuilderEntry {
    /// Create a new SolarSystemBuilderEntry::Orbit
    pub fn new(orbiter: Orbiter) -> Self {
        SolarSystemBuilderEntry::Orbit(orbiter, Vec::new())
    }

    /// Create a new SolarSystemBuilderEntry::Orbit from a Body and a Kinemat
    pub fn new_parts(body: Body, kmat: Kinemat) -> SolarSystemBuilderEntry {
        SolarSystemBuilderEntry::Orbit(Orbiter(body, kmat), Vec::new())
    }

    /// Create a new SolarSystemBuilderEntry::Locus
    /// This can be useful if you want to center things around a locus
    /// without attaching a body.
    pub fn new_locus(pos: Point2D<f64>) -> SolarSystemBuilderEntry {
        SolarSystemBuilderEntry::Locus(pos, Vec::new())
    }

    /// Add another SolarSystemBuilderEntry as a child of this one.
    /// Returns itself so you can keep chaining it.
    pub fn add(mut self, child: Self) -> Self {
        self.children_mut().push(child);
        self
    }

    /// Add a whole bunch of SolarSystemBuilderEntries as children of this one.
    /// Consumes the children.
    pub fn add_bulk<T: IntoIterator<Item = Self>>(mut self, new_children: T) -> Self {
        self.children_mut().extend(new_children);
        self
    }

    fn children_mut(&mut self) -> &mut Vec<SolarSystemBuilderEntry> {
        match self {
            SolarSystemBuilderEntry::Orbit(_, kids) => kids,
            SolarSystemBuilderEntry::Locus(_, kids) => kids,
        }
    }
}
