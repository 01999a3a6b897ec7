//! Prefabricated orbiters and solar systems.

pub mod bodies {
    use simulator::bodies::Body;

    /// Returns our Sun, rounded off to 2e30 kg like the relay scenarios use.
    pub fn sun() -> Body {
        Body::new("The Sun", 2.0e30, 695_700_000f64)
    }

    /// Returns Mercury.
    /// Apparently Mercury's orbit is going to be a little off. But I'm no Einstein.
    pub fn mercury() -> Body {
        Body::new("Mercury", 3.3011e23, 2_439_700f64)
    }

    /// Returns Venus.
    pub fn venus() -> Body {
        Body::new("Venus", 4.8675e24, 6_051_800f64)
    }

    /// Returns the Earth.
    pub fn earth() -> Body {
        Body::new("Earth", 5.972e24, 6_371_000f64)
    }

    /// Returns our Moon.
    pub fn luna() -> Body {
        Body::new("Luna", 7.342e22, 1_737_400f64)
    }

    /// Returns Mars
    pub fn mars() -> Body {
        Body::new("Mars", 6.39e23, 3_389_500f64)
    }

    pub fn phobos() -> Body {
        Body::new("Phobos", 1.08e16, 11_100f64)
    }

    pub fn deimos() -> Body {
        Body::new("Deimos", 1.5e15, 6_300f64)
    }

    /// Returns Jupiter.
    pub fn jupiter() -> Body {
        Body::new("Jupiter", 1.8982e27, 69_911_000f64)
    }
}

pub mod solar_systems {
    use crate::builder::{SolarSystemBuilder, SolarSystemBuilderEntry as SSBE};
    use crate::prefabs::bodies;
    use crate::scenario::LinkBodies;
    use euclid::default::{Point2D, Vector2D};
    use simulator::bodies::*;
    use simulator::AU;

    /// Sun, Earth and Mars, all starting lined up on the x axis on the same side.
    /// Earth and Mars go round anticlockwise.
    pub fn earth_mars() -> Vec<Orbiter> {
        SolarSystemBuilder::new()
            .add(
                SSBE::new_parts(bodies::sun(), Kinemat::zero())
                    .add(SSBE::new_parts(
                        bodies::earth(),
                        Kinemat::new(Point2D::new(1.0167 * AU, 0f64), Vector2D::new(0f64, 29_290f64)),
                    ))
                    .add(SSBE::new_parts(
                        bodies::mars(),
                        Kinemat::new(Point2D::new(1.666 * AU, 0f64), Vector2D::new(0f64, 21_970f64)),
                    )),
            )
            .construct()
    }

    /// Like `earth_mars`, but the Earth brought its moon.
    /// Luna is the thing most likely to get in the way that isn't the Sun.
    pub fn earth_luna_mars() -> Vec<Orbiter> {
        SolarSystemBuilder::new()
            .add(
                SSBE::new_parts(bodies::sun(), Kinemat::zero())
                    .add(
                        SSBE::new_parts(
                            bodies::earth(),
                            Kinemat::new(
                                Point2D::new(1.0167 * AU, 0f64),
                                Vector2D::new(0f64, 29_290f64),
                            ),
                        )
                        // the moon is attached to earth
                        .add(SSBE::new_parts(
                            bodies::luna(),
                            Kinemat::new(
                                Point2D::new(0f64, 384_399_000f64),
                                Vector2D::new(-1_022f64, 0f64),
                            ),
                        )),
                    )
                    .add(SSBE::new_parts(
                        bodies::mars(),
                        Kinemat::new(Point2D::new(1.666 * AU, 0f64), Vector2D::new(0f64, 21_970f64)),
                    )),
            )
            .construct()
    }

    /// Earth talking to Mars, with the Sun in the way sometimes.
    pub fn earth_mars_link() -> LinkBodies {
        LinkBodies::new("Earth", "Mars", "The Sun")
    }
}
