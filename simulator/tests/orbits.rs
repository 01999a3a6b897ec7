use euclid::default::{Point2D, Vector2D};
use simulator::bodies::{Body, BodyId, Kinemat, Orbiter};
use simulator::{SimulationConfig, SolarSystem, UpdateOrder, GRAV_CONSTANT};

const STAR_MASS: f64 = 2.0e30;
const ORBIT_RADIUS: f64 = 1.5e11;
/// Light enough that the star barely notices it.
const PLANET_MASS: f64 = 1.0e20;

fn circular_speed() -> f64 {
    (GRAV_CONSTANT * STAR_MASS / ORBIT_RADIUS).sqrt()
}

fn circular_period() -> f64 {
    2.0 * std::f64::consts::PI * (ORBIT_RADIUS.powi(3) / (GRAV_CONSTANT * STAR_MASS)).sqrt()
}

/// A star at the origin and one planet at `ORBIT_RADIUS` moving at `speed`.
fn star_and_planet(speed: f64) -> Vec<Orbiter> {
    vec![
        Orbiter(Body::new("Star", STAR_MASS, 7.0e8), Kinemat::zero()),
        Orbiter(
            Body::new("Planet", PLANET_MASS, 6.0e6),
            Kinemat::new(
                Point2D::new(ORBIT_RADIUS, 0.0),
                Vector2D::new(0.0, speed),
            ),
        ),
    ]
}

// ==================================================================================
// Orbit shape
// ==================================================================================

#[test]
fn circular_orbit_closes_after_one_period() {
    const STEPS: usize = 20_000;
    let period = circular_period();
    let config = SimulationConfig::default()
        .with_dt(period / STEPS as f64)
        .with_end_time(period);
    let mut system = SolarSystem::new(star_and_planet(circular_speed()), config).unwrap();

    for _ in 0..STEPS {
        system.step();
    }

    let planet = system.history(BodyId(1));
    let start = planet.positions()[0];
    let end = planet.positions()[STEPS];
    let relative_error = (end - start).length() / ORBIT_RADIUS;
    assert!(
        relative_error < 1e-3,
        "planet ended {} orbit radii away from where it started",
        relative_error
    );

    // Halfway round it should be on the other side of the star
    let halfway = planet.positions()[STEPS / 2];
    assert!((halfway.x + ORBIT_RADIUS).abs() / ORBIT_RADIUS < 1e-2);
}

#[test]
fn circular_orbit_keeps_its_radius() {
    let period = circular_period();
    let config = SimulationConfig::default()
        .with_dt(period / 5_000.0)
        .with_end_time(period);
    let mut system = SolarSystem::new(star_and_planet(circular_speed()), config).unwrap();
    system.run();

    let star = system.history(BodyId(0));
    let planet = system.history(BodyId(1));
    for (s, p) in star.positions().iter().zip(planet.positions()) {
        let r = (*p - *s).length();
        assert!((r - ORBIT_RADIUS).abs() / ORBIT_RADIUS < 1e-2);
    }
}

// ==================================================================================
// Energy
// ==================================================================================

/// Largest relative departure from the starting energy over the run.
fn energy_drift(dt: f64, order: UpdateOrder) -> f64 {
    let config = SimulationConfig::default()
        .with_dt(dt)
        .with_end_time(circular_period())
        .with_update_order(order);
    // Slower than circular so the orbit is properly eccentric
    let mut system = SolarSystem::new(star_and_planet(0.8 * circular_speed()), config).unwrap();
    system.run();

    let start = system.total_energy(0).unwrap();
    (0..system.samples())
        .map(|step| ((system.total_energy(step).unwrap() - start) / start).abs())
        .fold(0.0, f64::max)
}

#[test]
fn energy_drift_shrinks_with_step_size() {
    let period = circular_period();
    for &order in [UpdateOrder::Sequential, UpdateOrder::Synchronized].iter() {
        let drifts: Vec<f64> = [500.0, 1_000.0, 2_000.0, 4_000.0]
            .iter()
            .map(|steps| energy_drift(period / steps, order))
            .collect();
        for pair in drifts.windows(2) {
            assert!(
                pair[1] < pair[0],
                "drift went from {} to {} with a smaller step ({:?})",
                pair[0],
                pair[1],
                order
            );
        }
        assert!(drifts[3] < 1e-2);
    }
}

#[test]
fn energy_starts_negative_for_bound_orbit() {
    let system =
        SolarSystem::new(star_and_planet(circular_speed()), SimulationConfig::default()).unwrap();
    let kinetic = system.kinetic_energy(0).unwrap();
    let potential = system.potential_energy(0).unwrap();
    // Circular orbit: KE = -PE / 2
    assert!((kinetic + potential / 2.0).abs() / kinetic < 1e-9);
    assert!(system.total_energy(0).unwrap() < 0.0);
}

// ==================================================================================
// Driver
// ==================================================================================

fn history_len(dt: f64, end_time: f64) -> usize {
    let config = SimulationConfig::default().with_dt(dt).with_end_time(end_time);
    let mut system = SolarSystem::new(star_and_planet(circular_speed()), config).unwrap();
    system.run();
    let len = system.history(BodyId(0)).len();
    for (id, _) in system.bodies() {
        assert_eq!(system.history(id).len(), len);
        assert_eq!(system.history(id).velocities().len(), len);
    }
    len
}

#[test]
fn history_length_is_steps_plus_initial_sample() {
    let day = 86_400.0;
    assert_eq!(history_len(day, 365.0 * day), 366);
    assert_eq!(history_len(1.0, 10.0), 11);
    assert_eq!(history_len(3_600.0, 3_600.0), 2);
    assert_eq!(history_len(day, 0.0), 1);
}

#[test]
fn uneven_end_time_overshoots_by_one_step() {
    // 10 / 3 -> 4 steps, ending at t = 12
    assert_eq!(history_len(3.0, 10.0), 5);

    let config = SimulationConfig::default().with_dt(3.0).with_end_time(10.0);
    let mut system = SolarSystem::new(star_and_planet(circular_speed()), config).unwrap();
    assert_eq!(system.run(), 4);
    assert_eq!(system.elapsed(), 12.0);
    assert!(system.is_finished());
    // Running again does nothing
    assert_eq!(system.run(), 0);
}

#[test]
fn runs_are_deterministic() {
    let config = SimulationConfig::default().with_end_time(100.0 * 86_400.0);
    let mut first = SolarSystem::new(star_and_planet(circular_speed()), config).unwrap();
    let mut second = SolarSystem::new(star_and_planet(circular_speed()), config).unwrap();
    first.run();
    second.run();
    assert_eq!(
        first.history(BodyId(1)).positions(),
        second.history(BodyId(1)).positions()
    );
}

// ==================================================================================
// Update order
// ==================================================================================

fn three_bodies() -> Vec<Orbiter> {
    vec![
        Orbiter(Body::new("Sun", 2.0e30, 6.957e8), Kinemat::zero()),
        Orbiter(
            Body::new("Earth", 5.972e24, 6.371e6),
            Kinemat::new(Point2D::new(1.525e11, 0.0), Vector2D::new(0.0, 29_290.0)),
        ),
        Orbiter(
            Body::new("Mars", 6.39e23, 3.3895e6),
            Kinemat::new(Point2D::new(2.499e11, 0.0), Vector2D::new(0.0, 21_970.0)),
        ),
    ]
}

/// The update rule written out longhand: each body in turn pulls its velocity
/// toward every other body using wherever they are right now, then moves.
fn longhand_sequential(steps: usize, dt: f64) -> Vec<(f64, f64)> {
    let masses: Vec<f64> = three_bodies().iter().map(|o| o.0.mass).collect();
    let mut state: Vec<(f64, f64, f64, f64)> = three_bodies()
        .iter()
        .map(|o| (o.1.pos.x, o.1.pos.y, o.1.vel.x, o.1.vel.y))
        .collect();
    for _ in 0..steps {
        for i in 0..state.len() {
            let (mut ax, mut ay) = (0.0, 0.0);
            for j in 0..state.len() {
                if i == j {
                    continue;
                }
                let dx = state[i].0 - state[j].0;
                let dy = state[i].1 - state[j].1;
                let r3 = (dx * dx + dy * dy).powf(1.5);
                let coupling = GRAV_CONSTANT * masses[i] * masses[j];
                ax += -coupling * dx / r3;
                ay += -coupling * dy / r3;
            }
            state[i].2 += ax / masses[i] * dt;
            state[i].3 += ay / masses[i] * dt;
            state[i].0 += state[i].2 * dt;
            state[i].1 += state[i].3 * dt;
        }
    }
    state.iter().map(|s| (s.0, s.1)).collect()
}

#[test]
fn sequential_order_matches_longhand_rule() {
    const STEPS: usize = 400;
    let dt = 86_400.0;
    let config = SimulationConfig::default()
        .with_dt(dt)
        .with_update_order(UpdateOrder::Sequential);
    let mut system = SolarSystem::new(three_bodies(), config).unwrap();
    for _ in 0..STEPS {
        system.step();
    }

    let expected = longhand_sequential(STEPS, dt);
    for (idx, (x, y)) in expected.into_iter().enumerate() {
        let got = system.kinemat(BodyId(idx)).pos;
        let scale = (x * x + y * y).sqrt().max(1.0);
        assert!((got.x - x).abs() / scale < 1e-9);
        assert!((got.y - y).abs() / scale < 1e-9);
    }
}

#[test]
fn update_orders_diverge() {
    let sequential = SimulationConfig::default();
    let synchronized = sequential.with_update_order(UpdateOrder::Synchronized);
    let mut a = SolarSystem::new(three_bodies(), sequential).unwrap();
    let mut b = SolarSystem::new(three_bodies(), synchronized).unwrap();
    a.step();
    b.step();
    // Nothing has moved yet when the first body goes, so it sees the same snapshot either way
    assert_eq!(a.kinemat(BodyId(0)), b.kinemat(BodyId(0)));
    assert_ne!(a.kinemat(BodyId(2)).vel, b.kinemat(BodyId(2)).vel);
}

// ==================================================================================
// Gravity
// ==================================================================================

#[test]
fn forces_from_one_snapshot_are_equal_and_opposite() {
    let system = SolarSystem::new(three_bodies(), SimulationConfig::default()).unwrap();
    let kinemats: Vec<Kinemat> = system.bodies().map(|(id, _)| system.kinemat(id)).collect();
    let table = system.couplings();
    for a in 0..3 {
        for b in 0..3 {
            if a == b {
                continue;
            }
            let ab = table.force_on(BodyId(a), BodyId(b), &kinemats);
            let ba = table.force_on(BodyId(b), BodyId(a), &kinemats);
            assert_eq!(ab, -ba);
        }
    }
}
