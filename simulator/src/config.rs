//! Tunable constants for a run.

use crate::integrator::UpdateOrder;
use crate::SimError;

/// Gravitational constant, in m^3/(kg*s^2).
pub const GRAV_CONSTANT: f64 = 6.67e-11;
/// Speed of light, in m/s. Radio goes this fast too.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Astronomical unit, rounded the way the Earth-Mars scenario uses it.
pub const AU: f64 = 1.5e11;
pub const DAY_SECONDS: f64 = 24.0 * 60.0 * 60.0;
pub const YEAR_SECONDS: f64 = 365.0 * DAY_SECONDS;

/// How a run is set up, apart from the bodies themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub grav_constant: f64,
    /// How fast signals travel between bodies, in m/s.
    pub signal_speed: f64,
    /// Fixed step size, in seconds.
    pub dt: f64,
    /// Stop stepping once this many seconds have elapsed.
    pub end_time: f64,
    pub update_order: UpdateOrder,
}

impl Default for SimulationConfig {
    /// One day steps for a thousand years.
    fn default() -> Self {
        Self {
            grav_constant: GRAV_CONSTANT,
            signal_speed: SPEED_OF_LIGHT,
            dt: DAY_SECONDS,
            end_time: 1000.0 * YEAR_SECONDS,
            update_order: UpdateOrder::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_grav_constant(mut self, grav_constant: f64) -> Self {
        self.grav_constant = grav_constant;
        self
    }

    pub fn with_signal_speed(mut self, signal_speed: f64) -> Self {
        self.signal_speed = signal_speed;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_update_order(mut self, update_order: UpdateOrder) -> Self {
        self.update_order = update_order;
        self
    }

    /// How many steps a full run takes.
    /// Stepping stops as soon as the elapsed time reaches `end_time`,
    /// so a step size that doesn't divide evenly overshoots by less than one step.
    pub fn total_steps(&self) -> usize {
        (self.end_time / self.dt).ceil() as usize
    }

    pub(crate) fn validate(&self) -> Result<(), SimError> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if !(self.end_time >= 0.0 && self.end_time.is_finite()) {
            return Err(SimError::InvalidEndTime(self.end_time));
        }
        if !(self.signal_speed > 0.0 && self.signal_speed.is_finite()) {
            return Err(SimError::InvalidSignalSpeed(self.signal_speed));
        }
        if self.end_time > 0.0 && self.end_time < self.dt {
            log::warn!(
                "end time {}s is shorter than one step of {}s, the run will overshoot it",
                self.end_time,
                self.dt
            );
        }
        Ok(())
    }
}
