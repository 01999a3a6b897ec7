//! Line-of-sight analysis between two bodies, with a third one possibly in the way.
//!
//! Everything here reads recorded history and never touches the simulation state,
//! so it can be called any time after the steps you care about have run.

use crate::bodies::BodyId;
use crate::{SimError, SolarSystem};
use euclid::default::Point2D;
use std::ops::Range;

/// What the link between two bodies looks like at one recorded step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkSample {
    /// Straight-line distance, in meters.
    pub distance: f64,
    /// One-way signal delay, in seconds.
    pub delay: f64,
    /// Whether the occluder is blocking the line of sight.
    pub is_conjunction: bool,
}

impl LinkSample {
    pub fn delay_minutes(&self) -> f64 {
        self.delay / 60.0
    }
}

/// Where along the segment `observer -> target` the occluder's projection lands.
/// 0 is at the observer, 1 is at the target.
pub fn projection_scale(
    observer: Point2D<f64>,
    target: Point2D<f64>,
    occluder: Point2D<f64>,
) -> f64 {
    let v = target - observer;
    let u = occluder - observer;
    u.dot(v) / v.dot(v)
}

/// How far the occluder is from the line of sight.
///
/// If its projection falls outside the segment (behind the observer, or at or
/// past the target) the occluder never counts as being in the way, so this is
/// infinite rather than the distance to the nearest endpoint.
pub fn distance_to_sight_line(
    observer: Point2D<f64>,
    target: Point2D<f64>,
    occluder: Point2D<f64>,
) -> f64 {
    let k = projection_scale(observer, target, occluder);
    if !(0.0..1.0).contains(&k) {
        return f64::INFINITY;
    }
    let projected = observer + (target - observer) * k;
    (occluder - projected).length()
}

/// Whether something of `safety_radius` at `occluder` cuts the line of sight.
pub fn line_of_sight_blocked(
    observer: Point2D<f64>,
    target: Point2D<f64>,
    occluder: Point2D<f64>,
    safety_radius: f64,
) -> bool {
    distance_to_sight_line(observer, target, occluder) < safety_radius
}

/// Every run of consecutive blocked samples in a series that starts at step 0.
pub fn conjunction_windows_in(series: &[LinkSample]) -> Vec<Range<usize>> {
    let mut windows = Vec::new();
    let mut start: Option<usize> = None;
    for (step, sample) in series.iter().enumerate() {
        match (start, sample.is_conjunction) {
            (None, true) => start = Some(step),
            (Some(begin), false) => {
                windows.push(begin..step);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        windows.push(begin..series.len());
    }
    windows
}

/// Extremes of a link over a whole run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkSummary {
    pub samples: usize,
    pub min_distance: f64,
    pub max_distance: f64,
    pub min_delay: f64,
    pub max_delay: f64,
    /// How many recorded steps had the line of sight blocked.
    pub blocked_steps: usize,
}

impl LinkSummary {
    /// `None` if there aren't any samples.
    pub fn from_samples(samples: &[LinkSample]) -> Option<Self> {
        let first = samples.first()?;
        let mut summary = LinkSummary {
            samples: samples.len(),
            min_distance: first.distance,
            max_distance: first.distance,
            min_delay: first.delay,
            max_delay: first.delay,
            blocked_steps: 0,
        };
        for sample in samples {
            summary.min_distance = summary.min_distance.min(sample.distance);
            summary.max_distance = summary.max_distance.max(sample.distance);
            summary.min_delay = summary.min_delay.min(sample.delay);
            summary.max_delay = summary.max_delay.max(sample.delay);
            if sample.is_conjunction {
                summary.blocked_steps += 1;
            }
        }
        Some(summary)
    }
}

impl SolarSystem {
    /// Distance, delay and whether `occluder` blocks the line between
    /// `observer` and `target` at `step`.
    ///
    /// The occluder has to come within its own radius plus twice the observer's
    /// radius of the sight line to count as blocking.
    pub fn analyze(
        &self,
        step: usize,
        observer: BodyId,
        target: BodyId,
        occluder: BodyId,
    ) -> Result<LinkSample, SimError> {
        let observer_pos = self.position_at(observer, step)?;
        let target_pos = self.position_at(target, step)?;
        let occluder_pos = self.position_at(occluder, step)?;

        let distance = (target_pos - observer_pos).length();
        let safety_radius =
            self.get_body(occluder)?.radius + 2.0 * self.get_body(observer)?.radius;
        Ok(LinkSample {
            distance,
            delay: distance / self.config().signal_speed,
            is_conjunction: line_of_sight_blocked(
                observer_pos,
                target_pos,
                occluder_pos,
                safety_radius,
            ),
        })
    }

    /// Same as `analyze` but looks the bodies up by name.
    pub fn analyze_named(
        &self,
        step: usize,
        observer: &str,
        target: &str,
        occluder: &str,
    ) -> Result<LinkSample, SimError> {
        self.analyze(
            step,
            self.body_id(observer)?,
            self.body_id(target)?,
            self.body_id(occluder)?,
        )
    }

    /// `analyze` for every recorded step, in order.
    pub fn link_series(
        &self,
        observer: BodyId,
        target: BodyId,
        occluder: BodyId,
    ) -> Result<Vec<LinkSample>, SimError> {
        (0..self.samples())
            .map(|step| self.analyze(step, observer, target, occluder))
            .collect()
    }

    /// Every run of consecutive steps where the line of sight is blocked.
    pub fn conjunction_windows(
        &self,
        observer: BodyId,
        target: BodyId,
        occluder: BodyId,
    ) -> Result<Vec<Range<usize>>, SimError> {
        let series = self.link_series(observer, target, occluder)?;
        Ok(conjunction_windows_in(&series))
    }

    /// How fast a body was going at `step`, in m/s.
    pub fn speed(&self, id: BodyId, step: usize) -> Result<f64, SimError> {
        Ok(self.kinemat_at(id, step)?.vel.length())
    }

    fn position_at(&self, id: BodyId, step: usize) -> Result<Point2D<f64>, SimError> {
        Ok(self.kinemat_at(id, step)?.pos)
    }
}
