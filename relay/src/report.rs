//! Turns a finished run into something a person can read.

use loader::LinkBodies;
use simulator::{LinkSummary, AU, DAY_SECONDS};
use std::ops::Range;

pub fn render(
    link: &LinkBodies,
    summary: &LinkSummary,
    windows: &[Range<usize>],
    dt: f64,
) -> String {
    let mut lines = vec![
        format!(
            "{} -> {} over {} samples",
            link.observer, link.target, summary.samples
        ),
        format!(
            "Distance: {:.2} AU to {:.2} AU",
            summary.min_distance / AU,
            summary.max_distance / AU
        ),
        format!(
            "Time to transmit: {:.0} to {:.0} minutes",
            summary.min_delay / 60.0,
            summary.max_delay / 60.0
        ),
        format!(
            "{} blocked by {} for {} samples in {} windows",
            link.observer,
            link.occluder,
            summary.blocked_steps,
            windows.len()
        ),
    ];
    lines.extend(
        windows
            .iter()
            .map(|window| format!("  {}", describe_window(window, dt))),
    );
    lines.join("\n")
}

/// "day 12.0 to day 14.0 (2 samples)"
fn describe_window(window: &Range<usize>, dt: f64) -> String {
    format!(
        "day {:.1} to day {:.1} ({} samples)",
        window.start as f64 * dt / DAY_SECONDS,
        window.end as f64 * dt / DAY_SECONDS,
        window.len()
    )
}
