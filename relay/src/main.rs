mod report;

use anyhow::{Context, Result};
use loader::prefabs::solar_systems;
use simulator::{conjunction_windows_in, LinkSummary};

fn main() -> Result<()> {
    env_logger::init();

    let path_to_system = {
        let args: Vec<String> = std::env::args().collect();
        if args.len() == 2 {
            args[1].clone()
        } else {
            "systems/earth_mars.json5".to_string()
        }
    };
    let scenario = loader::load_path(&path_to_system)
        .with_context(|| format!("loading {}", path_to_system))?;
    let link = scenario
        .link
        .clone()
        .unwrap_or_else(solar_systems::earth_mars_link);

    let mut system = scenario.into_system()?;
    log::info!(
        "Simulating {} bodies from {} for {} steps",
        system.body_count(),
        path_to_system,
        system.config().total_steps()
    );
    system.run();

    let (observer, target, occluder) = link.resolve(&system)?;
    let series = system.link_series(observer, target, occluder)?;
    let summary = LinkSummary::from_samples(&series).context("no samples recorded")?;
    let windows = conjunction_windows_in(&series);

    println!(
        "{}",
        report::render(&link, &summary, &windows, system.config().dt)
    );
    Ok(())
}
