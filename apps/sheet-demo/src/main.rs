mod host;
mod scenarios;

use anyhow::Result;
use scenarios::Scenario;
use web_time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Bottom Sheet Demo ===");
    println!("Usage: sheet-demo [plain|scroll-outside-child|tab-bar-navigation]");
    println!("Set RUST_LOG=bottom_sheet=trace to see every arbitrated delta.");
    println!();

    let selected = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Scenario>()?],
        None => Scenario::ALL.to_vec(),
    };

    let started = Instant::now();
    for scenario in selected {
        scenarios::run(scenario)?;
        println!();
    }
    log::info!("replayed scenarios in {:?}", started.elapsed());
    Ok(())
}
