use anyhow::{Context, Result};
use dotenv::dotenv;
use standings_rust::config::{Config, OutputFormat};
use standings_rust::pipeline::League;
use standings_rust::table;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting standings service...");

    let config = Config::from_env();
    config.log_config();

    let mut league = League::load(&config)?;

    // Optional: record a week's points before reporting
    league.apply_points_file(&config)?;

    let week = league.report_week(config.current_week);
    let standings = league.standings(week);

    for (raw, suggestion) in league.unmapped_report(&standings) {
        match suggestion {
            Some(s) => warn!(
                "Unmapped team name {:?} (closest: {:?}, score {:.2})",
                raw, s.label, s.score
            ),
            None => warn!("Unmapped team name {:?} (no close match)", raw),
        }
    }

    match config.output_format {
        OutputFormat::Table => print!("{}", table::render_table(&standings)),
        OutputFormat::Json => println!(
            "{}",
            table::render_json(&standings).context("Failed to serialize standings")?
        ),
    }

    Ok(())
}
