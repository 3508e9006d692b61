use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use contender_sim::clients::DEFAULT_BASE_URL;
use contender_sim::config::{load_registration_codes, SimulatorConfig};
use contender_sim::lifecycle::{setup_tracing, Fleet};

#[derive(Parser)]
#[command(name = "contender-sim")]
#[command(version)]
#[command(about = "Simulate contenders ticking problems against the scoring service")]
struct Cli {
    /// Contenders file, one registration code per line
    #[arg(default_value = "contenders.txt")]
    input: PathBuf,

    /// Delay multiplier: pauses between actions are uniform in [0, delay) seconds
    #[arg(short, long, default_value = "100")]
    delay: u32,

    /// Scoring service base URL
    #[arg(long = "base-url", env = "CLMB_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Seed for reproducible contender behavior
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let config = SimulatorConfig {
        base_url: cli.base_url,
        pacing: f64::from(cli.delay),
        seed: cli.seed,
        ..SimulatorConfig::default()
    };

    let codes = load_registration_codes(&cli.input).map_err(|e| e.to_string())?;
    info!("Loaded registration codes for {} contenders", codes.len());
    info!("Starting simulation...");

    let fleet = Fleet::http(&codes, &config).map_err(|e| e.to_string())?;

    let stop = fleet.stop_handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutting down..."),
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C, stopping"),
        }
        stop.cancel();
    });

    let report = fleet.wait().await;
    if report.all_failed() {
        return Err(format!("All {} contenders failed to start", report.failed));
    }
    Ok(())
}
