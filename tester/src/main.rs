//! Stellar Burgers API test runner
//!
//! Runs named scenarios against the live service:
//! - Each scenario gets a fresh client
//! - Every user a scenario registers is deleted afterwards (best effort)
//! - Exit status is non-zero if any scenario failed

use clap::Parser;
use stellar_tester::{ApiConfig, ConfigOverrides, TestScenarios};

#[derive(Parser)]
#[command(name = "stellar-tester")]
#[command(about = "End-to-end API tests for the Stellar Burgers service")]
struct Args {
    /// Scenario or group to run (auth, orders, all)
    #[arg(long, default_value = "all")]
    scenario: String,

    /// Service base URL (overrides STELLAR_BURGERS_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds (overrides STELLAR_BURGERS_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// List available scenarios and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose tracing output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    shared::logging::init_tracing(Some(if args.verbose { "debug" } else { "info" }));

    if args.list {
        for name in TestScenarios::available_scenarios() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = build_config(&args)?;
    tracing::info!("🧪 Starting Stellar Burgers API tests against {}", config.base_url);
    tracing::info!("Scenario: {}, Timeout: {:?}", args.scenario, config.timeout);

    let scenarios = TestScenarios::new(config);
    let reports = scenarios.run_scenario(&args.scenario).await?;

    let failed: Vec<_> = reports.iter().filter(|report| !report.passed()).collect();
    let leftovers: usize = reports.iter().map(|report| report.cleanup.failures.len()).sum();

    for report in &reports {
        for message in report.cleanup.messages() {
            tracing::warn!("🧹 {}: {}", report.name, message);
        }
    }

    tracing::info!(
        "🏁 {} passed, {} failed, {} cleanup warning(s)",
        reports.len() - failed.len(),
        failed.len(),
        leftovers
    );

    if !failed.is_empty() {
        let names: Vec<&str> = failed.iter().map(|report| report.name).collect();
        anyhow::bail!("Failed scenarios: {}", names.join(", "));
    }
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<ApiConfig> {
    let overrides = ConfigOverrides {
        base_url: args.base_url.clone(),
        timeout_secs: args.timeout_secs,
    };
    Ok(ApiConfig::from_env_with(&overrides)?)
}
