//! tokenloop CLI: loops protect/reveal calls against a tokenization API
//! and reports latency and success/match statistics.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, error, info, warn};

use tokenloop::config::{
    DEFAULT_BATCH_SIZE, DEFAULT_HOST, DEFAULT_ITERATIONS, DEFAULT_POLICY, DEFAULT_PORT,
    DEFAULT_START_DATA, DEFAULT_TIMEOUT_SECS,
};
use tokenloop::{
    BulkSummary, HttpProtectClient, RunConfig, RunSummary, increment_numeric_string, run_bulk,
    run_iteration,
};

mod output;

/// Loop protect/reveal calls and measure time.
#[derive(Parser, Debug)]
#[command(name = "tokenloop", version, about, long_about = None)]
struct Args {
    /// API host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// API port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// protection_policy_name sent with every request
    #[arg(long, default_value = DEFAULT_POLICY)]
    policy: String,

    /// Numeric data to start from
    #[arg(long, default_value = DEFAULT_START_DATA)]
    start_data: String,

    /// Number of iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Print request and response JSON bodies
    #[arg(long)]
    show_bodies: bool,

    /// Show per-iteration progress output
    #[arg(long)]
    show_progress: bool,

    /// Use the bulk protect/reveal endpoints
    #[arg(long)]
    bulk: bool,

    /// Batch size for bulk operations
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            policy: args.policy,
            start_data: args.start_data,
            iterations: args.iterations,
            timeout_secs: args.timeout,
            verbose: args.verbose,
            show_bodies: args.show_bodies,
            show_progress: args.show_progress,
            bulk: args.bulk,
            batch_size: args.batch_size,
        }
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = RunConfig::from(Args::parse());
    init_logging(config.verbose);

    let client = HttpProtectClient::new(&config)?;

    tokio::select! {
        () = run(&config, &client) => Ok(()),
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nOperation cancelled by user");
            std::process::exit(1);
        }
    }
}

async fn run(config: &RunConfig, client: &HttpProtectClient) {
    if config.bulk {
        run_bulk_mode(config, client).await;
    } else {
        run_iterative_mode(config, client).await;
    }
}

async fn run_iterative_mode(config: &RunConfig, client: &HttpProtectClient) {
    let mut current = config.start_data.clone();
    let mut results = Vec::with_capacity(config.iterations as usize);
    let run_started = Instant::now();

    for i in 1..=config.iterations {
        let result = run_iteration(client, &current).await;

        if config.show_progress {
            info!(
                "#{i:03} data={current} time={:.4}s protect_status={} reveal_status={} match={}",
                result.elapsed.as_secs_f64(),
                output::status_label(&result.protect_response),
                output::status_label(&result.reveal_response),
                result.matched(),
            );
        }
        if config.show_bodies {
            if !config.show_progress {
                info!("#{i:03} data={current}");
            }
            output::print_iteration_bodies(&config.policy, &result);
        }

        results.push(result);

        match increment_numeric_string(&current) {
            Ok(next) if next.len() != current.len() => {
                warn!("data overflowed its fixed width at '{next}'; stopping iterations");
                break;
            }
            Ok(next) => current = next,
            Err(err) => {
                error!("data '{current}' is not numeric; stopping iterations ({err})");
                break;
            }
        }
    }

    let summary = RunSummary::from_results(&results, run_started.elapsed());
    print_summary(&summary);
}

async fn run_bulk_mode(config: &RunConfig, client: &HttpProtectClient) {
    let inputs = build_inputs(&config.start_data, config.iterations);
    let run_started = Instant::now();

    let results = run_bulk(client, &inputs, config.batch_size).await;
    let wall_time = run_started.elapsed();

    if config.show_bodies {
        for (index, batch) in results.iter().enumerate() {
            output::print_batch_bodies(index + 1, batch);
        }
    }

    let summary = BulkSummary::from_results(&results, wall_time);
    print_bulk_summary(&summary);
}

/// Materialize the input sequence for a bulk run, stopping early if the
/// sequence exhausts.
fn build_inputs(start: &str, count: u32) -> Vec<String> {
    let mut inputs = Vec::with_capacity(count as usize);
    let mut current = start.to_owned();

    for _ in 0..count {
        inputs.push(current.clone());
        match increment_numeric_string(&current) {
            Ok(next) if next.len() != current.len() => {
                warn!("data overflowed its fixed width at '{next}'; stopping input generation");
                break;
            }
            Ok(next) => current = next,
            Err(err) => {
                error!("data '{current}' is not numeric; stopping input generation ({err})");
                break;
            }
        }
    }

    inputs
}

fn print_summary(summary: &RunSummary) {
    info!("");
    info!("Summary:");
    info!("Iterations attempted: {}", summary.attempted);
    info!("Successful (both 2xx): {}", summary.successful);
    info!("Revealed matched original data: {}", summary.matched);
    info!("Total time: {:.4}s", summary.wall_time.as_secs_f64());
    if summary.attempted > 0 {
        info!(
            "Average per-iteration time: {:.4}s",
            summary.average_iteration_time()
        );
    }
}

fn print_bulk_summary(summary: &BulkSummary) {
    info!("Bulk run summary:");
    info!("  Batches processed: {}", summary.batches);
    info!("  Items processed: {}", summary.items);
    info!("  Revealed matched original data: {}", summary.matched);
    info!("  Total wall-clock time: {:.4}s", summary.wall_time.as_secs_f64());
    info!(
        "  Total bulk time (sum of batch times): {:.4}s",
        summary.batch_time.as_secs_f64()
    );
    info!("  Average batch time: {:.4}s", summary.average_batch_time());
    info!("  Average per-item time: {:.4}s", summary.average_item_time());
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn args_defaults_match_documented_values() {
        let config = RunConfig::from(Args::try_parse_from(["tokenloop"]).unwrap());
        assert_eq!(config.host, "192.168.0.231");
        assert_eq!(config.port, 32082);
        assert_eq!(config.policy, "P03");
        assert_eq!(config.start_data, "0123456789123");
        assert_eq!(config.iterations, 100);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.batch_size, 25);
        assert!(!config.verbose);
        assert!(!config.show_bodies);
        assert!(!config.show_progress);
        assert!(!config.bulk);
    }

    #[test]
    fn flags_parse_into_config() {
        let config = RunConfig::from(
            Args::try_parse_from([
                "tokenloop",
                "--host",
                "localhost",
                "--port",
                "8080",
                "--bulk",
                "--batch-size",
                "5",
                "--show-progress",
            ])
            .unwrap(),
        );
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert!(config.bulk);
        assert_eq!(config.batch_size, 5);
        assert!(config.show_progress);
    }

    #[test]
    fn build_inputs_stops_at_requested_count() {
        let inputs = build_inputs("001", 3);
        assert_eq!(inputs, vec!["001", "002", "003"]);
    }

    #[test]
    fn build_inputs_stops_on_non_numeric_start() {
        let inputs = build_inputs("abc", 3);
        assert_eq!(inputs, vec!["abc"]);
    }

    #[test]
    fn build_inputs_stops_at_width_overflow() {
        let inputs = build_inputs("998", 5);
        assert_eq!(inputs, vec!["998", "999"]);
    }
}
