//! fellwalk-router - time-windowed checkpoint route optimizer
//!
//! Reads a JSON instance file and either solves for the best route at a
//! fixed speed, or binary-searches the minimum speed that visits every
//! checkpoint.

mod cli;

use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use fellwalk_router::types::instance::{Instance, InstanceFile};
use fellwalk_router::types::solution::{format_minute_as_hm, SolveResult};
use fellwalk_router::SolverConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Solve(args) => run_solve(args),
        cli::Command::MinSpeed(args) => run_min_speed(args),
    }
}

fn load_instance(path: &str) -> Result<Instance> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading instance file {path}"))?;
    let file: InstanceFile = serde_json::from_str(&raw).with_context(|| format!("parsing instance file {path}"))?;
    let instance = file.into_instance().context("validating instance")?;
    Ok(instance)
}

fn run_solve(args: cli::SolveArgs) -> Result<()> {
    let instance = load_instance(&args.instance)?;
    let config = SolverConfig {
        speed_kmh: args.speed_kmh,
        dwell_minutes: args.dwell_minutes,
        naismith_coefficient: args.naismith_coefficient,
        excluded: args.excluded.into_iter().collect::<HashSet<_>>(),
    };
    instance
        .validate_excluded(config.excluded.iter())
        .context("validating --exclude names")?;

    info!(speed_kmh = config.speed_kmh, "solving");
    let result = fellwalk_router::solve(&instance, &config);
    print_result(&instance, &config, &result);
    Ok(())
}

fn run_min_speed(args: cli::MinSpeedArgs) -> Result<()> {
    let instance = load_instance(&args.instance)?;
    let config = SolverConfig {
        dwell_minutes: args.dwell_minutes,
        naismith_coefficient: args.naismith_coefficient,
        excluded: args.excluded.into_iter().collect::<HashSet<_>>(),
        ..SolverConfig::default()
    };
    instance
        .validate_excluded(config.excluded.iter())
        .context("validating --exclude names")?;

    let found = fellwalk_router::find_minimum_speed(&instance, &config).context("searching for minimum speed")?;
    info!(speed_kmh = found.speed_kmh, "minimum speed found");
    let config_at_speed = SolverConfig { speed_kmh: found.speed_kmh, ..config };
    print_result(&instance, &config_at_speed, &found.result);
    Ok(())
}

fn print_result(instance: &Instance, config: &SolverConfig, result: &SolveResult) {
    println!("visited {} of {} checkpoints", result.count, instance.n());
    if result.route.is_empty() {
        println!("no admissible route");
        return;
    }
    println!("route: {}", result.route.join(" -> "));
    if let Some(finish_minute) = result.finish_minute {
        println!("finish: {}", format_minute_as_hm(finish_minute));
    }

    let legs = fellwalk_router::build_route_card(instance, &result.route, config);
    for leg in legs {
        println!(
            "  {:>2}. {:<12} -> {:<12} {:>6.2} km  arr {}  dep {}  wait {:>5.1} min  {}",
            leg.leg,
            leg.from,
            leg.to,
            leg.distance_km,
            format_minute_as_hm(leg.arrival_minute),
            format_minute_as_hm(leg.depart_minute),
            leg.wait_min,
            if leg.is_open { "open" } else { "closed" },
        );
    }
}
