//! CLI argument parsing for the fellwalk-router binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fellwalk-router", about = "Time-windowed checkpoint route optimizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the route that visits the most checkpoints at a fixed speed.
    Solve(SolveArgs),
    /// Binary-search the slowest walking speed that still visits every checkpoint.
    MinSpeed(MinSpeedArgs),
}

#[derive(clap::Args)]
pub struct SolveArgs {
    /// Path to the JSON instance file.
    pub instance: String,
    /// Walking speed in km/h.
    #[arg(long, default_value_t = 5.0)]
    pub speed_kmh: f64,
    /// Dwell time at each checkpoint, in minutes.
    #[arg(long, default_value_t = 10.0)]
    pub dwell_minutes: f64,
    /// Metres of ascent per extra minute of travel time.
    #[arg(long, default_value_t = 10.0)]
    pub naismith_coefficient: f64,
    /// Checkpoint names to skip; may be repeated.
    #[arg(long = "exclude")]
    pub excluded: Vec<String>,
}

#[derive(clap::Args)]
pub struct MinSpeedArgs {
    /// Path to the JSON instance file.
    pub instance: String,
    /// Dwell time at each checkpoint, in minutes.
    #[arg(long, default_value_t = 10.0)]
    pub dwell_minutes: f64,
    /// Metres of ascent per extra minute of travel time.
    #[arg(long, default_value_t = 10.0)]
    pub naismith_coefficient: f64,
    /// Checkpoint names to skip; may be repeated.
    #[arg(long = "exclude")]
    pub excluded: Vec<String>,
}
