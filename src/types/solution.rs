//! Output types produced by the solver and the route-card replay.

use chrono::NaiveTime;

/// The result of a single `solve` call: a maximum-checkpoint route at a
/// fixed speed, or the empty route when no admissible terminal state exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Number of intermediate checkpoints visited.
    pub count: usize,
    /// Ordered intermediate checkpoint names.
    pub route: Vec<String>,
    /// Arrival minute at Finish, or `None` when `count == 0`.
    pub finish_minute: Option<f64>,
}

impl SolveResult {
    pub fn empty() -> Self {
        Self {
            count: 0,
            route: Vec::new(),
            finish_minute: None,
        }
    }
}

/// The result of `find_minimum_speed`: the slowest speed at which the route
/// still visits every non-excluded checkpoint, and the route found at it.
#[derive(Debug, Clone, PartialEq)]
pub struct MinSpeedResult {
    pub speed_kmh: f64,
    pub result: SolveResult,
}

/// One leg of a replayed route, matching the route-card record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCardLeg {
    pub leg: usize,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub height_gain_m: f64,
    pub travel_min: f64,
    pub arrival_minute: f64,
    pub depart_minute: f64,
    /// Minute-of-day of the resolved slot, or `None` if no slot was found.
    pub time_slot_minute: Option<i64>,
    pub is_open: bool,
    pub wait_min: f64,
    pub cumulative_min: f64,
}

/// Format a minute-of-day value as `"H:MM"` (24-hour, unpadded hour),
/// matching the display convention used throughout the route card.
pub fn format_minute_as_hm(minute: f64) -> String {
    let total = minute.round().max(0.0) as i64;
    let h = (total / 60) % 24;
    let m = total % 60;
    let time = NaiveTime::from_hms_opt(h as u32, m as u32, 0).expect("h/m derived from modulo are always valid");
    use chrono::Timelike;
    format!("{}:{:02}", time.hour(), time.minute())
}
