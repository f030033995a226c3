//! drive — interactive console run of the trip simulator.
//!
//! Asks for an origin, destination and desired arrival time, prints the
//! planned route, then ticks along it while answering ETA-drift questions
//! from the terminal.
//!
//! With `GOOGLE_MAPS_API_KEY` set, routes come from Google Maps and (with
//! `OPENAI_API_KEY` also set) suggestions are phrased by OpenAI.  Otherwise a
//! canned offline route is used.  `DRIVE_SIM_CONFIG` may name a JSON file of
//! `TripConfig` overrides.  Set `RUST_LOG=debug` for engine internals.

mod console;
mod offline;


use std::fmt;
use std::fs::File;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone};
use log::info;

use trip_core::TripConfig;
use trip_http::{GoogleMapsProvider, OpenAiOracle};
use trip_intent::{DialogueLine, NoopOracle, SuggestionOracle};
use trip_progress::{DriftEvent, TickReport};
use trip_route::{Route, RouteProvider};
use trip_sim::{LogObserver, SimError, TripBuilder, TripObserver};

use console::{StdinPrompter, ask_or};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_ORIGIN:      &str = "367 Addison Avenue, Palo Alto, CA";
const DEFAULT_DESTINATION: &str = "Golden Gate Bridge, San Francisco, CA";
const CONFIG_ENV:          &str = "DRIVE_SIM_CONFIG";
const MAPS_KEY_ENV:        &str = "GOOGLE_MAPS_API_KEY";
const OPENAI_KEY_ENV:      &str = "OPENAI_API_KEY";

// ── Observer wrapper printing the route summary ──────────────────────────────

struct SummaryObserver {
    inner: LogObserver,
}

impl TripObserver for SummaryObserver {
    fn on_trip_start(&mut self, route: &Route) {
        for line in route.summary_lines() {
            println!("{line}");
        }
        println!();
        self.inner.on_trip_start(route);
    }

    fn on_tick(&mut self, report: &TickReport) {
        self.inner.on_tick(report);
    }

    fn on_drift(&mut self, drift: &DriftEvent) {
        self.inner.on_drift(drift);
    }

    fn on_dialogue(&mut self, line: &DialogueLine) {
        self.inner.on_dialogue(line);
    }

    fn on_message(&mut self, message: &str) {
        self.inner.on_message(message);
    }

    fn on_arrival(&mut self, report: &TickReport) {
        self.inner.on_arrival(report);
    }

    fn on_failure(&mut self, error: &SimError) {
        self.inner.on_failure(error);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config() -> Result<TripConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(TripConfig::default());
    };
    let file = File::open(&path).with_context(|| format!("opening {path}"))?;
    let config: TripConfig =
        serde_json::from_reader(file).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

/// `HH:MM` one hour after `now`, in `now`'s timezone.
fn default_arrival<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    (now + TimeDelta::hours(1)).format("%H:%M").to_string()
}

fn parse_arrival(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .with_context(|| format!("expected HH:MM, got {text:?}"))
}

fn key(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|k| !k.trim().is_empty())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    config.validate()?;

    let mut console = StdinPrompter;
    let origin = ask_or(&mut console, "Enter your starting location", DEFAULT_ORIGIN)?;
    let destination = ask_or(&mut console, "Enter your destination", DEFAULT_DESTINATION)?;
    let arrival = ask_or(
        &mut console,
        "Enter your desired arrival time (HH:MM)",
        &default_arrival(Local::now()),
    )?;
    let arrival = parse_arrival(&arrival)?;
    println!();

    let (provider, oracle): (Box<dyn RouteProvider>, Box<dyn SuggestionOracle>) = match key(MAPS_KEY_ENV) {
        Some(maps_key) => {
            let oracle: Box<dyn SuggestionOracle> = match key(OPENAI_KEY_ENV) {
                Some(openai_key) => Box::new(OpenAiOracle::new(openai_key, &config)),
                None => Box::new(NoopOracle),
            };
            (Box::new(GoogleMapsProvider::new(maps_key, &config)), oracle)
        }
        None => {
            info!("{MAPS_KEY_ENV} not set; using the offline route");
            (Box::new(offline::provider(&origin, &destination)), Box::new(NoopOracle))
        }
    };

    info!("Desired arrival time: {}", arrival.format("%H:%M"));
    let mut sim = TripBuilder::new(config, provider, oracle, console)
        .origin(origin)
        .destination(destination)
        .build()?;

    let mut obs = SummaryObserver { inner: LogObserver };
    let outcome = sim.run(&mut obs)?;

    println!();
    println!(
        "Trip complete: {} ticks, {} ETA alerts",
        outcome.ticks, outcome.breaches
    );
    Ok(())
}
