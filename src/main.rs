use std::thread;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use log::{error, info};

mod config;
mod diff;
mod error;
mod notify;
mod slack;
mod storage;

use config::Config;
use error::TrackerError;

#[derive(Debug, Parser)]
#[command(version, about = "Reports newly created Slack channels to a webhook")]
struct Args {
    /// Keep polling on an interval instead of running a single cycle.
    #[arg(short, long)]
    daemon: bool,

    /// Time between polls, as bare seconds ("90", "2.5") or with a unit ("10m").
    #[arg(short, long, default_value = "600s", value_parser = parse_interval)]
    interval: Duration,
}

/// A unit suffix wins; a bare value is seconds.
fn parse_interval(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let (value, scale) = if let Some(v) = raw.strip_suffix("ms") {
        (v, 0.001)
    } else if let Some(v) = raw.strip_suffix('s') {
        (v, 1.0)
    } else if let Some(v) = raw.strip_suffix('m') {
        (v, 60.0)
    } else if let Some(v) = raw.strip_suffix('h') {
        (v, 3600.0)
    } else {
        (raw, 1.0)
    };
    let value: f64 = value
        .parse()
        .map_err(|_| format!("bad interval {raw:?}"))?;
    Duration::try_from_secs_f64(value * scale).map_err(|_| format!("bad interval {raw:?}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let _sentry_guard = config.sentry_dsn.clone().map(sentry::init);

    if !args.daemon {
        run_cycle(&config)?;
        return Ok(());
    }

    loop {
        // One bad cycle must not take the daemon down.
        if let Err(err) = run_cycle(&config) {
            error!("cycle failed: {err}");
        }
        thread::sleep(args.interval);
    }
}

fn run_cycle(config: &Config) -> Result<(), TrackerError> {
    let channels = slack::list_channels(config)?;
    let baseline = storage::load_latest_channel(&config.latest_channel_json_path)?
        .map_or(0, |marker| marker.created);

    let new_channels = diff::select_new(&channels, baseline);
    if new_channels.is_empty() {
        info!("no new channels since {}", fmt_created(baseline));
    } else {
        info!("reporting {} new channel(s)", new_channels.len());
        notify::post_message(config, &diff::render_report(&new_channels))?;
    }

    if let Some(marker) = diff::next_marker(&channels) {
        storage::write_latest_channel(&config.latest_channel_json_path, marker)?;
        info!(
            "marker now #{} (created {})",
            marker.name,
            fmt_created(marker.created)
        );
    }
    Ok(())
}

fn fmt_created(ts: i64) -> String {
    time_format::strftime_utc("%Y-%m-%d %H:%M:%S", ts as _).unwrap_or_else(|_| ts.to_string())
}
