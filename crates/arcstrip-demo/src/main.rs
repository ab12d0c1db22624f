// File: crates/arcstrip-demo/src/main.rs
// Summary: Named-example launcher: renders pie/donut and time-strip PNGs into target/out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use arcstrip_core::{
    ChartConfig, DensityParams, PieChart, PieData, Point, PointerEvent, Style, TimeDistConfig, TimeDistribution,
};
use arcstrip_render_skia::{render_pie_to_png, render_timedist_to_png, RenderOptions};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Runner = fn(&Args, &mut StdRng) -> Result<()>;

/// Registered examples: (name, description, runner).
const EXAMPLES: &[(&str, &str, Runner)] = &[
    ("pie", "six random slices as pie, donut and hovered pie", run_pie),
    ("timedist", "event-time strip of random or CSV timestamps, full and zoomed", run_timedist),
];

/// Render the arcstrip examples to PNGs under target/out
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Example to run: a registered name, `all` or `list`
    #[arg(default_value = "list")]
    name: String,

    /// CSV whose first column holds timestamps (timedist only)
    csv: Option<PathBuf>,

    /// Seed for the random data and label jitter (default: fresh entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(rand::thread_rng()).context("seeding rng")?,
    };

    match args.name.as_str() {
        "list" => {
            print_usage();
            Ok(())
        }
        "all" => {
            for (name, _, run) in EXAMPLES {
                info!("running example '{name}'");
                run(&args, &mut rng)?;
            }
            Ok(())
        }
        name => match EXAMPLES.iter().find(|(n, _, _)| *n == name) {
            Some((_, _, run)) => run(&args, &mut rng),
            None => {
                print_usage();
                anyhow::bail!("unknown example '{name}'");
            }
        },
    }
}

fn print_usage() {
    println!("usage: arcstrip-demo [example] [csv] [--seed N]");
    println!("examples:");
    for (name, about, _) in EXAMPLES {
        println!("  {name:<10} {about}");
    }
    println!("  {:<10} run every example", "all");
    println!("  {:<10} show this list", "list");
}

fn out_path(file: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(file);
    out
}

fn run_pie(_args: &Args, rng: &mut StdRng) -> Result<()> {
    let values: Vec<f64> = (0..6).map(|_| f64::from(rng.gen_range(5..=100u32))).collect();
    let labels = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"];
    let data = PieData::new(values.clone())?
        .with_labels(labels)?
        .with_explode([0.0, 0.0, 0.1, 0.0, 0.0, 0.0])?;
    println!("Pie values: {values:?}");

    let opts = RenderOptions::new(720, 720);
    let mut chart = PieChart::with_seed(ChartConfig::default(), Style::light(), rng.gen())?;
    chart.set_data(data.clone());
    let out = out_path("pie.png");
    render_pie_to_png(&mut chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    // hover the largest slice the way a pointer would
    let largest = values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let mid = chart.layout().slice(largest).map(|s| s.mid_angle);
    if let Some(mid) = mid {
        let radius = chart.config().radius;
        let outcome = chart.handle_pointer(PointerEvent::Move(Point::ORIGIN.polar(radius * 0.5, mid)));
        debug!("hover events: {:?}", outcome.events);
    }
    let out = out_path("pie_hover.png");
    render_pie_to_png(&mut chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    let mut donut = PieChart::with_seed(ChartConfig::default().with_donut_ratio(0.5)?, Style::dark(), rng.gen())?;
    donut.set_data(data);
    let out = out_path("pie_donut.png");
    render_pie_to_png(&mut donut, &opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn run_timedist(args: &Args, rng: &mut StdRng) -> Result<()> {
    let timestamps = match &args.csv {
        Some(path) => {
            let ts = load_timestamps_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} timestamps from {}", ts.len(), path.display());
            ts
        }
        None => random_timestamps(rng, 1000)?,
    };
    if timestamps.is_empty() {
        anyhow::bail!("no timestamps to plot");
    }

    let mut strip = TimeDistribution::new(TimeDistConfig::default(), DensityParams::default(), Style::light())?;
    let update = strip.set_data(timestamps, rng);
    println!("View: {} points visible, marker alpha {}", update.visible, update.alpha);

    let opts = RenderOptions::new(1200, 200);
    let out = out_path("timedist.png");
    render_timedist_to_png(&strip, &opts, &out)?;
    println!("Wrote {}", out.display());

    // zoom to a tenth around the middle
    let width = f64::from(opts.width);
    let update = strip.zoom_at_pixel(0.9, width * 0.5, width);
    println!("Zoomed: {} points visible, marker alpha {}", update.visible, update.alpha);
    let out = out_path("timedist_zoom.png");
    render_timedist_to_png(&strip, &opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn random_timestamps(rng: &mut StdRng, n: usize) -> Result<Vec<f64>> {
    let day = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Utc.from_utc_datetime(&dt).timestamp())
            .context("invalid calendar date")
    };
    let (start, end) = (day(2025, 3, 4)?, day(2025, 8, 15)?);
    Ok((0..n).map(|_| rng.gen_range(start..=end) as f64).collect())
}

/// First column of a CSV as timestamps; rows that don't parse are skipped.
fn load_timestamps_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        match rec.get(0).and_then(parse_time_to_f64) {
            Some(t) => out.push(t),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} rows without a readable timestamp");
    }
    Ok(out)
}

/// Epoch seconds or milliseconds, RFC 3339, or `YYYY-MM-DD[ HH:MM:SS]`.
fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        }
        return Some(n as f64);
    }
    if let Ok(v) = s.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp() as f64);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt).timestamp() as f64);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt).timestamp() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_time_formats() {
        assert_eq!(parse_time_to_f64("1741046400"), Some(1_741_046_400.0));
        assert_eq!(parse_time_to_f64("1741046400000"), Some(1_741_046_400.0));
        assert_eq!(parse_time_to_f64("2025-03-04"), Some(1_741_046_400.0));
        assert_eq!(parse_time_to_f64("2025-03-04 01:00:00"), Some(1_741_050_000.0));
        assert_eq!(parse_time_to_f64("2025-03-04T01:00:00+01:00"), Some(1_741_046_400.0));
        assert_eq!(parse_time_to_f64("yesterday"), None);
        assert_eq!(parse_time_to_f64(" "), None);
    }

    #[test]
    fn args_default_to_list() {
        let args = Args::try_parse_from(["arcstrip-demo"]).unwrap();
        assert_eq!(args.name, "list");
        assert_eq!(args.csv, None);
        assert_eq!(args.seed, None);

        let args = Args::try_parse_from(["arcstrip-demo", "timedist", "t.csv", "--seed", "7"]).unwrap();
        assert_eq!(args.name, "timedist");
        assert_eq!(args.csv, Some(PathBuf::from("t.csv")));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::try_parse_from(["arcstrip-demo", "pie", "--seed", "x"]).is_err());
        assert!(Args::try_parse_from(["arcstrip-demo", "pie", "--seed"]).is_err());
    }

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
