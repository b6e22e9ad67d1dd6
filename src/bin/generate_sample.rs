use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, TimeZone, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Write a semicolon-delimited sample file list.
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value_t = 40)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = "sample_data.csv")]
    output: PathBuf,
}

const STEMS: &[&str] = &["file", "report", "invoice", "scan", "Backup", "notes"];
const EXTENSIONS: &[&str] = &["csv", "pdf", "txt", "png"];
const OWNERS: &[&str] = &["ana", "ben", "carl", "dora"];

fn file_name(rng: &mut StdRng) -> String {
    let stem = STEMS.choose(rng).copied().unwrap_or("file");
    let ext = EXTENSIONS.choose(rng).copied().unwrap_or("csv");
    // Roughly one name in five has no number, to exercise the string fallback.
    if rng.random_bool(0.2) {
        format!("{stem}.{ext}")
    } else {
        format!("{stem}{}.{ext}", rng.random_range(1..=120))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let start = Utc
        .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .context("building start date")?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    writer.write_record(["date", "file_name", "owner"])?;
    for _ in 0..args.rows {
        let created = start + Duration::minutes(rng.random_range(0..60 * 24 * 365));
        let owner = OWNERS.choose(&mut rng).copied().unwrap_or("ana");
        writer.write_record([
            created.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            file_name(&mut rng),
            owner.to_string(),
        ])?;
    }
    writer.flush().context("flushing sample file")?;

    println!("Wrote {} records to {}", args.rows, args.output.display());
    Ok(())
}
