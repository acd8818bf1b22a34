//! Ranks internships for one student from a JSON payload.
//!
//! ```text
//! cargo run --example recommend -- demos/data/payload.json
//! cargo run --example recommend -- --health-check
//! ```
//!
//! Payload: `{ "student": {...}, "internships": [...], "top_k": 5 }`. Reads stdin when no
//! path is given. Configuration comes from `MATCHMAKER_*` environment variables.

use std::io::Read;

use anyhow::Context;
use serde::Deserialize;

use matchmaker::{Config, Internship, Matchmaker, StudentProfile};

#[derive(Debug, Deserialize)]
struct Payload {
    student: StudentProfile,
    internships: Vec<Internship>,
    top_k: Option<usize>,
}

fn read_payload(path: Option<&str>) -> anyhow::Result<Payload> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read payload from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("payload is not valid JSON")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let engine = Matchmaker::from_config(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--health-check") {
        let report = engine.health_check();
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.is_healthy() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let payload = read_payload(args.first().map(String::as_str))?;
    let top_k = payload.top_k.unwrap_or(engine.default_top_k());

    tracing::info!(
        student_id = %payload.student.id,
        candidates = payload.internships.len(),
        top_k,
        "Ranking internships"
    );

    let recommendations =
        engine.get_recommendations(&payload.student, &payload.internships, top_k)?;
    println!("{}", serde_json::to_string_pretty(&recommendations)?);

    Ok(())
}
