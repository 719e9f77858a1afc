// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use thiserror::Error;
use waymark::config::{load_config, TracerConfig};
use waymark::sinks::{BufferedSink, TracingSink};
use waymark::tracer::{ProcessTracer, TraceScope, WorkOutcome};

#[derive(Debug, Error)]
enum ForecastError {
    #[error("Database connection failed")]
    DatabaseUnavailable,
}

/// Demo unit of work: build a five day forecast, warning when the forecast
/// cache has to be skipped, and failing outright when asked to.
async fn get_forecast(scope: TraceScope, fail: bool) -> Result<Vec<String>, ForecastError> {
    if fail {
        return Err(ForecastError::DatabaseUnavailable);
    }

    // No cache in the demo, so every request reports the same anomaly.
    scope.warn_with(HashMap::from([(
        "Reason".to_string(),
        "forecast cache unavailable, querying source".to_string(),
    )]));

    let summaries = ["Freezing", "Chilly", "Mild", "Warm", "Scorching"];
    let forecast = (0..5)
        .map(|day| {
            let summary = summaries[(day * 7 + 3) % summaries.len()];
            format!("Day {}: {}", day + 1, summary)
        })
        .collect();
    Ok(forecast)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => TracerConfig::default(),
    };

    println!("🚀 waymark tracer demo");
    println!("══════════════════════");
    if let Some(endpoint) = &config.sink.endpoint {
        println!("📡 Sink endpoint (opaque to the tracer core): {}", endpoint);
    }

    let (sink, drain) = BufferedSink::spawn(Arc::new(TracingSink::new()));
    let tracer = ProcessTracer::from_config(&config, Arc::new(sink));

    println!("\n▶ Tracing a successful forecast request...");
    let attributes = HashMap::from([("Route".to_string(), "/weatherforecast".to_string())]);
    match tracer
        .run_traced("Get", attributes, |scope| get_forecast(scope, false))
        .await
    {
        Ok(WorkOutcome::Completed(forecast)) => {
            for line in &forecast {
                println!("   {}", line);
            }
        }
        Ok(WorkOutcome::Suppressed(e)) => println!("   suppressed failure: {}", e),
        Err(e) => println!("   failed: {}", e),
    }

    println!("\n▶ Tracing a failing forecast request...");
    match tracer
        .run_traced("Get", HashMap::new(), |scope| get_forecast(scope, true))
        .await
    {
        Ok(WorkOutcome::Completed(_)) => println!("   unexpected success"),
        Ok(WorkOutcome::Suppressed(e)) => {
            println!("   failure swallowed by policy (still traced): {}", e)
        }
        Err(e) => println!("   failure propagated by policy (still traced): {}", e),
    }

    // Dropping the tracer closes the buffered channel; awaiting the drain
    // handle flushes the backlog through the tracing sink.
    drop(tracer);
    let _ = drain.await;

    println!("\n🎉 Demo complete!");
}
