//! Check-in Walkthrough
//!
//! This example walks one check-in from mood to saved history entry.
//!
//! Key concepts:
//! - The host owns time: a tokio interval feeds `advance` one second at a time
//! - The exercise completes on its own and the flow moves to Closing
//! - Saved entries show up in the history and chart projection
//!
//! Run with: RUST_LOG=calmly=debug cargo run --example checkin_walkthrough

use calmly::builder::ControllerBuilder;
use calmly::core::MoodId;
use calmly::exercise::{ExerciseKind, ExerciseView};
use calmly::help::RecordingLauncher;
use calmly::store::MemoryBackend;
use calmly::CalmlyConfig;
use std::time::Duration;

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("calmly=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Short breathing session so the demo finishes quickly.
    let config = CalmlyConfig {
        breathing_seconds: 12,
        ..CalmlyConfig::default()
    };
    let mut controller = ControllerBuilder::new()
        .backend(MemoryBackend::new())
        .config(config)
        .launcher(RecordingLauncher::new())
        .build()?;

    controller.pick_mood(MoodId::Anxious)?;
    println!("{}", controller.support_message().unwrap_or_default());

    controller.choose_exercise(ExerciseKind::Breathing)?;

    // Each real 100ms stands in for one second of exercise time.
    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    loop {
        ticker.tick().await;
        if let Some(done) = controller.advance(Duration::from_secs(1)) {
            println!("Exercise finished: {}", done.reason);
            break;
        }
        if let Some(ExerciseView::Breathing {
            remaining_secs,
            phase,
        }) = controller.exercise_view()
        {
            println!("{:>3}s  {}", remaining_secs, phase);
        }
    }

    controller.set_note("slower breaths helped")?;
    let outcome = controller.save()?;
    println!("Saved ({:?}), back on {:?}", outcome, controller.screen());

    for point in controller.chart() {
        println!(
            "#{} {} value={} note={}",
            point.index,
            point.label,
            point.value,
            point.note.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
