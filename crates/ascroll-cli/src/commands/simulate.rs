use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::time::{interval, sleep, Interval, MissedTickBehavior};
use tracing::info;

use ascroll_core::gesture::GestureTrace;
use ascroll_core::{AppConfig, PositionHost, ScrollSurface, ScrollView};

/// Upper bound on frames ticked after the last event
const MAX_SETTLE_FRAMES: u32 = 100_000;

/// Frame pacing; simulated time only unless running in real time
struct Pacer {
    interval: Option<Interval>,
}

impl Pacer {
    fn new(frame_ms: u64, realtime: bool) -> Self {
        let interval = realtime.then(|| {
            let mut ticker = interval(Duration::from_millis(frame_ms));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });
        Self { interval }
    }

    async fn frame(&mut self) {
        if let Some(interval) = self.interval.as_mut() {
            interval.tick().await;
        }
    }

    async fn idle(&self, ms: u64) {
        if self.interval.is_some() && ms > 0 {
            sleep(Duration::from_millis(ms)).await;
        }
    }
}

pub async fn run(config: &AppConfig, script: &Path, print_frames: bool, realtime: bool) -> Result<()> {
    let trace = GestureTrace::load(script)
        .with_context(|| format!("failed to load gesture script {}", script.display()))?;

    let name = trace.name.as_deref().unwrap_or("(unnamed)");
    info!(name, events = trace.events.len(), "replaying gesture script");

    let mut surface = ScrollSurface::new(ScrollView::from_config(&config.view), config);
    let mut pacer = Pacer::new(config.general.frame_interval_ms, realtime);
    let frame_ms = config.general.frame_interval_ms;

    let mut now = trace.events.first().map_or(0, |e| e.timestamp_ms);
    let mut frames = 0u32;

    for event in &trace.events {
        // Frames rendered while waiting for the next event
        while surface.is_animating() && now + frame_ms <= event.timestamp_ms {
            pacer.frame().await;
            now += frame_ms;
            surface.tick(now);
            frames += 1;
            if print_frames {
                print_offset(&surface, now);
            }
        }
        if event.timestamp_ms > now {
            pacer.idle(event.timestamp_ms - now).await;
            now = event.timestamp_ms;
        }

        for intent in surface.on_event(event) {
            println!("{:>6} ms  {}", event.timestamp_ms, serde_json::to_string(&intent)?);
        }
    }

    let mut settle = 0u32;
    while surface.is_animating() {
        pacer.frame().await;
        now += frame_ms;
        surface.tick(now);
        frames += 1;
        settle += 1;
        if print_frames {
            print_offset(&surface, now);
        }
        if settle > MAX_SETTLE_FRAMES {
            bail!("surface did not settle after {} frames", MAX_SETTLE_FRAMES);
        }
    }

    let end = surface.host().offset();
    println!();
    println!("Frames: {}", frames);
    println!("Ended:  {} ms", now);
    println!("Final:  ({:.1}, {:.1})", end.x, end.y);

    Ok(())
}

fn print_offset(surface: &ScrollSurface<ScrollView>, now: u64) {
    let offset = surface.host().offset();
    println!("{:>6} ms  frame ({:.1}, {:.1})", now, offset.x, offset.y);
}
