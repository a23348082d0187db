use anyhow::{bail, Result};

use ascroll_core::{AppConfig, Offset, PositionHost, ScrollSurface, ScrollView};

/// Upper bound on simulated frames before giving up
const MAX_FRAMES: u32 = 100_000;

pub fn run(config: &AppConfig, vx: f32, vy: f32, x: Option<f32>, y: Option<f32>) -> Result<()> {
    let mut surface = ScrollSurface::new(ScrollView::from_config(&config.view), config);

    let bound = surface.host().bound();
    let start = Offset::new(x.unwrap_or(bound.x), y.unwrap_or(bound.y));
    surface.host_mut().move_to(start.x, start.y);

    let frame_ms = config.general.frame_interval_ms;
    surface.fling(Offset::new(vx, vy), 0);

    let mut now = 0;
    let mut frames = 0u32;
    while surface.tick(now).active {
        now += frame_ms;
        frames += 1;
        if frames > MAX_FRAMES {
            bail!("fling did not settle after {} frames", MAX_FRAMES);
        }
    }

    let end = surface.host().offset();
    println!("Start:    ({:.1}, {:.1})", start.x, start.y);
    println!("Velocity: ({:.1}, {:.1})", vx, vy);
    println!("Frames:   {}", frames);
    println!("Duration: {} ms", now);
    println!("Final:    ({:.1}, {:.1})", end.x, end.y);

    Ok(())
}
