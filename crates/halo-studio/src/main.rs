use std::thread;
use std::time::Duration;

use anyhow::Result;

use halo_engine::logging;
use halo_rings::prelude::*;

/// Simulated frame budget: ~60 fps for three seconds of animation.
const FRAMES: u32 = 180;
const FRAME_BUDGET: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    logging::init_logging(None);

    println!();
    println!("  halo studio — ring gauge dry run");
    println!("  three rings, eased 0.0 → 2.5, autoreversing");
    println!();

    let mut stack = RingStack::new(50.0, 3.0)
        .ring(
            Ring::new(
                0.0,
                Color::from_srgb_u8(225, 1, 22, 255),
                Color::from_srgb_u8(255, 51, 139, 255),
            )
            .with_icon(badge([255, 96, 64, 255])),
        )
        .ring(
            Ring::new(
                0.0,
                Color::from_srgb_u8(57, 219, 0, 255),
                Color::from_srgb_u8(187, 255, 0, 255),
            )
            .with_icon(badge([120, 235, 40, 255])),
        )
        .ring(
            Ring::new(
                0.0,
                Color::from_srgb_u8(0, 186, 233, 255),
                Color::from_srgb_u8(15, 253, 207, 255),
            )
            .with_icon(badge([40, 210, 235, 255])),
        );

    let bounds = Rect::square(0.0, 0.0, 320.0);
    let mut timeline = CompletionTimeline::new(0.0, 2.5, 3.0)
        .easing(Easing::EaseInOut)
        .repeat(Repeat::Forever { autoreverse: true });
    let mut clock = FrameClock::new();

    for frame in 0..FRAMES {
        thread::sleep(FRAME_BUDGET);

        // The completion scalar is the only thing the animation touches; the
        // renderer re-derives geometry and colors from it every frame.
        let completion = timeline.advance(clock.tick());
        for ring in stack.rings_mut() {
            ring.completion = completion;
        }

        let draw_list = stack.render(bounds)?;

        if frame % 30 == 0 {
            let overflowing = stack
                .rings_mut()
                .iter()
                .filter(|r| r.completion > 1.0)
                .count();
            log::info!(
                "frame {frame:3}: completion {completion:.3}, {} draw ops, {} layers, {} rings overflowing",
                draw_list.items().len(),
                draw_list.layers().len() - 1,
                overflowing,
            );
        }
    }

    log::info!("dry run complete after {FRAMES} frames");
    Ok(())
}

/// Tiny solid sprite standing in for a real glyph icon.
fn badge(rgba: [u8; 4]) -> Icon {
    Icon::new(image::RgbaImage::from_pixel(12, 12, image::Rgba(rgba)))
}
