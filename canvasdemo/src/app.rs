use crate::frames;
use crate::Config;
use crate::Error;

use canvasdemo_graphics::arrow::draw_arrow;
use canvasdemo_graphics::CairoSurface;
use canvasdemo_graphics::Command;
use canvasdemo_graphics::Recorder;
use canvasdemo_graphics::Surface;
use canvasdemo_sim::Animation;
use canvasdemo_sim::Ticker;
use std::ops::ControlFlow;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub ticks: u64,
    pub frames_written: u64,
    pub position_x: f64,
}

/// run the ball animation on an image surface of the configured viewport
pub fn animate(cfg: &Config) -> Result<Summary, Error> {
    let viewport = cfg.viewport.to_viewport();
    let image = viewport.create_surface()?;
    log::info!("viewport: {}x{}", viewport.width, viewport.height);

    let mut animation = Animation::new(
        cfg.animation.to_model(),
        CairoSurface::for_surface(&image)?,
        viewport,
        cfg.ball.clone(),
    );

    let mut frames = match &cfg.output.directory {
        Some(dir) => Some(frames::FrameWriter::new(dir, cfg.output.frame_every)?),
        None => None,
    };

    let ticks = Ticker::new(cfg.animation.interval()?)
        .realtime(cfg.output.realtime)
        .max_ticks(cfg.output.max_ticks)
        .run(&mut animation, |anim| {
            if let Some(frames) = &mut frames {
                frames.on_tick(anim.ticks(), &image)?;
            }
            Ok::<_, Error>(ControlFlow::Continue(()))
        })?;

    Ok(Summary {
        ticks,
        frames_written: frames.map_or(0, |f| f.written()),
        position_x: animation.state().position_x,
    })
}

/// draw a single arrow onto a cleared viewport and write it as PNG
pub fn arrow(
    cfg: &Config,
    base_x: f64,
    base_y: f64,
    length: f64,
    path: &std::path::Path,
) -> Result<(), Error> {
    let viewport = cfg.viewport.to_viewport();
    let image = viewport.create_surface()?;
    let mut surface = CairoSurface::for_surface(&image)?;

    let (width, height) = surface.size()?;
    surface.set_fill_style(cfg.ball.background);
    surface.fill_rect(0.0, 0.0, width, height)?;
    surface.set_stroke_style(cfg.ball.color);
    draw_arrow(&mut surface, base_x, base_y, length)?;

    frames::write_png(&image, path)?;
    log::info!("wrote arrow to {}", path.display());
    Ok(())
}

/// run `ticks` ticks against a [Recorder] and return the issued commands
pub fn trace(cfg: &Config, ticks: u64) -> Result<Vec<Command>, Error> {
    let mut animation = Animation::new(
        cfg.animation.to_model(),
        Recorder::new(),
        cfg.viewport.to_viewport(),
        cfg.ball.clone(),
    );

    Ticker::new(cfg.animation.interval()?)
        .realtime(false)
        .max_ticks(Some(ticks))
        .run(&mut animation, |_| Ok::<_, Error>(ControlFlow::Continue(())))?;

    Ok(animation.into_surface().take())
}
