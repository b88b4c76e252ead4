use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use strip_engine::core::{App, AppControl, FrameCtx, SetupCtx};
use strip_engine::render::{GpuSink, LineStripPipeline, ProgramLibrary, RenderCtx};
use strip_engine::scene::{FrameOutcome, LineStrip, StripConfig};

/// How often frame diagnostics are logged at trace level.
const STATS_EVERY: u64 = 600;

/// Everything the per-frame draw needs, built once by `setup`.
struct Ready {
    strip: LineStrip,
    pipeline: LineStripPipeline,
    skipped: u64,
}

/// Line-strip demo application.
///
/// `Uninitialized` until the runtime calls `setup`; `Ready` afterwards.
pub struct StripApp {
    config: StripConfig,
    seed: Option<u64>,
    state: Option<Ready>,
}

impl StripApp {
    pub fn new(config: StripConfig) -> Self {
        Self {
            config,
            seed: None,
            state: None,
        }
    }

    /// Fixes the point generator seed (the shape is random per run otherwise).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl App for StripApp {
    fn setup(&mut self, ctx: &mut SetupCtx<'_, '_>) -> anyhow::Result<()> {
        let viewport = ctx.window.logical_size();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let strip = LineStrip::setup(viewport, &self.config, &mut rng)
            .context("failed to build line strip")?;

        let rctx = RenderCtx::new(ctx.gpu.device(), ctx.gpu.queue(), ctx.gpu.surface_format());
        let pipeline = LineStripPipeline::new(
            &rctx,
            &ProgramLibrary::embedded(),
            &self.config.vertex_entry,
            &self.config.fragment_entry,
        )
        .context("failed to build line-strip pipeline")?;

        log::info!(
            "ready: {} points in a {}x{} view",
            strip.points().len(),
            viewport.width,
            viewport.height
        );

        self.state = Some(Ready {
            strip,
            pipeline,
            skipped: 0,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(ready) = self.state.as_mut() else {
            return AppControl::Continue;
        };

        let mut sink = GpuSink::new(&mut *ctx.gpu, ctx.window.window, &ready.pipeline);
        let outcome = ready.strip.render(&mut sink);
        if sink.fatal {
            log::error!("surface lost beyond recovery; exiting");
            return AppControl::Exit;
        }

        if outcome == FrameOutcome::Skipped {
            ready.skipped += 1;
        }
        if ctx.time.frame_index % STATS_EVERY == 0 {
            log::trace!(
                "frame {}: dt {:.2} ms, {} skipped so far",
                ctx.time.frame_index,
                ctx.time.dt * 1000.0,
                ready.skipped
            );
        }

        AppControl::Continue
    }
}
