//! Safe widget demo: opens a window and drives the scene once per frame.

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use strata_engine::core::{App, AppControl, FrameCtx};
use strata_engine::input::Key;
use strata_engine::logging::{init_logging, LoggingConfig};
use strata_engine::scene::DrawList;
use strata_engine::window::{Runtime, RuntimeConfig};
use strata_scene::preset::{build_safe_with, SafePreset};
use strata_scene::{FrameInput, NodeId, SceneConfig, SizingMode};

const TITLE: &str = "strata safe";

/// Interactive safe widget
#[derive(Parser, Debug)]
#[command(name = "strata-demo")]
#[command(about = "Renders the sample safe widget with hover and click feedback")]
struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Scales the panel, screws and dial
    #[arg(long, default_value_t = 1.0)]
    size_mult: f64,

    /// Build the safe with its door open (reserved)
    #[arg(long)]
    open: bool,

    /// Size children against their parent instead of the viewport
    #[arg(long)]
    parent_sizing: bool,

    /// Target frame rate; 0 renders as fast as possible
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

struct SafeApp {
    safe: SafePreset,
    list: DrawList,
    hovered: Option<NodeId>,
}

impl SafeApp {
    fn new(safe: SafePreset) -> Self {
        Self { safe, list: DrawList::new(), hovered: None }
    }

    fn title_for(&self, hovered: Option<NodeId>) -> String {
        let node = hovered.and_then(|id| self.safe.registry.node(id));
        match node {
            Some(n) => format!("{TITLE} [{} z:{}]", n.kind(), n.z()),
            None => TITLE.to_string(),
        }
    }
}

impl App for SafeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        let input = FrameInput {
            viewport: ctx.viewport,
            pointer: ctx.pointer(),
            click: ctx.click(),
        };

        self.list.clear();
        let report = self.safe.registry.draw(&input, &mut self.list);
        ctx.canvas.execute(&self.list);

        if report.hovered != self.hovered {
            ctx.runtime.set_title(self.title_for(report.hovered));
            self.hovered = report.hovered;
        }

        AppControl::Continue
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    let sizing = if cli.parent_sizing { SizingMode::Parent } else { SizingMode::Viewport };
    let safe = build_safe_with(SceneConfig::with_sizing(sizing), cli.open, cli.size_mult)
        .context("failed to build safe scene")?;

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(f64::from(cli.width), f64::from(cli.height)),
        target_fps: cli.fps,
        ..RuntimeConfig::default()
    };

    log::info!("starting {}x{} at {} fps", cli.width, cli.height, cli.fps);
    Runtime::run(config, SafeApp::new(safe))
}
