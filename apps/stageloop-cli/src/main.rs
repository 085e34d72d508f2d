use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glam::Vec2;
use stageloop_core::{EngineConfig, FrameLoop, Stage};
use stageloop_input::{Input, Key, ManualDevice};
use stageloop_render::RecordingTarget;
use stageloop_tools::StageInspector;
use tracing_subscriber::EnvFilter;

mod demo;

use demo::{Drifter, Hud, Player};

#[derive(Parser)]
#[command(name = "stageloop-cli", about = "Headless driver for the stageloop runtime")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print runtime version and crate info
    Info,
    /// Run a scripted headless session of the frame loop
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "240")]
        frames: u32,

        /// Optional YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("stageloop-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("core: {}", stageloop_core::crate_info());
            println!("render: {}", stageloop_render::crate_info());
            println!("input: {}", stageloop_input::crate_info());
            println!("tools: {}", stageloop_tools::crate_info());
        }
        Commands::Run { frames, config } => {
            let config = match config {
                Some(path) => EngineConfig::load(path)?,
                None => EngineConfig::default(),
            };
            run(frames, &config);
        }
    }

    Ok(())
}

/// Keyboard script for the demo session: wander right, then down, with a
/// pause toggled in the middle.
fn script_device(frame: u32, device: &mut ManualDevice) {
    match frame {
        10 => device.press(Key::D),
        70 => device.release(Key::D),
        80 => device.press(Key::S),
        110 => device.release(Key::S),
        120 | 150 => device.press(Key::Escape),
        121 | 151 => device.release(Key::Escape),
        _ => {}
    }
}

fn run(frames: u32, config: &EngineConfig) {
    let mut stage = Stage::new();
    let mut frame_loop = FrameLoop::with_config(config);

    let window = config.window_size();
    let center = window * 0.5;
    let player = stage.spawn(Player::new(center));
    stage.spawn(Drifter::new(
        1.0,
        center + Vec2::new(-120.0, -60.0),
        Vec2::new(45.0, -20.0),
        window,
    ));
    stage.spawn(Drifter::new(
        2.0,
        center + Vec2::new(100.0, 40.0),
        Vec2::new(-30.0, 55.0),
        window,
    ));
    stage.spawn(Drifter::new(
        3.0,
        center + Vec2::new(0.0, -100.0),
        Vec2::new(10.0, -80.0),
        window,
    ));
    stage.spawn(Hud::new(config.ui_layer));

    let mut device = ManualDevice::new();
    let mut input = Input::new();
    let mut target = RecordingTarget::new();
    let delta = 1.0 / config.target_fps.max(1) as f32;

    tracing::info!(frames, delta, "starting scripted run");

    for frame in 0..frames {
        script_device(frame, &mut device);
        input.poll(&device);
        if input.key_down(Key::Escape) {
            frame_loop.paused = !frame_loop.paused;
            tracing::info!(frame, paused = frame_loop.paused, "pause toggled");
        }

        target.clear();
        frame_loop.advance(delta, &mut stage, &mut input, &mut target);

        if (frame + 1) % 60 == 0 {
            tracing::info!(
                frame = frame + 1,
                summary = %StageInspector::summary(&stage),
                "checkpoint"
            );
        }
    }

    println!("{}", StageInspector::summary(&stage));
    if let Some(info) = StageInspector::inspect(&stage, player) {
        println!("player: {info}");
    }
    println!("last frame: {}", target.summary());
    println!(
        "clock: total={:.2}s game={:.2}s",
        frame_loop.clock().total(),
        frame_loop.clock().game_time()
    );
}
