use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use gyre_engine::animation::{AnimationConfig, Preset};
use gyre_engine::device::GpuInit;
use gyre_engine::logging::{init_logging, LoggingConfig};
use gyre_engine::paint::Color;
use gyre_engine::window::{Runtime, RuntimeConfig};

mod scene;

use scene::Scene;

/// Environment variable naming the start-up preset, e.g. `GYRE_PRESET=drift`.
const PRESET_VAR: &str = "GYRE_PRESET";

fn preset_from_env() -> Result<Preset> {
    match std::env::var(PRESET_VAR) {
        Ok(name) => name
            .parse()
            .with_context(|| format!("invalid {PRESET_VAR}")),
        Err(std::env::VarError::NotPresent) => Ok(Preset::default()),
        Err(e) => Err(e).with_context(|| format!("cannot read {PRESET_VAR}")),
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let preset = preset_from_env()?;
    let scene = Scene::new(&AnimationConfig::from_preset(preset), Color::BLACK);

    let config = RuntimeConfig {
        title: format!("gyre · {preset}"),
        initial_size: LogicalSize::new(800.0, 800.0),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), scene)
}
