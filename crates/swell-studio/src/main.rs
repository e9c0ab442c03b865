//! swell studio: a displaced sphere over a rippling ground plane, with a
//! debug panel for the wave, color and light parameters.
//!
//! Controls: drag to orbit, wheel to zoom, `W` wireframe, `R` reset camera,
//! `H` hide panel, `Esc` quit.

mod app;
mod panel;
mod scene;

use anyhow::Result;
use swell_engine::device::GpuInit;
use swell_engine::logging::{init_logging, LoggingConfig};
use swell_engine::text::{FontId, FontSystem};
use swell_engine::window::{Runtime, RuntimeConfig};

use crate::app::StudioApp;

const FONT_PATHS: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut fonts = FontSystem::new();
    // The scene still renders without a font; only panel text is lost.
    let font = fonts.load_first(FONT_PATHS).unwrap_or_else(|err| {
        log::warn!("{err}; panel text disabled");
        FontId::default()
    });

    let config = RuntimeConfig {
        title: "swell".to_string(),
        ..RuntimeConfig::default()
    };
    let result = Runtime::run(config, GpuInit::default(), StudioApp::new(fonts, font));
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}
