// Memory-surface mode: the saved PNG stands in for a window blit

use anyhow::Context;
use sphere_caster::surface::{PixelFormat, Surface};
use sphere_caster::{init_logging, RenderConfig, Renderer};
use tracing::info;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

const OUTPUT_PATH: &str = "render.png";

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    init_logging();

    let renderer = Renderer::new(RenderConfig::default())?;
    let mut surface = Surface::new(
        renderer.image_width(),
        renderer.image_height(),
        PixelFormat::Rgba32,
    )
    .context("failed to create render surface")?;

    renderer.render_parallel(&mut surface);

    surface
        .to_rgba_image()
        .save(OUTPUT_PATH)
        .with_context(|| format!("failed to save {OUTPUT_PATH}"))?;
    info!(path = OUTPUT_PATH, "saved");

    Ok(())
}
