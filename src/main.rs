use anyhow::Context;
use sphere_caster::ppm::PpmWriter;
use sphere_caster::{init_logging, RenderConfig, Renderer};
use std::io::{stdout, BufWriter};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    init_logging();

    let renderer = Renderer::new(RenderConfig::default())?;

    // Output Format
    let out = BufWriter::new(stdout().lock());
    let mut ppm = PpmWriter::new(out, renderer.image_width(), renderer.image_height())
        .context("failed to write PPM header")?;
    renderer
        .render(&mut ppm)
        .context("failed to write PPM pixels")?;

    Ok(())
}
