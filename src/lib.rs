pub mod backend;
pub mod camera;
pub mod config;
pub mod error;
pub mod ppm;
pub mod ray;
pub mod render;
pub mod shading;
pub mod sink;
pub mod sphere;
pub mod surface;
pub mod vec;

pub use config::RenderConfig;
pub use error::{ConfigError, SurfaceError};
pub use render::Renderer;

// stdout is reserved for image data
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
}
