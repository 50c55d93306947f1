use super::camera::Camera;
use super::config::RenderConfig;
use super::error::ConfigError;
use super::shading::{ray_color, SPHERE};
use super::sink::PixelSink;
use super::surface::Surface;
use super::vec::Color;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, trace};

pub struct Renderer {
    camera: Camera,
    image_width: usize,
    image_height: usize,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let camera = Camera::new(&config);
        debug!(
            horizontal = %camera.horizontal(),
            vertical = %camera.vertical(),
            lower_left_corner = %camera.lower_left_corner(),
            sphere_center = %SPHERE.center(),
            sphere_radius = SPHERE.radius(),
            "derived viewport"
        );

        Ok(Self {
            camera,
            image_width: config.image_width,
            image_height: config.image_height(),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    // Scanline 0 is the bottom row. u and v reach both viewport edges; a single-pixel
    // dimension samples the lower/left edge.
    pub fn shade(&self, i: usize, j: usize) -> Color {
        let u = i as f64 / (self.image_width.max(2) - 1) as f64;
        let v = j as f64 / (self.image_height.max(2) - 1) as f64;
        ray_color(&self.camera.get_ray(u, v))
    }

    pub fn render<S: PixelSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let start = Instant::now();
        info!(
            width = self.image_width,
            height = self.image_height,
            "rendering"
        );

        for j in (0..self.image_height).rev() {
            trace!("running scanline {}", self.image_height - j);
            for i in 0..self.image_width {
                let color = self.shade(i, j);
                sink.put_pixel(i, self.image_height - 1 - j, color)?;
            }
        }
        sink.finish()?;

        info!(elapsed = ?start.elapsed(), "done");
        Ok(())
    }

    // Same image as `render`, one surface row per rayon task
    pub fn render_parallel(&self, surface: &mut Surface) {
        assert_eq!(
            (surface.width(), surface.height()),
            (self.image_width, self.image_height),
            "surface size does not match the render"
        );

        let start = Instant::now();
        info!(
            width = self.image_width,
            height = self.image_height,
            threads = rayon::current_num_threads(),
            "rendering in parallel"
        );

        let format = surface.format();
        let bpp = format.bytes_per_pixel();
        let pitch = surface.pitch();
        surface
            .pixels_mut()
            .par_chunks_mut(pitch)
            .enumerate()
            .for_each(|(y, row)| {
                let j = self.image_height - 1 - y;
                for i in 0..self.image_width {
                    format.store(&mut row[i * bpp..], self.shade(i, j));
                }
            });

        info!(elapsed = ?start.elapsed(), "done");
    }
}
