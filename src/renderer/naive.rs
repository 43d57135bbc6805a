use super::{output_film, Film, Renderer};

use crate::camera::Camera;
use crate::integrator::{PhongIntegrator, SamplerIntegrator};
use crate::math::RGBColor;
use crate::parsing::config::{Config, RenderSettings};
use crate::profile::Profile;
use crate::world::World;

use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "pbr")]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "pbr")]
use std::thread;
#[cfg(feature = "pbr")]
use std::time::Duration;

#[cfg(feature = "pbr")]
use pbr::ProgressBar;
use rayon::prelude::*;

/// Renders every pixel independently on the global rayon pool.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    pub fn render_film<I: SamplerIntegrator>(
        integrator: &I,
        settings: &RenderSettings,
        camera: &Camera,
    ) -> (Film, Profile) {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        let mut film = Film::new(width, height, RGBColor::BLACK);
        let total_pixels = width * height;

        #[cfg(feature = "pbr")]
        let pixel_count = Arc::new(AtomicUsize::new(0));
        #[cfg(feature = "pbr")]
        let progress_thread = {
            let mut pb = ProgressBar::new(total_pixels as u64);
            let clone1 = pixel_count.clone();
            thread::spawn(move || {
                let mut local_index = 0;
                while local_index < total_pixels {
                    let pixels_to_increment = clone1.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;

                    thread::sleep(Duration::from_millis(100));
                }
                pb.finish();
            })
        };

        let stats: Profile = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let mut profile = Profile::default();
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;

                *pixel_ref = integrator.color(camera.get_ray(x, y), &mut profile);

                #[cfg(feature = "pbr")]
                pixel_count.fetch_add(1, Ordering::Relaxed);

                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        #[cfg(feature = "pbr")]
        {
            if let Err(panic) = progress_thread.join() {
                error!("progress bar incrementing thread threw an error {:?}", panic);
            }
        }

        debug_assert_eq!(stats.camera_rays, total_pixels);
        (film, stats)
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: World, config: &Config) -> anyhow::Result<()> {
        let integrator = PhongIntegrator::new(Arc::new(world));
        for render_settings in config.render_settings.iter() {
            let (width, height) = (
                render_settings.resolution.width,
                render_settings.resolution.height,
            );
            info!("starting render with film resolution {}x{}", width, height);
            let camera = Camera::new(render_settings.eye());

            let now = Instant::now();
            let (film, profile) = Self::render_film(&integrator, render_settings, &camera);
            let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
            info!("took {}s", elapsed);
            profile.pretty_print(elapsed, rayon::current_num_threads());

            let path = output_film(render_settings, &config.output_directory, &film)?;
            info!("wrote {}", path.display());
        }
        Ok(())
    }
}
