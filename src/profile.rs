#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // all rays from the eye
    pub shadow_rays: usize, // all rays used to test visibility of the light
    pub hits: usize,        // camera rays that landed on a visible surface
}

impl Profile {
    pub fn new(camera_rays: usize, shadow_rays: usize, hits: usize) -> Self {
        Profile {
            camera_rays,
            shadow_rays,
            hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.shadow_rays + other.shadow_rays,
            self.hits + other.hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            shadow_rays,
            hits,
        } = self;
        let sum = camera_rays + shadow_rays;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} total shadow rays at {} per second and {} per second per thread",
            shadow_rays,
            shadow_rays as f32 / elapsed,
            shadow_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} camera rays hit a surface ({:.1}%)",
            hits,
            100.0 * hits as f32 / camera_rays.max(1) as f32
        );
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / (threads as f32)
        );
    }
}
