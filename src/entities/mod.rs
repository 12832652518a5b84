pub mod bullet;
pub mod cloud;
pub mod obstacle;
pub mod ship;

use rand::RngCore;

use crate::geometry::Rect;
use crate::render::Drawable;
use crate::settings::Band;

pub use bullet::Bullet;
pub use cloud::Cloud;
pub use obstacle::Obstacle;
pub use ship::Ship;

/// Shared per-tick capability of everything on screen.
pub trait Entity: Drawable {
    fn update(&mut self, rng: &mut dyn RngCore);
    fn rect(&self) -> Rect;
}

/// Leftward scrolling position that wraps back past the right edge once it
/// has fully left the screen, instead of being despawned.
#[derive(Clone, Debug, PartialEq)]
pub struct Drift {
    pub x: f32,
    pub y: i32,
    pub width: i32,
    speed: f32,
    screen_width: i32,
    respawn_offset: Band,
    band: Band,
}

impl Drift {
    pub fn spawn(
        rng: &mut dyn RngCore,
        width: i32,
        speed: f32,
        screen_width: i32,
        respawn_offset: Band,
        band: Band,
    ) -> Self {
        let mut drift = Self {
            x: 0.0,
            y: 0,
            width,
            speed,
            screen_width,
            respawn_offset,
            band,
        };
        drift.respawn(rng);
        drift
    }

    pub fn respawn(&mut self, rng: &mut dyn RngCore) {
        self.x = (self.screen_width + self.respawn_offset.sample(rng)) as f32;
        self.y = self.band.sample(rng);
    }

    /// Returns true if the position wrapped this step.
    pub fn advance(&mut self, rng: &mut dyn RngCore) -> bool {
        self.x -= self.speed;
        if self.x < -(self.width as f32) {
            self.respawn(rng);
            return true;
        }
        false
    }
}
