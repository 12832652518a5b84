use rand::RngCore;

use crate::assets::Sprite;
use crate::entities::{Drift, Entity};
use crate::geometry::Rect;
use crate::render::{Drawable, Renderer};
use crate::settings::Settings;

/// Background decoration. Wraps like an obstacle but never collides.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    sprite: Sprite,
    pub drift: Drift,
}

impl Cloud {
    pub fn spawn(settings: &Settings, sprite: Sprite, rng: &mut dyn RngCore) -> Self {
        let drift = Drift::spawn(
            rng,
            sprite.width,
            settings.game_speed,
            settings.screen_width,
            settings.cloud_respawn_offset,
            settings.cloud_band,
        );
        Self { sprite, drift }
    }
}

impl Entity for Cloud {
    fn update(&mut self, rng: &mut dyn RngCore) {
        self.drift.advance(rng);
    }

    fn rect(&self) -> Rect {
        Rect::new(
            self.drift.x.round() as i32,
            self.drift.y,
            self.sprite.width,
            self.sprite.height,
        )
    }
}

impl Drawable for Cloud {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(self.drift.x.round() as i32, self.drift.y, &self.sprite);
    }
}
