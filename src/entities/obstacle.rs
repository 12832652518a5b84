use rand::RngCore;

use crate::assets::Sprite;
use crate::entities::{Drift, Entity};
use crate::geometry::Rect;
use crate::render::{Drawable, Renderer};
use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    sprite: Sprite,
    pub drift: Drift,
    pub rect: Rect,
}

impl Obstacle {
    pub fn spawn(settings: &Settings, sprite: Sprite, rng: &mut dyn RngCore) -> Self {
        let drift = Drift::spawn(
            rng,
            sprite.width,
            settings.obstacle_speed,
            settings.screen_width,
            settings.obstacle_respawn_offset,
            settings.obstacle_band,
        );
        let mut obstacle = Self {
            rect: Rect::new(0, 0, sprite.width, sprite.height),
            sprite,
            drift,
        };
        obstacle.sync_rect();
        obstacle
    }

    pub fn name(&self) -> &str {
        &self.sprite.name
    }

    /// Place the obstacle directly, mostly useful for scripted scenarios.
    pub fn place(&mut self, x: f32, y: i32) {
        self.drift.x = x;
        self.drift.y = y;
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        self.rect.x = self.drift.x.round() as i32;
        self.rect.y = self.drift.y;
    }
}

impl Entity for Obstacle {
    fn update(&mut self, rng: &mut dyn RngCore) {
        if self.drift.advance(rng) {
            log::trace!("{} wrapped to x={}", self.name(), self.drift.x);
        }
        self.sync_rect();
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for Obstacle {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(self.rect.x, self.rect.y, &self.sprite);
    }
}
