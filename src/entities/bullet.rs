use rand::RngCore;

use crate::entities::Entity;
use crate::geometry::Rect;
use crate::render::{Drawable, Renderer};
use crate::settings::{Rgb, Settings};

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    x: f32,
    speed: f32,
    color: Rgb,
}

impl Bullet {
    /// Fire from the ship's center.
    pub fn new(settings: &Settings, ship: &Rect) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_center(ship.centerx(), ship.centery());
        Self {
            rect,
            x: rect.x as f32,
            speed: settings.bullet_speed,
            color: settings.bullet_color,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.rect.x = x.round() as i32;
    }
}

impl Entity for Bullet {
    fn update(&mut self, _rng: &mut dyn RngCore) {
        self.set_x(self.x + self.speed);
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for Bullet {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.fill_rect(self.rect, self.color);
    }
}
