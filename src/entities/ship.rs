use rand::RngCore;

use crate::assets::Sprite;
use crate::entities::Entity;
use crate::geometry::Rect;
use crate::render::{Drawable, Renderer};
use crate::settings::Settings;

pub struct Ship {
    sprite: Sprite,
    pub rect: Rect,
    center: f32, // sub-pixel centery, the rect is re-synced from it
    speed: f32,
    pub moving_up: bool,
    pub moving_down: bool,
    screen_height: i32,
    home_y: i32,
}

impl Ship {
    pub fn new(settings: &Settings, sprite: Sprite) -> Self {
        let mut rect = Rect::new(0, 0, sprite.width, sprite.height);
        let home_y = settings.center_y();
        rect.set_center(settings.screen_width / 4, home_y);
        Self {
            sprite,
            rect,
            center: home_y as f32,
            speed: settings.ship_speed,
            moving_up: false,
            moving_down: false,
            screen_height: settings.screen_height,
            home_y,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.center
    }

    pub fn reset_position(&mut self) {
        self.center = self.home_y as f32;
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        self.rect.set_centery(self.center.round() as i32);
    }
}

impl Entity for Ship {
    fn update(&mut self, _rng: &mut dyn RngCore) {
        if self.moving_down && self.rect.bottom() < self.screen_height {
            self.center += self.speed;
        }
        if self.moving_up && self.rect.top() > 0 {
            self.center -= self.speed;
        }
        self.sync_rect();
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for Ship {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(self.rect.x, self.rect.y, &self.sprite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetProvider, BuiltinAssets};
    use rand::rngs::mock::StepRng;

    fn ship() -> Ship {
        let settings = Settings::default();
        Ship::new(&settings, BuiltinAssets.resolve("ship").unwrap())
    }

    #[test]
    fn starts_at_quarter_width_and_vertical_center() {
        let s = ship();
        assert_eq!(s.rect.centerx(), 275);
        assert_eq!(s.rect.centery(), 300);
        assert_eq!(s.center_y(), 300.0);
    }

    #[test]
    fn moves_by_speed_in_both_directions() {
        let mut s = ship();
        let mut rng = StepRng::new(0, 1);
        s.moving_down = true;
        s.update(&mut rng);
        assert_eq!(s.center_y(), 307.0);
        s.moving_down = false;
        s.moving_up = true;
        s.update(&mut rng);
        s.update(&mut rng);
        assert_eq!(s.center_y(), 293.0);
        assert_eq!(s.rect.centery(), 293);
    }

    #[test]
    fn stops_at_screen_edges() {
        let mut s = ship();
        let mut rng = StepRng::new(0, 1);
        s.moving_up = true;
        for _ in 0..200 {
            s.update(&mut rng);
        }
        // one step may overshoot, never more
        assert!(s.rect.top() <= 0 && s.rect.top() > -7);
        s.moving_up = false;
        s.moving_down = true;
        for _ in 0..200 {
            s.update(&mut rng);
        }
        assert!(s.rect.bottom() >= 600 && s.rect.bottom() < 607);
    }

    #[test]
    fn reset_returns_to_center() {
        let mut s = ship();
        let mut rng = StepRng::new(0, 1);
        s.moving_down = true;
        for _ in 0..10 {
            s.update(&mut rng);
        }
        s.reset_position();
        assert_eq!(s.center_y(), 300.0);
        assert_eq!(s.rect.centery(), 300);
    }
}
