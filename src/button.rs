use crate::geometry::Rect;
use crate::render::{Drawable, Renderer};
use crate::scoreboard::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::settings::{Rgb, Settings};

/// Centered start/restart prompt. Clicking inside `rect` while no game is
/// running starts one.
pub struct Button {
    pub rect: Rect,
    label: String,
    color: Rgb,
    text_color: Rgb,
}

impl Button {
    pub fn new(settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.button_width, settings.button_height);
        rect.set_center(settings.screen_width / 2, settings.screen_height / 2);
        Self {
            rect,
            label: settings.button_label.clone(),
            color: settings.button_color,
            text_color: settings.button_text_color,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }
}

impl Drawable for Button {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.fill_rect(self.rect, self.color);
        let text_w = self.label.chars().count() as i32 * GLYPH_WIDTH;
        renderer.draw_text(
            self.rect.centerx() - text_w / 2,
            self.rect.centery() - GLYPH_HEIGHT / 2,
            &self.label,
            self.text_color,
            self.color,
        );
    }
}
