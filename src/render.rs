use crate::assets::Sprite;
use crate::geometry::Rect;
use crate::settings::Rgb;

/// Draw target for one frame. Coordinates are screen pixels; the
/// implementation decides how pixels map onto its surface.
pub trait Renderer {
    fn fill(&mut self, color: Rgb);
    fn draw_sprite(&mut self, x: i32, y: i32, sprite: &Sprite);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Rgb, bg: Rgb);
    fn present(&mut self);
}

/// Things that take part in the frame.
pub trait Drawable {
    fn draw(&self, renderer: &mut dyn Renderer);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill(Rgb),
    Sprite { x: i32, y: i32, name: String },
    Rect(Rect, Rgb),
    Text { x: i32, y: i32, text: String },
    Present,
}

/// Headless renderer that keeps the command stream of the last frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCommand>,
    pub frames: Vec<Vec<DrawCommand>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        self.frames.last().map(|f| f.as_slice()).unwrap_or(&[])
    }

    pub fn sprites_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DrawCommand> {
        self.last_frame()
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Sprite { name: n, .. } if n == name))
    }

    pub fn texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn fill(&mut self, color: Rgb) {
        self.pending.push(DrawCommand::Fill(color));
    }

    fn draw_sprite(&mut self, x: i32, y: i32, sprite: &Sprite) {
        self.pending.push(DrawCommand::Sprite {
            x,
            y,
            name: sprite.name.clone(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.pending.push(DrawCommand::Rect(rect, color));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, _fg: Rgb, _bg: Rgb) {
        self.pending.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn present(&mut self) {
        self.pending.push(DrawCommand::Present);
        self.frames.push(std::mem::take(&mut self.pending));
    }
}
