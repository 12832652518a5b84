//! Terminal presentation
//!
//! `CellCanvas` is the `Renderer` the game draws into. It scales screen
//! pixels onto the character grid of the play area and double-buffers:
//! the game fills the back buffer, `present` swaps it to the front, and
//! `render` hands the front buffer to ratatui.

use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::assets::Sprite;
use crate::game::AirShooter;
use crate::geometry::Rect as PixelRect;
use crate::render::Renderer;
use crate::settings::Rgb;
use crate::stats::GamePhase;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Self { ch: ' ', fg: bg, bg }
    }
}

pub struct CellCanvas {
    world_width: i32,
    world_height: i32,
    area: Rect, // play area on the terminal
    back: Vec<Cell>,
    front: Vec<Cell>,
}

impl CellCanvas {
    pub fn new(world_width: i32, world_height: i32) -> Self {
        Self {
            world_width,
            world_height,
            area: Rect::default(),
            back: Vec::new(),
            front: Vec::new(),
        }
    }

    /// Match the grid to the play area; both buffers are cleared on change.
    pub fn resize(&mut self, area: Rect) {
        if area.width != self.area.width || area.height != self.area.height {
            let len = area.width as usize * area.height as usize;
            self.back = vec![Cell::blank((0, 0, 0)); len];
            self.front = self.back.clone();
        }
        self.area = area;
    }

    fn cols(&self) -> i32 {
        self.area.width as i32
    }

    fn rows(&self) -> i32 {
        self.area.height as i32
    }

    fn to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let col = (x as i64 * self.cols() as i64).div_euclid(self.world_width as i64);
        let row = (y as i64 * self.rows() as i64).div_euclid(self.world_height as i64);
        (col as i32, row as i32)
    }

    /// Map an absolute terminal position to screen pixels (cell center).
    /// `None` outside the play area.
    pub fn to_world(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        if self.cols() == 0 || self.rows() == 0 || !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let col = (column - self.area.x) as i64;
        let row = (row - self.area.y) as i64;
        let x = (col * 2 + 1) * self.world_width as i64 / (2 * self.cols() as i64);
        let y = (row * 2 + 1) * self.world_height as i64 / (2 * self.rows() as i64);
        Some((x as i32, y as i32))
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols() || row >= self.rows() {
            return;
        }
        let idx = row as usize * self.cols() as usize + col as usize;
        self.back[idx] = cell;
    }

    fn bg_at(&self, col: i32, row: i32) -> Rgb {
        if col < 0 || row < 0 || col >= self.cols() || row >= self.rows() {
            return (0, 0, 0);
        }
        self.back[row as usize * self.cols() as usize + col as usize].bg
    }

    fn char_at(&self, col: i32, row: i32) -> char {
        self.front[row as usize * self.cols() as usize + col as usize].ch
    }

    /// Front buffer as styled lines for a `Paragraph`.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let cols = self.cols().max(0) as usize;
        if cols == 0 {
            return Vec::new();
        }
        self.front
            .chunks(cols)
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|c| {
                        let style = Style::default()
                            .fg(Color::Rgb(c.fg.0, c.fg.1, c.fg.2))
                            .bg(Color::Rgb(c.bg.0, c.bg.1, c.bg.2));
                        Span::styled(String::from(c.ch), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Visible text of the front buffer, one string per row.
    pub fn text_rows(&self) -> Vec<String> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.char_at(c, r)).collect())
            .collect()
    }
}

impl Renderer for CellCanvas {
    fn fill(&mut self, color: Rgb) {
        self.back.fill(Cell::blank(color));
    }

    fn draw_sprite(&mut self, x: i32, y: i32, sprite: &Sprite) {
        let (col, row) = self.to_cell(x, y);
        for (dy, line) in sprite.art.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let (c, r) = (col + dx as i32, row + dy as i32);
                let bg = self.bg_at(c, r);
                self.put(c, r, Cell { ch, fg: sprite.color, bg });
            }
        }
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let (c0, r0) = self.to_cell(rect.x, rect.y);
        let (c1, r1) = self.to_cell(rect.right(), rect.bottom());
        // thin shapes still get one cell
        for r in r0..r1.max(r0 + 1) {
            for c in c0..c1.max(c0 + 1) {
                self.put(c, r, Cell::blank(color));
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Rgb, bg: Rgb) {
        let (col, row) = self.to_cell(x, y);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, Cell { ch, fg, bg });
        }
    }

    fn present(&mut self) {
        self.front.clone_from(&self.back);
    }
}

/// Draw the bordered play field, the help line, and the pointer.
pub fn render(frame: &mut Frame, canvas: &mut CellCanvas, game: &AirShooter) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" ✈ Air Shooter ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Play area
            Constraint::Length(1), // Help
        ])
        .split(inner);

    canvas.resize(chunks[0]);
    frame.render_widget(Paragraph::new(canvas.lines()), chunks[0]);

    let help = match game.phase() {
        GamePhase::Active => Line::from(vec![
            Span::styled(" ↑/↓ Move ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("SPACE Fire ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
        GamePhase::Inactive | GamePhase::GameOver => Line::from(vec![
            Span::styled(
                format!(" ▶ Click {} to play! ", game.button().label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(help), chunks[1]);

    // The terminal cursor stands in for the mouse pointer.
    if game.pointer_visible() {
        let b = game.button().rect;
        let (col, row) = canvas.to_cell(b.centerx(), b.bottom());
        if col >= 0 && row >= 0 && col < canvas.cols() && row < canvas.rows() {
            frame.set_cursor_position(Position::new(
                canvas.area.x + col as u16,
                canvas.area.y + row as u16,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetProvider, BuiltinAssets};

    fn canvas() -> CellCanvas {
        let mut c = CellCanvas::new(1100, 600);
        c.resize(Rect::new(1, 1, 110, 30));
        c
    }

    #[test]
    fn pixel_to_cell_scaling() {
        let c = canvas();
        assert_eq!(c.to_cell(0, 0), (0, 0));
        assert_eq!(c.to_cell(550, 300), (55, 15));
        assert_eq!(c.to_cell(-15, 0), (-2, 0));
    }

    #[test]
    fn terminal_click_maps_into_button() {
        let c = canvas();
        // center cell of the play area
        let (x, y) = c.to_world(1 + 55, 1 + 15).unwrap();
        assert!(crate::button::Button::new(&Default::default()).contains(x, y));
        assert!(c.to_world(0, 0).is_none());
    }

    #[test]
    fn drawing_is_only_visible_after_present() {
        let mut c = canvas();
        c.fill((0, 0, 0));
        c.draw_sprite(100, 100, &BuiltinAssets.resolve("heart").unwrap());
        assert!(c.text_rows()[5].trim().is_empty());
        c.present();
        assert!(c.text_rows()[5].contains('♥'));
    }

    #[test]
    fn off_canvas_draws_are_clipped() {
        let mut c = canvas();
        c.fill((0, 0, 0));
        c.draw_sprite(-500, 5000, &BuiltinAssets.resolve("cloud2").unwrap());
        c.draw_text(1090, 10, "12345", (0, 0, 0), (255, 255, 255));
        c.present();
        assert_eq!(c.text_rows().len(), 30);
        assert!(c.text_rows()[0].ends_with('1'));
    }
}
