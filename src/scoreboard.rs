use crate::assets::Sprite;
use crate::render::{Drawable, Renderer};
use crate::settings::{Rgb, Settings};
use crate::stats::GameStats;

/// Approximate cell size of one rendered score character, in pixels.
pub const GLYPH_WIDTH: i32 = 20;
pub const GLYPH_HEIGHT: i32 = 34;

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Cached HUD state. Nothing here reads `GameStats` at draw time; callers
/// refresh after every score or life change.
pub struct Scoreboard {
    score: ScoreLabel,
    best: Option<ScoreLabel>,
    lives: Vec<(i32, i32)>,
    icon: Option<Sprite>,
    text_color: Rgb,
    bg_color: Rgb,
    screen_width: i32,
    margin: i32,
    lives_origin: (i32, i32),
}

impl Scoreboard {
    pub fn new(settings: &Settings, stats: &GameStats, icon: &Sprite) -> Self {
        let mut sb = Self {
            score: ScoreLabel {
                text: String::new(),
                x: 0,
                y: 0,
            },
            best: None,
            lives: Vec::new(),
            icon: None,
            text_color: settings.score_color,
            bg_color: settings.bg_color,
            screen_width: settings.screen_width,
            margin: settings.score_margin,
            lives_origin: settings.lives_origin,
        };
        sb.refresh_score(stats);
        sb.refresh_lives(stats, icon);
        sb
    }

    /// Re-render the score label, right-aligned under the top margin.
    pub fn refresh_score(&mut self, stats: &GameStats) {
        let text = stats.score.to_string();
        let width = text.chars().count() as i32 * GLYPH_WIDTH;
        self.score = ScoreLabel {
            x: self.screen_width - self.margin - width,
            y: self.margin,
            text,
        };

        self.best = if !stats.is_active() && stats.best_score > 0 {
            let text = format!("Best {}", stats.best_score);
            let width = text.chars().count() as i32 * GLYPH_WIDTH;
            Some(ScoreLabel {
                x: self.screen_width - self.margin - width,
                y: self.margin + GLYPH_HEIGHT,
                text,
            })
        } else {
            None
        };
    }

    /// Rebuild the row of life icons from scratch.
    pub fn refresh_lives(&mut self, stats: &GameStats, icon: &Sprite) {
        let (x0, y0) = self.lives_origin;
        self.lives = (0..stats.ships_left as i32)
            .map(|n| (x0 + n * icon.width, y0))
            .collect();
        self.icon = Some(icon.clone());
    }

    pub fn score_label(&self) -> &ScoreLabel {
        &self.score
    }

    pub fn best_label(&self) -> Option<&ScoreLabel> {
        self.best.as_ref()
    }

    pub fn life_icons(&self) -> &[(i32, i32)] {
        &self.lives
    }
}

impl Drawable for Scoreboard {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text(
            self.score.x,
            self.score.y,
            &self.score.text,
            self.text_color,
            self.bg_color,
        );
        if let Some(best) = &self.best {
            renderer.draw_text(best.x, best.y, &best.text, self.text_color, self.bg_color);
        }
        if let Some(icon) = &self.icon {
            for &(x, y) in &self.lives {
                renderer.draw_sprite(x, y, icon);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetProvider, BuiltinAssets};

    fn board() -> (Settings, GameStats, Sprite, Scoreboard) {
        let settings = Settings::default();
        let stats = GameStats::new(&settings);
        let heart = BuiltinAssets.resolve("heart").unwrap();
        let sb = Scoreboard::new(&settings, &stats, &heart);
        (settings, stats, heart, sb)
    }

    #[test]
    fn score_is_right_aligned() {
        let (_, mut stats, _, mut sb) = board();
        stats.award(120);
        sb.refresh_score(&stats);
        let label = sb.score_label();
        assert_eq!(label.text, "120");
        assert_eq!(label.x + 3 * GLYPH_WIDTH, 1100 - 20);
        assert_eq!(label.y, 20);
    }

    #[test]
    fn refresh_lives_is_idempotent() {
        let (_, stats, heart, mut sb) = board();
        sb.refresh_lives(&stats, &heart);
        let first = sb.life_icons().to_vec();
        sb.refresh_lives(&stats, &heart);
        assert_eq!(sb.life_icons(), first.as_slice());
        assert_eq!(first, vec![(10, 10), (42, 10), (74, 10)]);
    }

    #[test]
    fn lives_shrink_with_stats() {
        let (_, mut stats, heart, mut sb) = board();
        stats.start();
        stats.lose_life();
        sb.refresh_lives(&stats, &heart);
        assert_eq!(sb.life_icons().len(), 2);
    }

    #[test]
    fn best_score_only_shown_between_games() {
        let (_, mut stats, _, mut sb) = board();
        stats.start();
        stats.award(30);
        sb.refresh_score(&stats);
        assert!(sb.best_label().is_none());
        while stats.lose_life() != crate::stats::LifeLost::GameOver {}
        sb.refresh_score(&stats);
        assert_eq!(sb.best_label().map(|b| b.text.as_str()), Some("Best 30"));
    }
}
