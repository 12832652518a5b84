use crate::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first game
    Inactive,
    Active,
    /// Out of lives; behaves like `Inactive` until restarted
    GameOver,
}

/// Outcome of the ship being hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeLost {
    /// Lives remain, play continues
    Continue { ships_left: u32 },
    GameOver,
}

#[derive(Clone, Debug)]
pub struct GameStats {
    phase: GamePhase,
    pub score: u32,
    pub ships_left: u32,
    pub best_score: u32,
    max_ships: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: GamePhase::Inactive,
            score: 0,
            ships_left: settings.ship_lives,
            best_score: 0,
            max_ships: settings.ship_lives,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn max_ships(&self) -> u32 {
        self.max_ships
    }

    /// Fresh score and lives, switch to `Active`.
    pub fn start(&mut self) {
        self.score = 0;
        self.ships_left = self.max_ships;
        self.phase = GamePhase::Active;
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Take one life. Reaching zero ends the game; never goes below zero.
    pub fn lose_life(&mut self) -> LifeLost {
        self.ships_left = self.ships_left.saturating_sub(1);
        if self.ships_left == 0 {
            self.phase = GamePhase::GameOver;
            self.best_score = self.best_score.max(self.score);
            LifeLost::GameOver
        } else {
            LifeLost::Continue {
                ships_left: self.ships_left,
            }
        }
    }
}
