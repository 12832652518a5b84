//! Game loop and state machine
//!
//! One tick is: apply this tick's input events, run the update phase if a
//! game is running, then render unconditionally. All state is owned here and
//! only mutated from inside `tick`.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::{resolve_all, AssetProvider, Sprite};
use crate::button::Button;
use crate::collision::{self, CollisionReport};
use crate::entities::{Bullet, Cloud, Entity, Obstacle, Ship};
use crate::error::Result;
use crate::input::{InputEvent, Key};
use crate::render::{Drawable, Renderer};
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::stats::{GamePhase, GameStats, LifeLost};

pub struct AirShooter {
    settings: Settings,
    rng: StdRng,
    ship: Ship,
    bullets: Vec<Bullet>,
    obstacles: Vec<Obstacle>,
    clouds: Vec<Cloud>,
    starter: Vec<Sprite>,
    life_icon: Sprite,
    stats: GameStats,
    scoreboard: Scoreboard,
    button: Button,
    pointer_visible: bool,
    hit_pause: u32, // ticks left with the update phase frozen
    ticks: u64,
    pub should_quit: bool,
}

impl AirShooter {
    /// Resolves every image up front; a missing asset fails here.
    pub fn new(settings: Settings, assets: &dyn AssetProvider, seed: u64) -> Result<Self> {
        settings.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let ship = Ship::new(&settings, assets.resolve(&settings.ship_image)?);
        let starter = resolve_all(assets, &settings.starter_obstacles)?;
        let life_icon = assets.resolve(&settings.life_icon)?;
        let clouds = resolve_all(assets, &settings.clouds)?
            .into_iter()
            .map(|sprite| Cloud::spawn(&settings, sprite, &mut rng))
            .collect();
        let obstacles = collision::spawn_starter_set(&settings, &starter, &mut rng);

        let stats = GameStats::new(&settings);
        let scoreboard = Scoreboard::new(&settings, &stats, &life_icon);
        let button = Button::new(&settings);

        Ok(Self {
            settings,
            rng,
            ship,
            bullets: Vec::new(),
            obstacles,
            clouds,
            starter,
            life_icon,
            stats,
            scoreboard,
            button,
            pointer_visible: true,
            hit_pause: 0,
            ticks: 0,
            should_quit: false,
        })
    }

    /// Run one full tick against the given renderer.
    pub fn tick(&mut self, events: &[InputEvent], renderer: &mut dyn Renderer) {
        for &event in events {
            self.handle_input(event);
            if self.should_quit {
                return;
            }
        }
        if self.stats.is_active() {
            self.update();
        }
        self.render(renderer);
        self.ticks += 1;
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.should_quit = true,
            InputEvent::PointerClick { x, y } => {
                if !self.stats.is_active() && self.button.contains(x, y) {
                    self.start_game();
                }
            }
            InputEvent::KeyDown(Key::Down) => self.ship.moving_down = true,
            InputEvent::KeyDown(Key::Up) => self.ship.moving_up = true,
            InputEvent::KeyDown(Key::Fire) => {
                if self.stats.is_active() {
                    self.bullets.push(Bullet::new(&self.settings, &self.ship.rect));
                }
            }
            InputEvent::KeyUp(Key::Down) => self.ship.moving_down = false,
            InputEvent::KeyUp(Key::Up) => self.ship.moving_up = false,
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {}
        }
    }

    /// Update phase: move everything, then resolve collisions.
    pub fn update(&mut self) {
        if self.hit_pause > 0 {
            self.hit_pause -= 1;
            return;
        }

        self.ship.update(&mut self.rng);
        for bullet in &mut self.bullets {
            bullet.update(&mut self.rng);
        }
        for obstacle in &mut self.obstacles {
            obstacle.update(&mut self.rng);
        }
        for cloud in &mut self.clouds {
            cloud.update(&mut self.rng);
        }

        let report = collision::resolve(
            &self.settings,
            &self.starter,
            &self.ship.rect,
            &mut self.bullets,
            &mut self.obstacles,
            &mut self.rng,
        );
        self.apply(report);
    }

    fn apply(&mut self, report: CollisionReport) {
        if report.obstacles_destroyed > 0 {
            let destroyed = u32::try_from(report.obstacles_destroyed).unwrap_or(u32::MAX);
            self.stats.award(self.settings.points.saturating_mul(destroyed));
            self.scoreboard.refresh_score(&self.stats);
        }
        if report.pool_reset {
            log::debug!("Obstacle pool cleared, respawned {} obstacles", self.obstacles.len());
        }
        if report.ship_hit {
            self.ship_hit();
        }
    }

    fn ship_hit(&mut self) {
        let outcome = self.stats.lose_life();
        self.scoreboard.refresh_lives(&self.stats, &self.life_icon);
        match outcome {
            LifeLost::Continue { ships_left } => {
                log::debug!("Ship hit, {} left", ships_left);
                self.reset_field();
                self.hit_pause = self.settings.hit_pause_ticks;
            }
            LifeLost::GameOver => {
                log::info!("Game over at tick {} with score {}", self.ticks, self.stats.score);
                self.scoreboard.refresh_score(&self.stats);
                self.button.set_label(&self.settings.restart_label);
                self.pointer_visible = true;
            }
        }
    }

    fn start_game(&mut self) {
        self.pointer_visible = false;
        self.stats.start();
        self.hit_pause = 0;
        self.reset_field();
        self.scoreboard.refresh_score(&self.stats);
        self.scoreboard.refresh_lives(&self.stats, &self.life_icon);
        log::info!("Game started with {} ships", self.stats.ships_left);
    }

    /// Clear bullets, respawn the starter obstacles and recenter the ship.
    fn reset_field(&mut self) {
        self.bullets.clear();
        self.obstacles =
            collision::spawn_starter_set(&self.settings, &self.starter, &mut self.rng);
        self.ship.reset_position();
    }

    /// Render phase. Only reads state.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.fill(self.settings.bg_color);
        self.ship.draw(renderer);
        for cloud in &self.clouds {
            cloud.draw(renderer);
        }
        for obstacle in &self.obstacles {
            obstacle.draw(renderer);
        }
        for bullet in &self.bullets {
            bullet.draw(renderer);
        }
        self.scoreboard.draw(renderer);
        if !self.stats.is_active() {
            self.button.draw(renderer);
        }
        renderer.present();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.stats.phase()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut GameStats {
        &mut self.stats
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    pub fn hit_pause_remaining(&self) -> u32 {
        self.hit_pause
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
