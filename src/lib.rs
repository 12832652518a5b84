//! Air Shooter - a side-scrolling arcade shooter
//!
//! Core modules:
//! - `game`: tick loop and Active/Inactive state machine
//! - `entities`: ship, bullets, obstacles and clouds
//! - `collision`: bullet/obstacle scoring, pool refill and ship hits
//! - `stats` / `scoreboard`: lives, score and the cached HUD
//! - `ui` / `event`: terminal renderer and input source

pub mod assets;
pub mod button;
pub mod collision;
pub mod entities;
pub mod error;
pub mod event;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scoreboard;
pub mod settings;
pub mod stats;
pub mod ui;

pub use error::GameError;
pub use game::AirShooter;
pub use settings::Settings;
