//! Image assets
//!
//! The game only needs two things from an image: a drawable handle and its
//! pixel dimensions (for bounding boxes and wrap-respawn). The built-in
//! catalog carries terminal glyph art sized for a ~110x30 cell screen.

use crate::error::{GameError, Result};
use crate::settings::Rgb;

/// Drawable handle plus the pixel size the game logic works with.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub art: &'static [&'static str],
    pub color: Rgb,
}

pub trait AssetProvider {
    fn resolve(&self, name: &str) -> Result<Sprite>;
}

struct AssetDef {
    name: &'static str,
    width: i32,
    height: i32,
    art: &'static [&'static str],
    color: Rgb,
}

const CATALOG: [AssetDef; 8] = [
    AssetDef {
        name: "ship",
        width: 80,
        height: 46,
        art: &[" ▄▆█▀▀▄▄ ", "◥██████▶", " ▀▀█▀▀  "],
        color: (230, 230, 240),
    },
    AssetDef {
        name: "heart",
        width: 32,
        height: 30,
        art: &["♥♥"],
        color: (220, 40, 60),
    },
    AssetDef {
        name: "bird",
        width: 60,
        height: 40,
        art: &["\\_◉_/", " ╲▼╱ "],
        color: (120, 60, 30),
    },
    AssetDef {
        name: "emerald",
        width: 40,
        height: 40,
        art: &["╱◆╲", "╲◆╱"],
        color: (40, 200, 90),
    },
    AssetDef {
        name: "bird1",
        width: 60,
        height: 40,
        art: &["/‾◉‾\\", " ╱▲╲ "],
        color: (60, 60, 70),
    },
    AssetDef {
        name: "box",
        width: 50,
        height: 50,
        art: &["┌─┬─┐", "└─┴─┘"],
        color: (170, 120, 60),
    },
    AssetDef {
        name: "cloud1",
        width: 160,
        height: 70,
        art: &["   .-~~~-.    ", " .(       ).  ", "(___________) "],
        color: (250, 250, 255),
    },
    AssetDef {
        name: "cloud2",
        width: 200,
        height: 80,
        art: &[
            "      .--~~--.      ",
            "  .-(          )-.  ",
            " (                ) ",
            "  `--~~------~~--`  ",
        ],
        color: (240, 244, 255),
    },
];

/// Assets compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinAssets;

impl AssetProvider for BuiltinAssets {
    fn resolve(&self, name: &str) -> Result<Sprite> {
        CATALOG
            .iter()
            .find(|def| def.name == name)
            .map(|def| Sprite {
                name: def.name.to_string(),
                width: def.width,
                height: def.height,
                art: def.art,
                color: def.color,
            })
            .ok_or_else(|| GameError::MissingAsset {
                name: name.to_string(),
            })
    }
}

/// Resolve every name up front so a missing image fails at startup.
pub fn resolve_all(assets: &dyn AssetProvider, names: &[String]) -> Result<Vec<Sprite>> {
    names.iter().map(|name| assets.resolve(name)).collect()
}
