//! Collision and spawn rules
//!
//! Runs after bullets and obstacles have moved for the tick:
//! 1. bullets that left the screen are dropped
//! 2. a bullet destroys every obstacle it overlaps; an obstacle absorbs one bullet
//! 3. an emptied obstacle pool is refilled with the starter set (and bullets cleared)
//! 4. the ship is tested against the remaining obstacles
//!
//! Step 4 only detects the hit; the life/phase bookkeeping belongs to the game.

use rand::RngCore;

use crate::assets::Sprite;
use crate::entities::{Bullet, Entity, Obstacle};
use crate::geometry::Rect;
use crate::settings::Settings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub bullets_expired: usize,
    pub obstacles_destroyed: usize,
    pub pool_reset: bool,
    pub ship_hit: bool,
}

pub fn spawn_starter_set(
    settings: &Settings,
    sprites: &[Sprite],
    rng: &mut dyn RngCore,
) -> Vec<Obstacle> {
    sprites
        .iter()
        .map(|sprite| Obstacle::spawn(settings, sprite.clone(), rng))
        .collect()
}

/// Drop bullets that have left the play area on either side.
pub fn remove_exited_bullets(bullets: &mut Vec<Bullet>, screen_width: i32) -> usize {
    let before = bullets.len();
    bullets.retain(|b| {
        let left = b.rect().left();
        left > 0 && left < screen_width
    });
    before - bullets.len()
}

/// Remove every overlapping bullet/obstacle pair. A bullet takes out every
/// obstacle it overlaps; an obstacle destroyed earlier in the pass absorbs
/// no further bullets. Returns the number of obstacles destroyed.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, obstacles: &mut Vec<Obstacle>) -> usize {
    let mut spent = vec![false; bullets.len()];
    let mut destroyed = vec![false; obstacles.len()];
    let mut hits = 0;

    for (bi, bullet) in bullets.iter().enumerate() {
        let rect = bullet.rect();
        for (oi, obstacle) in obstacles.iter().enumerate() {
            if !destroyed[oi] && rect.intersects(&obstacle.rect()) {
                spent[bi] = true;
                destroyed[oi] = true;
                hits += 1;
            }
        }
    }

    if hits > 0 {
        let mut i = 0;
        bullets.retain(|_| {
            i += 1;
            !spent[i - 1]
        });
        let mut i = 0;
        obstacles.retain(|_| {
            i += 1;
            !destroyed[i - 1]
        });
    }
    hits
}

pub fn ship_collides(ship: &Rect, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| ship.intersects(&o.rect()))
}

/// Steps 1 to 4 for one tick.
pub fn resolve(
    settings: &Settings,
    starter: &[Sprite],
    ship: &Rect,
    bullets: &mut Vec<Bullet>,
    obstacles: &mut Vec<Obstacle>,
    rng: &mut dyn RngCore,
) -> CollisionReport {
    let mut report = CollisionReport {
        bullets_expired: remove_exited_bullets(bullets, settings.screen_width),
        ..CollisionReport::default()
    };
    if report.bullets_expired > 0 {
        log::trace!("{} bullets left the screen", report.bullets_expired);
    }

    report.obstacles_destroyed = resolve_bullet_hits(bullets, obstacles);

    if obstacles.is_empty() {
        bullets.clear();
        *obstacles = spawn_starter_set(settings, starter, rng);
        report.pool_reset = true;
    }

    report.ship_hit = ship_collides(ship, obstacles);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{resolve_all, BuiltinAssets};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Settings, Vec<Sprite>, StdRng) {
        let settings = Settings::default();
        let sprites = resolve_all(&BuiltinAssets, &settings.starter_obstacles).unwrap();
        (settings, sprites, StdRng::seed_from_u64(11))
    }

    fn bullet_at(settings: &Settings, x: f32, y: i32) -> Bullet {
        let mut b = Bullet::new(settings, &Rect::new(0, y, 0, 0));
        b.rect.y = y;
        b.set_x(x);
        b
    }

    #[test]
    fn exited_bullets_are_dropped_on_both_edges() {
        let (settings, _, _) = setup();
        let mut bullets = vec![
            bullet_at(&settings, -1.0, 300),
            bullet_at(&settings, 0.0, 300),
            bullet_at(&settings, 500.0, 300),
            bullet_at(&settings, 1100.0, 300),
        ];
        assert_eq!(remove_exited_bullets(&mut bullets, 1100), 3);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].rect.x, 500);
    }

    #[test]
    fn one_bullet_destroys_every_obstacle_it_overlaps() {
        let (settings, sprites, mut rng) = setup();
        let mut obstacles = spawn_starter_set(&settings, &sprites, &mut rng);
        obstacles[0].place(600.0, 300);
        obstacles[1].place(600.0, 300); // stacked on the first
        let mut bullets = vec![bullet_at(&settings, 610.0, 310)];

        let hits = resolve_bullet_hits(&mut bullets, &mut obstacles);
        assert_eq!(hits, 2);
        assert!(bullets.is_empty());
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn destroyed_obstacle_absorbs_only_one_bullet() {
        let (settings, sprites, mut rng) = setup();
        let mut obstacles = spawn_starter_set(&settings, &sprites, &mut rng);
        obstacles[0].place(600.0, 300);
        let mut bullets = vec![
            bullet_at(&settings, 605.0, 305),
            bullet_at(&settings, 610.0, 310),
        ];

        assert_eq!(resolve_bullet_hits(&mut bullets, &mut obstacles), 1);
        assert_eq!(bullets.len(), 1);
        assert_eq!(obstacles.len(), 3);
    }

    #[test]
    fn two_bullets_on_two_obstacles_score_twice() {
        let (settings, sprites, mut rng) = setup();
        let mut obstacles = spawn_starter_set(&settings, &sprites, &mut rng);
        obstacles[0].place(600.0, 300);
        obstacles[2].place(800.0, 400);
        let mut bullets = vec![
            bullet_at(&settings, 605.0, 305),
            bullet_at(&settings, 805.0, 405),
            bullet_at(&settings, 300.0, 100),
        ];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut obstacles), 2);
        assert_eq!(bullets.len(), 1);
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn exited_bullet_never_scores() {
        let (settings, sprites, mut rng) = setup();
        let mut obstacles = spawn_starter_set(&settings, &sprites, &mut rng);
        obstacles[0].place(-10.0, 300);
        let mut bullets = vec![bullet_at(&settings, -1.0, 305)];
        assert!(bullets[0].rect.intersects(&obstacles[0].rect));

        let ship = Rect::new(0, 0, 1, 1);
        let report = resolve(&settings, &sprites, &ship, &mut bullets, &mut obstacles, &mut rng);
        assert_eq!(report.bullets_expired, 1);
        assert_eq!(report.obstacles_destroyed, 0);
        assert_eq!(obstacles.len(), 4);
    }

    #[test]
    fn last_obstacle_destroyed_refills_pool_and_clears_bullets() {
        let (settings, sprites, mut rng) = setup();
        let mut obstacles = spawn_starter_set(&settings, &sprites, &mut rng);
        obstacles.truncate(1);
        obstacles[0].place(600.0, 300);
        let mut bullets = vec![
            bullet_at(&settings, 605.0, 305),
            bullet_at(&settings, 200.0, 100),
        ];
        let ship = Rect::new(0, 0, 1, 1);
        let report = resolve(&settings, &sprites, &ship, &mut bullets, &mut obstacles, &mut rng);
        assert_eq!(report.obstacles_destroyed, 1);
        assert!(report.pool_reset);
        assert!(bullets.is_empty());
        assert_eq!(obstacles.len(), 4);
        assert!(obstacles.iter().all(|o| o.rect.x >= settings.screen_width));
        assert!(!report.ship_hit);
    }

    #[test]
    fn ship_hit_is_detected_after_scoring() {
        let (settings, sprites, mut rng) = setup();
        let mut obstacles = spawn_starter_set(&settings, &sprites, &mut rng);
        obstacles[0].place(600.0, 300);
        obstacles[3].place(250.0, 290);
        let mut bullets = vec![bullet_at(&settings, 605.0, 305)];
        let ship = Rect::new(235, 277, 80, 46);
        let report = resolve(&settings, &sprites, &ship, &mut bullets, &mut obstacles, &mut rng);
        assert_eq!(report.obstacles_destroyed, 1);
        assert!(report.ship_hit);
    }
}
