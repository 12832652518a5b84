use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use air_shooter::assets::BuiltinAssets;
use air_shooter::entities::Drift;
use air_shooter::input::{InputEvent, Key};
use air_shooter::render::RecordingRenderer;
use air_shooter::settings::Band;
use air_shooter::stats::GamePhase;
use air_shooter::{AirShooter, Settings};

fn event_for(code: u8, game: &AirShooter) -> Option<InputEvent> {
    let b = game.button().rect;
    match code {
        0 => Some(InputEvent::KeyDown(Key::Up)),
        1 => Some(InputEvent::KeyUp(Key::Up)),
        2 => Some(InputEvent::KeyDown(Key::Down)),
        3 => Some(InputEvent::KeyUp(Key::Down)),
        4 | 5 => Some(InputEvent::KeyDown(Key::Fire)),
        6 => Some(InputEvent::PointerClick {
            x: b.centerx(),
            y: b.centery(),
        }),
        _ => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn lives_and_score_stay_in_bounds(seed in any::<u64>(), script in prop::collection::vec(0u8..10, 1..600)) {
        let settings = Settings::default();
        let max = settings.ship_lives;
        let points = settings.points;
        let mut game = AirShooter::new(settings, &BuiltinAssets, seed).unwrap();
        let mut out = RecordingRenderer::new();
        let start = game.button().rect;
        game.tick(&[InputEvent::PointerClick { x: start.centerx(), y: start.centery() }], &mut out);

        let mut last_score = 0;
        let mut was_active = true;
        for code in script {
            let events: Vec<InputEvent> = event_for(code, &game).into_iter().collect();
            game.tick(&events, &mut out);
            out.frames.clear();

            let stats = game.stats();
            prop_assert!(stats.ships_left <= max);
            prop_assert_eq!(stats.score % points, 0);
            if game.phase() == GamePhase::Active {
                prop_assert!(stats.ships_left > 0);
                if was_active {
                    prop_assert!(stats.score >= last_score);
                }
                prop_assert!(!game.obstacles().is_empty());
                prop_assert!(game.bullets().iter().all(|b| b.rect.left() > 0));
            } else {
                prop_assert_eq!(stats.ships_left, 0);
                prop_assert!(game.pointer_visible());
            }
            prop_assert_eq!(game.scoreboard().life_icons().len() as u32, stats.ships_left);
            last_score = stats.score;
            was_active = game.phase() == GamePhase::Active;
        }
    }

    #[test]
    fn wrap_respawn_lands_past_right_edge(
        seed in any::<u64>(),
        width in 1i32..400,
        speed in 1.0f32..20.0,
        overshoot in 0.0f32..20.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut drift = Drift::spawn(&mut rng, width, speed, 1100, Band::new(2000, 3000), Band::new(250, 450));
        // one step away from crossing -width
        drift.x = -(width as f32) + speed - overshoot - 0.5;
        prop_assert!(drift.advance(&mut rng));
        prop_assert!(drift.x >= 1100.0);
        prop_assert!((250..=450).contains(&drift.y));
    }
}
