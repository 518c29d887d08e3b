// Whole-match scenarios driven by scripted input

use arena_duel::game::config::SpawnPoint;
use arena_duel::{
    AttackState, CombatConfig, CombatEvent, Facing, FrameInput, Match, MatchSnapshot, Outcome,
    PlayerSlot,
};

const FRAME_MS: f32 = 1000.0 / 60.0;

fn idle() -> FrameInput {
    FrameInput::idle()
}

fn attack() -> FrameInput {
    FrameInput {
        attack_just_pressed: true,
        ..FrameInput::idle()
    }
}

fn hold_right() -> FrameInput {
    FrameInput {
        right: true,
        ..FrameInput::idle()
    }
}

/// Both fighters on the ground, 60 units apart, facing each other
fn face_off(max_health: i32) -> CombatConfig {
    let mut config = CombatConfig::with_seed(1234);
    config.stats.max_health = max_health;
    config.spawns = [
        SpawnPoint::new(370.0, 365.0, Facing::Right),
        SpawnPoint::new(430.0, 365.0, Facing::Left),
    ];
    config
}

fn hits(snapshot: &MatchSnapshot) -> Vec<(PlayerSlot, i32)> {
    snapshot
        .events
        .iter()
        .filter_map(|event| match *event {
            CombatEvent::Hit {
                defender, damage, ..
            } => Some((defender, damage)),
            _ => None,
        })
        .collect()
}

#[test]
fn holding_right_saturates_speed_and_respects_bounds() {
    let mut m = Match::new(CombatConfig::default()).expect("valid config");
    let mut last_x = m.snapshot().fighter1.x;

    // 1000ms of holding right
    for _ in 0..60 {
        let snap = m.tick(FRAME_MS, &hold_right(), &idle());
        assert!(snap.fighter1.x > last_x);
        assert!(snap.fighter1.x <= 780.0);
        last_x = snap.fighter1.x;
    }
    let snap = m.snapshot();
    assert_eq!(snap.fighter1.velocity.x, 260.0);
    assert!((snap.fighter1.x - 460.0).abs() < 1.0, "x = {}", snap.fighter1.x);

    // Keep going until the wall stops us
    for _ in 0..120 {
        let snap = m.tick(FRAME_MS, &hold_right(), &idle());
        assert!(snap.fighter1.x >= last_x);
        assert!(snap.fighter1.x <= 780.0);
        last_x = snap.fighter1.x;
    }
    assert_eq!(last_x, 780.0);
}

#[test]
fn attack_phases_follow_the_trigger_clock() {
    let mut m = Match::new(CombatConfig::default()).expect("valid config");
    let mut starts = Vec::new();

    // 1ms ticks with attack pressed on every tick
    for _ in 0..800 {
        let snap = m.tick(1.0, &attack(), &idle());
        if snap
            .events
            .contains(&CombatEvent::AttackStarted { player: PlayerSlot::One })
        {
            starts.push(snap.clock_ms);
        }

        let since = snap.clock_ms - starts.last().copied().unwrap_or(0.0);
        let expected = if since < 60.0 {
            AttackState::WindUp
        } else if since < 150.0 {
            AttackState::Active
        } else if since < 180.0 {
            AttackState::Recovering
        } else {
            AttackState::Idle
        };
        assert_eq!(
            snap.fighter1.attack_state, expected,
            "at {}ms after trigger",
            since
        );
    }

    // Retriggers only once the 450ms cooldown has elapsed
    assert_eq!(starts, vec![1.0, 451.0]);
}

fn second_hit_gap(cooldown_ms: f32) -> Vec<(f64, i32)> {
    let mut config = face_off(100);
    config.spawns[1].facing = Facing::Right;
    config.timing.cooldown_ms = cooldown_ms;
    let mut m = Match::new(config).expect("valid config");

    let mut landed = Vec::new();
    for tick in 1..=800u32 {
        let pressed = tick == 1 || tick == 1 + cooldown_ms as u32;
        let input = if pressed { attack() } else { idle() };
        let snap = m.tick(1.0, &input, &idle());
        for (defender, damage) in hits(&snap) {
            assert_eq!(defender, PlayerSlot::Two);
            landed.push((snap.clock_ms, damage));
        }
    }
    landed
}

#[test]
fn hit_inside_invulnerability_window_is_ignored() {
    let landed = second_hit_gap(200.0);
    assert_eq!(landed.len(), 1, "landed: {:?}", landed);
    assert_eq!(landed[0].0, 61.0);
}

#[test]
fn hit_after_invulnerability_window_registers() {
    let landed = second_hit_gap(350.0);
    assert_eq!(landed.len(), 2, "landed: {:?}", landed);
    assert_eq!(landed[0].0, 61.0);
    assert_eq!(landed[1].0, 411.0);
}

#[test]
fn cooldown_expires_after_exactly_27_frames() {
    let mut m = Match::new(CombatConfig::default()).expect("valid config");
    let mut starts = Vec::new();

    // 26 frames is 433ms, still cooling down; 27 frames is 450ms
    for tick in 1..=40u32 {
        let input = if matches!(tick, 1 | 27 | 28) { attack() } else { idle() };
        let snap = m.tick(FRAME_MS, &input, &idle());
        if snap
            .events
            .contains(&CombatEvent::AttackStarted { player: PlayerSlot::One })
        {
            starts.push(tick);
        }
    }
    assert_eq!(starts, vec![1, 28]);
}

#[test]
fn invulnerability_ends_after_exactly_18_frames() {
    let mut config = face_off(100);
    config.spawns[1].facing = Facing::Right;
    config.timing.cooldown_ms = 250.0;
    config.timing.knockback = glam::Vec2::ZERO;
    let mut m = Match::new(config).expect("valid config");

    // Second attack is live from frame 20 to 24; the window closes at frame 23
    let mut landed = Vec::new();
    for tick in 1..=40u32 {
        let input = if matches!(tick, 1 | 16) { attack() } else { idle() };
        let snap = m.tick(FRAME_MS, &input, &idle());
        if !hits(&snap).is_empty() {
            landed.push(tick);
        }
    }
    assert_eq!(landed, vec![5, 23]);
}

#[test]
fn every_hit_deals_8_to_11_and_knocks_back_once() {
    for seed in 0..20 {
        let mut config = face_off(100);
        config.seed = seed;
        config.spawns[1].facing = Facing::Right;
        let mut m = Match::new(config).expect("valid config");

        m.tick(FRAME_MS, &attack(), &idle());
        let mut landed = 0;
        let mut health = 100;
        for _ in 0..40 {
            let snap = m.tick(FRAME_MS, &idle(), &idle());
            for (defender, damage) in hits(&snap) {
                landed += 1;
                assert_eq!(defender, PlayerSlot::Two);
                assert!((8..=11).contains(&damage), "damage {}", damage);
                assert_eq!(snap.fighter2.health, health - damage);
                assert_eq!(snap.fighter2.velocity.x, 260.0);
                assert_eq!(snap.fighter2.velocity.y, -150.0);
                assert!(snap.fighter2.flashing);
                health = snap.fighter2.health;
            }
        }
        assert_eq!(landed, 1, "seed {}", seed);
    }
}

#[test]
fn knockback_follows_attacker_facing() {
    let mut config = face_off(100);
    // Player 2 attacks player 1, who faces away
    config.spawns[0].facing = Facing::Left;
    let mut m = Match::new(config).expect("valid config");

    m.tick(FRAME_MS, &idle(), &attack());
    for _ in 0..20 {
        let snap = m.tick(FRAME_MS, &idle(), &idle());
        if !hits(&snap).is_empty() {
            assert_eq!(snap.fighter1.velocity.x, -260.0);
            assert_eq!(snap.fighter1.velocity.y, -150.0);
            return;
        }
    }
    panic!("player 2 never landed a hit");
}

#[test]
fn simultaneous_knockout_reports_player_two() {
    let mut m = Match::new(face_off(5)).expect("valid config");
    m.tick(FRAME_MS, &attack(), &attack());

    let mut snap = m.snapshot();
    for _ in 0..30 {
        snap = m.tick(FRAME_MS, &idle(), &idle());
        if snap.outcome.is_decided() {
            break;
        }
    }
    assert_eq!(snap.fighter1.health, 0);
    assert_eq!(snap.fighter2.health, 0);
    assert_eq!(snap.outcome, Outcome::Player2Wins);
}

#[test]
fn finished_match_stays_frozen() {
    let mut m = Match::new(face_off(5)).expect("valid config");
    m.tick(FRAME_MS, &attack(), &idle());
    while !m.outcome().is_decided() {
        m.tick(FRAME_MS, &idle(), &idle());
        assert!(m.tick_count() < 100);
    }
    assert_eq!(m.outcome(), Outcome::Player1Wins);

    let frozen = m.snapshot();
    for i in 0..1000 {
        let input = if i % 2 == 0 { attack() } else { hold_right() };
        let snap = m.tick(FRAME_MS, &input, &input);
        assert_eq!(snap.fighter1, frozen.fighter1);
        assert_eq!(snap.fighter2, frozen.fighter2);
        assert_eq!(snap.outcome, Outcome::Player1Wins);
        assert!(snap.events.is_empty());
    }
}

/// Deterministic input pattern exercising every action for both players
fn scripted(tick: u32, slot: PlayerSlot) -> FrameInput {
    let phase = match slot {
        PlayerSlot::One => tick,
        PlayerSlot::Two => tick + 37,
    };
    FrameInput {
        left: phase % 90 < 30,
        right: (45..80).contains(&(phase % 90)),
        jump_held: phase % 70 < 5,
        attack_just_pressed: phase % 23 == 0,
    }
}

#[test]
fn invariants_hold_through_a_brawl() {
    let mut config = CombatConfig::with_seed(99);
    config.spawns[0].position.x = 380.0;
    config.spawns[1].position.x = 420.0;
    let mut m = Match::new(config).expect("valid config");

    for tick in 0..5000 {
        let snap = m.tick(
            FRAME_MS,
            &scripted(tick, PlayerSlot::One),
            &scripted(tick, PlayerSlot::Two),
        );
        for fighter in [&snap.fighter1, &snap.fighter2] {
            assert!((0..=100).contains(&fighter.health));
            assert!(fighter.x >= 20.0 && fighter.x <= 780.0, "x = {}", fighter.x);
            assert!(fighter.y + 45.0 <= 410.0 + 1e-3, "y = {}", fighter.y);
            assert!(fighter.y >= 43.0);
        }
        if snap.outcome.is_decided() {
            break;
        }
    }
}

#[test]
fn same_seed_and_script_replay_identically() {
    let run = || {
        let mut config = CombatConfig::with_seed(5);
        config.spawns[0].position.x = 380.0;
        config.spawns[1].position.x = 420.0;
        let mut m = Match::new(config).expect("valid config");
        (0..2000)
            .map(|tick| {
                m.tick(
                    FRAME_MS,
                    &scripted(tick, PlayerSlot::One),
                    &scripted(tick, PlayerSlot::Two),
                )
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
