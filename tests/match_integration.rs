//! Match integration tests: the plugin running inside the ECS host.

use bevy_ecs::prelude::*;

use deleteweapons::components::cleanuptimer::CleanupTimer;
use deleteweapons::components::weapon::OwnedBy;
use deleteweapons::game;
use deleteweapons::matchsim::MatchSim;
use deleteweapons::resources::sweepconfig::SweepConfig;
use deleteweapons::resources::worldtime::WorldTime;
use deleteweapons::scenario::{Action, Scenario, TimedAction};
use deleteweapons::sweeper::CleanupTask;
use deleteweapons::systems::cleanuptimer::update_cleanup_timers;
use deleteweapons::systems::time::update_world_time;

/// 64 ticks per second: the 0.25s delay is exactly 16 ticks.
const TICKS_PER_DELAY: usize = 16;

fn make_sim() -> MatchSim {
    MatchSim::new(&SweepConfig::new())
}

fn ticks(sim: &mut MatchSim, n: usize) {
    for _ in 0..n {
        sim.tick();
    }
}

#[test]
fn round_start_and_two_spawns_run_one_sweep() {
    let mut sim = make_sim();
    let world = sim.world_mut();
    let ak = game::spawn_weapon(world, "weapon_ak47", None);
    let awp = game::spawn_weapon(world, "weapon_awp", None);
    let c4 = game::spawn_weapon(world, "weapon_c4", None);

    sim.apply(&Action::RoundStart).unwrap();
    ticks(&mut sim, 4);
    sim.apply(&Action::SpawnPlayer {
        player: "alice".to_string(),
        loadout: vec!["weapon_knife".to_string()],
    })
    .unwrap();
    ticks(&mut sim, 4);
    sim.apply(&Action::SpawnPlayer {
        player: "bob".to_string(),
        loadout: vec![],
    })
    .unwrap();
    assert!(sim.sweep_pending());

    ticks(&mut sim, TICKS_PER_DELAY);

    let stats = sim.stats();
    assert_eq!(stats.sweeps, 1);
    assert_eq!(stats.global_requested, 3);
    assert_eq!(stats.global_debounced, 2);
    assert!(!sim.sweep_pending());

    let world = sim.world();
    assert!(world.get_entity(ak).is_err());
    assert!(world.get_entity(awp).is_err());
    assert!(world.get_entity(c4).is_ok());
    assert!(sim.weapon_exists("alice/weapon_knife"));
    assert_eq!(sim.ground_weapons(), vec!["weapon_c4".to_string()]);
}

#[test]
fn sweep_fires_after_delay_not_before() {
    let mut sim = make_sim();
    let deagle = game::spawn_weapon(sim.world_mut(), "weapon_deagle", None);
    // Removed by its own single check
    ticks(&mut sim, TICKS_PER_DELAY);
    assert!(sim.world().get_entity(deagle).is_err());

    let glock = game::spawn_weapon(sim.world_mut(), "weapon_glock", None);
    // Cancel the glock's single check so only the sweep can remove it
    let timers: Vec<Entity> = sim
        .world_mut()
        .query_filtered::<Entity, With<CleanupTimer>>()
        .iter(sim.world())
        .collect();
    for timer in timers {
        sim.world_mut().despawn(timer);
    }

    sim.apply(&Action::RoundStart).unwrap();
    ticks(&mut sim, TICKS_PER_DELAY - 1);
    assert!(sim.world().get_entity(glock).is_ok());
    assert!(sim.sweep_pending());

    sim.tick();
    assert!(sim.world().get_entity(glock).is_err());
    assert_eq!(sim.stats().sweeps, 1);
}

#[test]
fn spawned_weapon_picked_up_within_delay_survives() {
    let mut sim = make_sim();
    sim.apply(&Action::SpawnPlayer {
        player: "alice".to_string(),
        loadout: vec![],
    })
    .unwrap();
    // Let the spawn sweep pass
    ticks(&mut sim, TICKS_PER_DELAY);

    sim.apply(&Action::SpawnWeapon {
        id: "ak".to_string(),
        weapon: "weapon_ak47".to_string(),
        owner: None,
    })
    .unwrap();
    ticks(&mut sim, 6);
    sim.apply(&Action::PickUp {
        player: "alice".to_string(),
        weapon: "ak".to_string(),
    })
    .unwrap();
    ticks(&mut sim, TICKS_PER_DELAY);

    assert!(sim.weapon_exists("ak"));
    assert_eq!(sim.stats().single_checks, 1);
    assert_eq!(sim.stats().removed, 0);
}

#[test]
fn spawned_weapon_left_on_ground_is_removed() {
    let mut sim = make_sim();
    sim.apply(&Action::SpawnWeapon {
        id: "nova".to_string(),
        weapon: "weapon_nova".to_string(),
        owner: None,
    })
    .unwrap();
    ticks(&mut sim, TICKS_PER_DELAY);

    assert!(!sim.weapon_exists("nova"));
    assert_eq!(sim.stats().single_checks, 1);
    assert_eq!(sim.stats().removed, 1);
    assert_eq!(sim.pending_timers(), 0);
}

#[test]
fn held_and_objective_weapons_survive_sweeps() {
    let mut sim = make_sim();
    sim.apply(&Action::SpawnPlayer {
        player: "alice".to_string(),
        loadout: vec!["weapon_knife".to_string(), "weapon_usp_silencer".to_string()],
    })
    .unwrap();
    sim.apply(&Action::SpawnWeapon {
        id: "bomb".to_string(),
        weapon: "Weapon_C4".to_string(),
        owner: Some("alice".to_string()),
    })
    .unwrap();
    sim.apply(&Action::Drop {
        weapon: "bomb".to_string(),
    })
    .unwrap();
    sim.apply(&Action::RoundStart).unwrap();
    ticks(&mut sim, TICKS_PER_DELAY * 2);

    assert!(sim.weapon_exists("alice/weapon_knife"));
    assert!(sim.weapon_exists("alice/weapon_usp_silencer"));
    assert!(sim.weapon_exists("bomb"));
    assert_eq!(sim.stats().removed, 0);
}

#[test]
fn disconnected_players_weapons_are_swept() {
    let mut sim = make_sim();
    sim.apply(&Action::SpawnPlayer {
        player: "alice".to_string(),
        loadout: vec!["weapon_m4a1".to_string()],
    })
    .unwrap();
    ticks(&mut sim, TICKS_PER_DELAY);
    sim.apply(&Action::Disconnect {
        player: "alice".to_string(),
    })
    .unwrap();

    sim.apply(&Action::RoundStart).unwrap();
    ticks(&mut sim, TICKS_PER_DELAY);

    assert!(!sim.weapon_exists("alice/weapon_m4a1"));
    assert!(sim.player("alice").is_none());
}

#[test]
fn trigger_after_sweep_queues_a_new_one() {
    let mut sim = make_sim();
    sim.apply(&Action::RoundStart).unwrap();
    ticks(&mut sim, TICKS_PER_DELAY);
    assert_eq!(sim.stats().sweeps, 1);

    sim.apply(&Action::RoundStart).unwrap();
    assert!(sim.sweep_pending());
    ticks(&mut sim, TICKS_PER_DELAY);
    assert_eq!(sim.stats().sweeps, 2);
    assert_eq!(sim.stats().global_debounced, 0);
}

#[test]
fn unknown_names_are_errors() {
    let mut sim = make_sim();
    assert!(
        sim.apply(&Action::Drop {
            weapon: "ghost".to_string()
        })
        .is_err()
    );
    assert!(
        sim.apply(&Action::SpawnWeapon {
            id: "x".to_string(),
            weapon: "weapon_ak47".to_string(),
            owner: Some("nobody".to_string()),
        })
        .is_err()
    );
}

#[test]
fn acting_on_removed_weapon_is_not_an_error() {
    let mut sim = make_sim();
    sim.apply(&Action::SpawnPlayer {
        player: "alice".to_string(),
        loadout: vec![],
    })
    .unwrap();
    sim.apply(&Action::SpawnWeapon {
        id: "mp9".to_string(),
        weapon: "weapon_mp9".to_string(),
        owner: None,
    })
    .unwrap();
    ticks(&mut sim, TICKS_PER_DELAY);
    assert!(!sim.weapon_exists("mp9"));

    assert!(
        sim.apply(&Action::PickUp {
            player: "alice".to_string(),
            weapon: "mp9".to_string(),
        })
        .is_ok()
    );
    assert!(
        sim.apply(&Action::Drop {
            weapon: "mp9".to_string()
        })
        .is_ok()
    );
}

#[test]
fn scripted_scenario_report() {
    let scenario = Scenario::new(
        "pistol round",
        vec![
            TimedAction::new(0.0, Action::RoundStart),
            TimedAction::new(
                0.05,
                Action::SpawnPlayer {
                    player: "alice".to_string(),
                    loadout: vec!["weapon_glock".to_string()],
                },
            ),
            TimedAction::new(
                0.5,
                Action::SpawnWeapon {
                    id: "ak".to_string(),
                    weapon: "weapon_ak47".to_string(),
                    owner: Some("alice".to_string()),
                },
            ),
            TimedAction::new(
                1.0,
                Action::Drop {
                    weapon: "ak".to_string(),
                },
            ),
            TimedAction::new(
                1.0,
                Action::Drop {
                    weapon: "alice/weapon_glock".to_string(),
                },
            ),
        ],
    );

    let mut sim = make_sim();
    let report = sim.run(&scenario).unwrap();

    // Drops mid-round wait for the next trigger
    assert_eq!(
        report.ground_weapons,
        vec!["weapon_ak47".to_string(), "weapon_glock".to_string()]
    );
    assert_eq!(report.stats.sweeps, 1);
    assert_eq!(report.stats.removed, 0);
    assert_eq!(report.pending_timers, 0);
    assert!(report.elapsed >= 2.0);

    let next = Scenario::new("round two", vec![TimedAction::new(0.0, Action::RoundStart)]);
    let report = sim.run(&next).unwrap();
    assert!(report.ground_weapons.is_empty());
    assert_eq!(report.stats.sweeps, 2);
    assert_eq!(report.stats.removed, 2);
}

#[test]
fn random_match_leaves_only_objectives_after_final_round_start() {
    let scenario = Scenario::random(1234, 3, 4);
    let mut sim = make_sim();
    sim.run(&scenario).unwrap();

    // A final round start sweeps every non-objective drop.
    let report = sim
        .run(&Scenario::new("final", vec![TimedAction::new(0.0, Action::RoundStart)]))
        .unwrap();
    assert!(report.ground_weapons.iter().all(|name| name == "weapon_c4"));
    assert!(report.stats.sweeps >= 3);
    assert_eq!(report.pending_timers, 0);
}

#[test]
fn cleanup_timer_system_counts_down_and_despawns() {
    let mut world = game::setup_world(&SweepConfig::new());
    let timer = world
        .spawn(CleanupTimer::new(0.5, CleanupTask::GlobalSweep))
        .id();
    let mut schedule = Schedule::default();
    schedule.add_systems(update_cleanup_timers);

    update_world_time(&mut world, 0.25);
    schedule.run(&mut world);
    let remaining = world.get::<CleanupTimer>(timer).unwrap().remaining;
    assert!((remaining - 0.25).abs() < 1e-6);

    update_world_time(&mut world, 0.25);
    schedule.run(&mut world);
    assert!(world.get_entity(timer).is_err());
    assert_eq!(world.resource::<WorldTime>().tick_count, 2);
}

#[test]
fn weapon_spawned_in_hand_is_checked_but_kept() {
    let mut world = game::setup_world(&SweepConfig::new());
    let player = game::spawn_player(&mut world, "alice");
    let weapon = game::spawn_weapon(&mut world, "weapon_famas", Some(player));
    assert_eq!(world.get::<OwnedBy>(weapon), Some(&OwnedBy(player)));

    let mut schedule = Schedule::default();
    schedule.add_systems(update_cleanup_timers);
    for _ in 0..TICKS_PER_DELAY {
        update_world_time(&mut world, 1.0 / 64.0);
        schedule.run(&mut world);
    }

    assert!(world.get_entity(weapon).is_ok());
}

#[test]
fn shipped_scenario_keeps_only_the_bomb() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/pistol_round.json");
    let scenario = Scenario::from_file(path).unwrap();
    let report = make_sim().run(&scenario).unwrap();

    assert_eq!(report.ground_weapons, vec!["weapon_c4".to_string()]);
    assert_eq!(report.stats.sweeps, 2);
    assert_eq!(report.stats.removed, 1);
}

#[test]
fn clock_keeps_advancing_late_in_a_long_match() {
    let mut sim = make_sim();
    sim.world_mut().resource_mut::<WorldTime>().elapsed = 262_144.0;

    sim.tick();
    assert!(sim.elapsed() > 262_144.0);

    let start_ticks = sim.world().resource::<WorldTime>().tick_count;
    sim.advance(1.0);
    assert_eq!(sim.world().resource::<WorldTime>().tick_count - start_ticks, 64);
    assert!(sim.elapsed() >= 262_145.0);
}

#[test]
fn disconnected_player_can_be_named_again() {
    let mut sim = make_sim();
    sim.apply(&Action::SpawnPlayer {
        player: "bob".to_string(),
        loadout: vec![],
    })
    .unwrap();
    sim.apply(&Action::SpawnWeapon {
        id: "ak".to_string(),
        weapon: "weapon_ak47".to_string(),
        owner: None,
    })
    .unwrap();
    sim.apply(&Action::Disconnect {
        player: "bob".to_string(),
    })
    .unwrap();

    // Acting as a player who left is skipped, not an error
    sim.apply(&Action::Disconnect {
        player: "bob".to_string(),
    })
    .unwrap();
    sim.apply(&Action::PickUp {
        player: "bob".to_string(),
        weapon: "ak".to_string(),
    })
    .unwrap();
    sim.apply(&Action::SpawnWeapon {
        id: "deagle".to_string(),
        weapon: "weapon_deagle".to_string(),
        owner: Some("bob".to_string()),
    })
    .unwrap();
    let deagle = sim.weapon("deagle").unwrap();
    assert!(sim.world().get::<OwnedBy>(deagle).is_none());

    // Reconnecting gives a fresh pawn
    sim.apply(&Action::SpawnPlayer {
        player: "bob".to_string(),
        loadout: vec!["weapon_knife".to_string()],
    })
    .unwrap();
    let pawn = sim.player("bob").unwrap();
    assert!(game::is_held(sim.world(), sim.weapon("bob/weapon_knife").unwrap()));

    ticks(&mut sim, TICKS_PER_DELAY);
    assert!(!sim.weapon_exists("ak"));
    assert!(!sim.weapon_exists("deagle"));
    assert_eq!(sim.player("bob"), Some(pawn));
}

#[test]
fn scenario_with_actions_after_disconnect_completes() {
    let json = r#"{
        "name": "rejoin",
        "actions": [
            { "at": 0.0, "action": "spawn_player", "player": "carol" },
            { "at": 0.5, "action": "disconnect", "player": "carol" },
            { "at": 1.0, "action": "spawn_weapon", "id": "nova", "weapon": "weapon_nova", "owner": "carol" },
            { "at": 2.0, "action": "spawn_player", "player": "carol", "loadout": ["weapon_glock"] }
        ]
    }"#;
    let scenario = Scenario::from_json(json).unwrap();
    let report = make_sim().run(&scenario).unwrap();

    assert_eq!(report.ground_weapons, Vec::<String>::new());
    assert_eq!(report.stats.removed, 1);
}
