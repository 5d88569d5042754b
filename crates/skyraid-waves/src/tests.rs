use glam::Vec2;

use skyraid_core::enums::EnemyArchetype;

use crate::{MoverPlan, StandardWaves, WaveGenerator};

fn player() -> Vec2 {
    Vec2::new(640.0, 650.0)
}

#[test]
fn test_generation_is_pure_per_index() {
    let mut gen_a = StandardWaves;
    let mut gen_b = StandardWaves;
    let wave_a = gen_a.generate(5, player());
    let wave_b = gen_b.generate(5, player());

    assert_eq!(wave_a.len(), wave_b.len());
    for (a, b) in wave_a.iter().zip(&wave_b) {
        assert_eq!(a.archetype, b.archetype);
        assert_eq!(a.spawn_pos, b.spawn_pos);
        assert_eq!(a.health, b.health);
    }
}

#[test]
fn test_wave_one_is_a_single_grunt_row() {
    let templates = StandardWaves.generate(1, player());
    assert!(!templates.is_empty());
    assert!(templates
        .iter()
        .all(|t| t.archetype == EnemyArchetype::Grunt));
    assert!(templates.iter().all(|t| t.group == Some(0)));

    // Exactly one member of the row carries the sweep mover.
    let movers = templates.iter().filter(|t| t.mover.is_some()).count();
    assert_eq!(movers, 1);
    assert!(matches!(
        templates.iter().find_map(|t| t.mover.as_ref()),
        Some(MoverPlan::Sweep { .. })
    ));
}

#[test]
fn test_gunners_appear_from_wave_two_with_shooters() {
    let templates = StandardWaves.generate(2, player());
    let gunners: Vec<_> = templates
        .iter()
        .filter(|t| t.archetype == EnemyArchetype::Gunner)
        .collect();
    assert!(!gunners.is_empty());
    assert!(gunners.iter().all(|t| t.shooter.is_some()));
    // Gunners form their own group, separate from the grunt row.
    assert!(gunners.iter().all(|t| t.group == Some(1)));
}

#[test]
fn test_divers_appear_every_third_wave_with_looping_paths() {
    let templates = StandardWaves.generate(3, player());
    let divers: Vec<_> = templates
        .iter()
        .filter(|t| t.archetype == EnemyArchetype::Diver)
        .collect();
    assert_eq!(divers.len(), 1);
    for diver in divers {
        assert!(diver.group.is_none());
        match diver.mover.as_ref() {
            Some(MoverPlan::Path { looping, .. }) => assert!(*looping),
            other => panic!("diver should have a looping path mover, got {other:?}"),
        }
    }

    // No divers outside multiples of three.
    let templates = StandardWaves.generate(4, player());
    assert!(templates
        .iter()
        .all(|t| t.archetype != EnemyArchetype::Diver));
}

#[test]
fn test_health_scales_with_wave_index() {
    let early = StandardWaves.generate(1, player());
    let late = StandardWaves.generate(8, player());
    let early_health = early[0].health;
    let late_health = late[0].health;
    assert!(late_health > early_health);
}
