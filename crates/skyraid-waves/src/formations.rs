//! Standard wave formations, scaling with the wave index.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skyraid_core::constants::*;
use skyraid_core::enums::EnemyArchetype;
use skyraid_core::path::{Path, Segment};

use crate::{EnemyTemplate, MoverPlan, ShooterPlan, WaveGenerator};

/// Spacing between enemies in a sweeping row (pixels).
const ROW_SPACING: f32 = 56.0;

/// Vertical position of the first row (pixels from the top).
const ROW_TOP_Y: f32 = 90.0;

/// Extra health granted per wave beyond the first.
const HEALTH_PER_WAVE: i32 = 10;

/// Diver traversal time for one leg of its loop (seconds).
const DIVER_LEG_SECS: f32 = 3.2;

/// Group id for the sweeping grunt row.
const GRUNT_GROUP: u32 = 0;

/// Group id for the gunner row.
const GUNNER_GROUP: u32 = 1;

/// The default generator: sweeping grunt rows every wave, a gunner row
/// from wave 2, and looping bezier divers every third wave.
#[derive(Debug, Default)]
pub struct StandardWaves;

impl WaveGenerator for StandardWaves {
    fn generate(&mut self, wave_index: u32, player_pos: Vec2) -> Vec<EnemyTemplate> {
        // Seeded by the wave index so generation stays a pure function.
        let mut rng = ChaCha8Rng::seed_from_u64(wave_index as u64);
        let health = ENEMY_HEALTH + HEALTH_PER_WAVE * (wave_index.saturating_sub(1) as i32).min(10);

        let mut templates = Vec::new();

        let grunt_count = (4 + wave_index).min(10);
        push_row(
            &mut templates,
            GRUNT_GROUP,
            EnemyArchetype::Grunt,
            grunt_count,
            ROW_TOP_Y,
            health,
            GRUNT_SCORE,
            None,
        );

        if wave_index >= 2 {
            let gunner_count = (2 + wave_index / 2).min(8);
            let shooter = ShooterPlan {
                interval_secs: rng.gen_range(2.2..3.0),
                aimed: true,
            };
            push_row(
                &mut templates,
                GUNNER_GROUP,
                EnemyArchetype::Gunner,
                gunner_count,
                ROW_TOP_Y + ROW_SPACING,
                health + 40,
                GUNNER_SCORE,
                Some(shooter),
            );
        }

        if wave_index % 3 == 0 {
            let diver_count = (wave_index / 3).min(4);
            for _ in 0..diver_count {
                templates.push(diver_template(&mut rng, player_pos, health));
            }
        }

        templates
    }
}

/// Push one sweeping row of `count` enemies sharing a group.
#[allow(clippy::too_many_arguments)]
fn push_row(
    templates: &mut Vec<EnemyTemplate>,
    group: u32,
    archetype: EnemyArchetype,
    count: u32,
    y: f32,
    health: i32,
    score: u32,
    shooter: Option<ShooterPlan>,
) {
    let row_width = (count - 1) as f32 * ROW_SPACING;
    let left = (PLAY_AREA_WIDTH - row_width) / 2.0;

    for i in 0..count {
        let mover = if i == 0 {
            Some(MoverPlan::Sweep {
                speed_x: SWEEP_SPEED_X,
                step_y: SWEEP_STEP_Y,
            })
        } else {
            None
        };
        templates.push(EnemyTemplate {
            archetype,
            health,
            score,
            size: Vec2::splat(ENEMY_SIZE),
            spawn_pos: Vec2::new(left + i as f32 * ROW_SPACING, y),
            group: Some(group),
            mover,
            shooter,
        });
    }
}

/// A diver looping down past the player's column and back up.
fn diver_template(rng: &mut ChaCha8Rng, player_pos: Vec2, health: i32) -> EnemyTemplate {
    let start_x = rng.gen_range(ENEMY_SIZE..PLAY_AREA_WIDTH - ENEMY_SIZE);
    let start = Vec2::new(start_x, ROW_TOP_Y - 50.0);
    let dive_target = Vec2::new(player_pos.x, PLAY_AREA_HEIGHT * 0.75);
    let control = Vec2::new(
        rng.gen_range(0.0..PLAY_AREA_WIDTH),
        PLAY_AREA_HEIGHT * 0.4,
    );

    // Down along one bezier, back along its mirror; loops forever.
    let path = Path::Compound(vec![
        Segment {
            path: Path::bezier(start, control, dive_target),
            duration_secs: DIVER_LEG_SECS,
        },
        Segment {
            path: Path::bezier(dive_target, control, start),
            duration_secs: DIVER_LEG_SECS,
        },
    ]);

    EnemyTemplate {
        archetype: EnemyArchetype::Diver,
        health,
        score: DIVER_SCORE,
        size: Vec2::splat(ENEMY_SIZE),
        spawn_pos: start,
        group: None,
        mover: Some(MoverPlan::Path {
            path,
            duration_secs: DIVER_LEG_SECS * 2.0,
            looping: true,
        }),
        shooter: None,
    }
}
