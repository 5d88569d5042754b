//! Simulation constants and tuning parameters.

// --- Play area ---

/// Play-area width in pixels.
pub const PLAY_AREA_WIDTH: f32 = 1280.0;

/// Play-area height in pixels.
pub const PLAY_AREA_HEIGHT: f32 = 720.0;

/// Margin beyond the play area before bullets/pickups are culled.
pub const OFFSCREEN_MARGIN: f32 = 64.0;

// --- Clock ---

/// Lowest permitted time-scale factor.
pub const TIME_SCALE_MIN: f32 = 0.0625;

/// Highest permitted time-scale factor.
pub const TIME_SCALE_MAX: f32 = 16.0;

// --- Player ---

/// Player starting and maximum health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Player sprite extent (pixels).
pub const PLAYER_SIZE: f32 = 48.0;

/// Player sprite frame count (looping animation).
pub const PLAYER_FRAME_COUNT: u32 = 2;

/// Player sprite frame rate.
pub const PLAYER_FPS: f32 = 15.0;

/// Horizontal offset between barrels in double/triple shoot modes.
pub const SHOOT_SPREAD_X: f32 = 14.0;

// --- Bullets ---

/// Player bullet speed (pixels/second, straight up).
pub const BULLET_SPEED: f32 = 1000.0;

/// Player bullet damage per hit.
pub const BULLET_DAMAGE: i32 = 35;

/// Player bullet extent (pixels).
pub const BULLET_SIZE: (f32, f32) = (8.0, 24.0);

/// Enemy bullet speed (pixels/second).
pub const ENEMY_BULLET_SPEED: f32 = 420.0;

/// Enemy bullet damage per hit.
pub const ENEMY_BULLET_DAMAGE: i32 = 10;

/// Enemy bullet extent (pixels).
pub const ENEMY_BULLET_SIZE: (f32, f32) = (10.0, 10.0);

// --- Enemies ---

/// Baseline enemy health.
pub const ENEMY_HEALTH: i32 = 100;

/// Baseline enemy extent (pixels).
pub const ENEMY_SIZE: f32 = 40.0;

/// Score awarded per destroyed grunt.
pub const GRUNT_SCORE: u32 = 100;

/// Score awarded per destroyed gunner.
pub const GUNNER_SCORE: u32 = 250;

/// Score awarded per destroyed diver.
pub const DIVER_SCORE: u32 = 150;

// --- Pickups ---

/// Probability that a destroyed enemy drops a pickup.
pub const PICKUP_DROP_CHANCE: f64 = 0.07;

/// Pickup fall speed (pixels/second).
pub const PICKUP_FALL_SPEED: f32 = 140.0;

/// Pickup extent (pixels).
pub const PICKUP_SIZE: f32 = 24.0;

/// Health restored by a repair pickup.
pub const PICKUP_REPAIR_AMOUNT: i32 = 25;

// --- Shield ---

/// Shield starting and maximum health.
pub const SHIELD_MAX_HEALTH: i32 = 100;

/// Shield extent (pixels); larger than the player so it absorbs hits first.
pub const SHIELD_SIZE: f32 = 64.0;

// --- Meteors ---

/// Meteor fall speed (pixels/second, straight down).
pub const METEOR_FALL_SPEED: f32 = 260.0;

/// Meteor extent (pixels).
pub const METEOR_SIZE: f32 = 56.0;

// --- Explosions ---

/// Explosion sheet frame count (8x8 tiles).
pub const EXPLOSION_FRAME_COUNT: u32 = 64;

/// Explosion frame rate.
pub const EXPLOSION_FPS: f32 = 30.0;

/// Explosion extent (pixels).
pub const EXPLOSION_SIZE: f32 = 64.0;

// --- Formation sweep ---

/// Default horizontal sweep speed for enemy rows (pixels/second).
pub const SWEEP_SPEED_X: f32 = 160.0;

/// Vertical step taken when a sweeping row reverses (pixels).
pub const SWEEP_STEP_Y: f32 = 36.0;
