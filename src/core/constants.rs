// Progression
pub const KILLS_REQUIRED: u32 = 10;
pub const BOSS_STAGE_INTERVAL: u32 = 10;
pub const BOSS_CHALLENGE_SECONDS: u32 = 30;
pub const BOSS_DAMAGE_FRACTION: f64 = 0.9;

// Prestige
pub const SOUL_BONUS_PER_SOUL: f64 = 0.1;
pub const SOULS_PER_STAGE_DIVISOR: u32 = 5;

// Monster curve: ceil(MONSTER_HP_BASE * MONSTER_HP_GROWTH^(level - 1))
pub const MONSTER_HP_BASE: f64 = 10.0;
pub const MONSTER_HP_GROWTH: f64 = 1.57;
pub const GOLD_DIVISOR: f64 = 15.0;

// Base combat power before heroes
pub const BASE_CLICK_DAMAGE: u64 = 1;
pub const BASE_DPS: u64 = 0;

// Skills scale off click damage plus this share of dps
pub const SKILL_DPS_SHARE: f64 = 0.5;

// Tick and timing
pub const TICK_INTERVAL_MS: u32 = 100;
pub const RESPAWN_DELAY_MS: u32 = 500;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 10;

// Offline progression
pub const OFFLINE_MIN_SECONDS: i64 = 10;
pub const OFFLINE_KILL_CEILING: u64 = 200_000;

// Save file
pub const SAVE_VERSION_MAGIC: u64 = 0x434C_4943_4B45_5204;
pub const SAVE_FILE_NAME: &str = "save.dat";
pub const LOG_FILE_NAME: &str = "clicker.log";
