use thiserror::Error;

/// Why an engine action was refused. State is unchanged whenever one is returned.
///
/// The display text is meant to be shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no hero at slot {0}")]
    UnknownHero(usize),
    #[error("not enough gold: need {cost}, have {gold}")]
    InsufficientGold { cost: u64, gold: u64 },
    #[error("no boss is waiting at this stage")]
    BossNotWaiting,
    #[error("reach stage {min_stage} before prestiging")]
    NoPendingSouls { min_stage: u32 },
    #[error("unknown skill `{0}`")]
    UnknownSkill(String),
    #[error("unlocks at stage {unlock_level}")]
    SkillLocked { unlock_level: u32 },
    #[error("still cooling down ({remaining_ms} ms)")]
    SkillOnCooldown { remaining_ms: u32 },
    #[error("unknown artifact `{0}`")]
    UnknownArtifact(String),
}
