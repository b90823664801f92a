//! Scoring module - line clear rewards
//!
//! Flat reward tiers per lock event. No level multipliers, no combo chains,
//! no drop bonuses: only cleared lines move the score.

use crate::types::LINE_REWARDS;

/// Reward for clearing `lines` rows in a single lock event
///
/// Counts above four (reachable only on hand-built boards) fall outside the
/// tier table and award nothing.
pub fn line_reward(lines: usize) -> u32 {
    LINE_REWARDS.get(lines).copied().unwrap_or(0)
}
