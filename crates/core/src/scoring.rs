//! Scoring module - flat per-line points
//!
//! Every cleared line is worth [`LINE_CLEAR_POINTS`], regardless of how many
//! lines clear together. Drops and moves score nothing.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows in one lock.
pub fn calculate_line_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(LINE_CLEAR_POINTS)
}
