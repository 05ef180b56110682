//! Side-by-side avalanche/snowball comparison models.

use serde::{Deserialize, Serialize};

use crate::{common::Money, options::PayoffMethod, schedule::PayoffOutcome};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategySummary {
    pub method: PayoffMethod,
    pub total_interest: Money,
    pub total_months: u32,
    pub outcome: PayoffOutcome,
}

/// Snowball figures minus avalanche figures; negative when snowball wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonSavings {
    pub interest: Money,
    pub months: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonResult {
    pub avalanche: StrategySummary,
    pub snowball: StrategySummary,
    pub recommendation: PayoffMethod,
    pub savings: ComparisonSavings,
}
