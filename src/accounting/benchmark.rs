use serde::Serialize;

use super::round2;
use crate::factors::{GLOBAL_AVERAGE, INDIA_AVERAGE, INTENSITY_CEILING, PARIS_TARGET, TREE_ABSORPTION_KG};

/// Where a total sits against the reference benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintStatus {
    /// Below the India average
    ClimateChampion,
    /// Below the Paris-aligned target
    WithinParisTarget,
    /// Below the global average
    AboveIndiaAverage,
    AboveGlobalAverage,
}

impl FootprintStatus {
    pub fn for_total(total: f64) -> Self {
        if total < INDIA_AVERAGE {
            FootprintStatus::ClimateChampion
        } else if total < PARIS_TARGET {
            FootprintStatus::WithinParisTarget
        } else if total < GLOBAL_AVERAGE {
            FootprintStatus::AboveIndiaAverage
        } else {
            FootprintStatus::AboveGlobalAverage
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FootprintStatus::ClimateChampion => "Climate champion: below India's average!",
            FootprintStatus::WithinParisTarget => "Within the Paris target: well done!",
            FootprintStatus::AboveIndiaAverage => "Above India's average: room to improve!",
            FootprintStatus::AboveGlobalAverage => "Above the global average: take action now!",
        }
    }
}

/// Comparison of a footprint total with the fixed benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub status: FootprintStatus,
    /// total − benchmark; negative means below
    pub vs_india_average: f64,
    pub vs_paris_target: f64,
    pub vs_global_average: f64,
    /// 0–100, saturating at `INTENSITY_CEILING`
    pub intensity_percent: u8,
    pub trees_to_offset: u32,
}

impl BenchmarkComparison {
    pub fn for_total(total: f64) -> Self {
        let intensity = (total / INTENSITY_CEILING * 100.0).clamp(0.0, 100.0);
        let trees = (total / TREE_ABSORPTION_KG).max(0.0);

        Self {
            status: FootprintStatus::for_total(total),
            vs_india_average: round2(total - INDIA_AVERAGE),
            vs_paris_target: round2(total - PARIS_TARGET),
            vs_global_average: round2(total - GLOBAL_AVERAGE),
            intensity_percent: intensity.floor() as u8,
            trees_to_offset: trees.floor() as u32,
        }
    }
}
