//! Threshold-triggered advice.
//!
//! The thresholds are configuration; they carry no calibration beyond the
//! values shipped as defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::ranking::rank_categories;
use crate::accounting::Breakdown;
use crate::factors::{Category, GLOBAL_AVERAGE};

pub const FALLBACK_ADVICE: &str = "🎉 You're doing great! Keep maintaining your green lifestyle.";

/// kg CO₂e/year a subtotal (or the total) must exceed before advice fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceThresholds {
    pub transport_carpool: f64,
    pub transport_active_travel: f64,
    pub transport_flights: f64,
    pub energy_led: f64,
    pub energy_solar: f64,
    pub energy_cooling: f64,
    pub food_meal_swap: f64,
    pub food_plant_based: f64,
    pub water_showers: f64,
    pub waste_recycling: f64,
    pub shopping_fast_fashion: f64,
    pub shopping_consolidate_orders: f64,
    pub total_tree_planting: f64,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            transport_carpool: 1000.0,
            transport_active_travel: 500.0,
            transport_flights: 2000.0,
            energy_led: 800.0,
            energy_solar: 1000.0,
            energy_cooling: 600.0,
            food_meal_swap: 500.0,
            food_plant_based: 800.0,
            water_showers: 100.0,
            waste_recycling: 50.0,
            shopping_fast_fashion: 200.0,
            shopping_consolidate_orders: 300.0,
            total_tree_planting: GLOBAL_AVERAGE,
        }
    }
}

impl AdviceThresholds {
    /// Load thresholds from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read advice thresholds from {}", path.display()))?;
        let thresholds: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid advice thresholds in {}", path.display()))?;

        if let Some((_, _, advice)) = thresholds
            .category_rules()
            .into_iter()
            .find(|(_, limit, _)| !limit.is_finite())
        {
            anyhow::bail!("Threshold for \"{}\" is not a finite number", advice);
        }
        if !thresholds.total_tree_planting.is_finite() {
            anyhow::bail!("Tree planting threshold is not a finite number");
        }

        info!("Loaded advice thresholds from {}", path.display());
        Ok(thresholds)
    }

    /// (category, threshold, advice) in declaration order
    fn category_rules(&self) -> [(Category, f64, &'static str); 12] {
        [
            (
                Category::Transport,
                self.transport_carpool,
                "🚌 Switch to public transport or carpool: could save 500+ kg CO₂/year",
            ),
            (
                Category::Transport,
                self.transport_active_travel,
                "🚲 Use bicycle or walk for short trips under 3 km",
            ),
            (
                Category::Transport,
                self.transport_flights,
                "✈️ Reduce flights: consider train travel for domestic trips",
            ),
            (
                Category::Energy,
                self.energy_led,
                "💡 Switch to LED bulbs: saves 150 kg CO₂/year",
            ),
            (
                Category::Energy,
                self.energy_solar,
                "☀️ Install rooftop solar: reduces electricity emissions by 80%",
            ),
            (
                Category::Energy,
                self.energy_cooling,
                "❄️ Set AC to 24°C instead of 18°C: saves 200 kg/year",
            ),
            (
                Category::Food,
                self.food_meal_swap,
                "🥗 Replace 2 non-veg meals/week with vegetarian: saves 200 kg CO₂/year",
            ),
            (
                Category::Food,
                self.food_plant_based,
                "🌱 Try plant-based diet 3 days/week",
            ),
            (
                Category::Water,
                self.water_showers,
                "🚿 Reduce shower time by 2 minutes: saves 100 kg CO₂/year",
            ),
            (
                Category::Waste,
                self.waste_recycling,
                "♻️ Start recycling and composting: reduces waste emissions by 30%",
            ),
            (
                Category::Shopping,
                self.shopping_fast_fashion,
                "🛍️ Buy less fast fashion: each clothing item = 10 kg CO₂",
            ),
            (
                Category::Shopping,
                self.shopping_consolidate_orders,
                "📦 Consolidate online orders to once a week",
            ),
        ]
    }
}

/// Deterministic advice from fixed thresholds
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAdvisor {
    thresholds: AdviceThresholds,
}

impl RuleBasedAdvisor {
    pub fn new(thresholds: AdviceThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AdviceThresholds {
        &self.thresholds
    }

    /// Advice grouped by category in ranked order, then whole-footprint
    /// advice. Never empty.
    pub fn recommend(&self, breakdown: &Breakdown, total: f64) -> Vec<String> {
        let rules = self.thresholds.category_rules();
        let mut advice = Vec::new();

        for (category, subtotal) in rank_categories(breakdown) {
            for (_, limit, text) in rules.iter().filter(|(c, _, _)| *c == category) {
                if subtotal > *limit {
                    advice.push(text.to_string());
                }
            }
        }

        if total > self.thresholds.total_tree_planting {
            advice.push("🌳 Plant 10 trees this year to offset ~200 kg CO₂".to_string());
        }

        if advice.is_empty() {
            advice.push(FALLBACK_ADVICE.to_string());
        }

        debug!("Rule-based advisor produced {} recommendation(s)", advice.len());
        advice
    }
}
