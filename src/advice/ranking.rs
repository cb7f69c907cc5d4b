use std::cmp::Ordering;

use crate::accounting::Breakdown;
use crate::factors::Category;

/// Categories by descending subtotal; equal subtotals keep canonical order
pub fn rank_categories(breakdown: &Breakdown) -> Vec<(Category, f64)> {
    let mut ranked: Vec<(Category, f64)> = breakdown.iter().collect();
    // sort_by is stable, so ties (0.0 and -0.0 included) stay in canonical order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked
}

/// The largest contributor, or the first canonical category on a full tie
pub fn top_category(breakdown: &Breakdown) -> Category {
    rank_categories(breakdown)
        .first()
        .map(|(category, _)| *category)
        .unwrap_or(Category::Transport)
}
