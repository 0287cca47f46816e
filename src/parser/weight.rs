// ============================================================
// Layer 5 — Weight Allocator
// ============================================================
// Converts module hours into a share of the course:
//
//   module weight = round2(hours / total_hours × 100)
//
// and splits that share evenly across the module's sub-items:
//
//   sub-item weight = round2(module weight / N)
//
// Each sub-item share is rounded on its own and the remainder
// is not redistributed, so the shares of one module can sum to
// slightly more or less than the module weight:
//
//   20.00 / 3 → 6.67 + 6.67 + 6.67 = 20.01
//
// The difference is bounded by 0.01 × (N − 1).
//
// A zero total is rejected with ExtractionError::DegenerateInput
// instead of producing NaN or Infinity.

use crate::domain::error::ExtractionError;

/// Round half-up to exactly 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of the course covered by a module of `hours` hours.
pub fn module_weight(hours: u32, total_hours: u32) -> Result<f64, ExtractionError> {
    if total_hours == 0 {
        return Err(ExtractionError::DegenerateInput);
    }
    Ok(round2(f64::from(hours) / f64::from(total_hours) * 100.0))
}

/// Weight of each of `count` sub-items sharing `module_weight`.
/// A count of zero is treated as one.
pub fn distribute(module_weight: f64, count: usize) -> f64 {
    round2(module_weight / count.max(1) as f64)
}
