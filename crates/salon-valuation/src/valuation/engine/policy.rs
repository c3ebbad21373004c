use serde::{Deserialize, Serialize};

/// Numeric dials of the valuation model. `Default` is the production rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationPolicy {
    /// SDE multiple for a neutral service business before adjustments.
    pub base_multiple: f64,
    pub multiple_floor: f64,
    pub multiple_ceiling: f64,
    pub valuation_floor: f64,
    pub valuation_ceiling: f64,
    /// Equipment value assumed per station when no asset value is given.
    pub station_value: f64,
    pub high_confidence_threshold: u8,
    pub narrow_range_percent: f64,
    pub wide_range_percent: f64,
}

impl Default for ValuationPolicy {
    fn default() -> Self {
        Self {
            base_multiple: 2.2,
            multiple_floor: 1.2,
            multiple_ceiling: 3.5,
            valuation_floor: 10_000.0,
            valuation_ceiling: 2_000_000.0,
            station_value: 12_000.0,
            high_confidence_threshold: 75,
            narrow_range_percent: 0.10,
            wide_range_percent: 0.15,
        }
    }
}

impl ValuationPolicy {
    pub fn range_percent(&self, confidence_score: u8) -> f64 {
        if confidence_score >= self.high_confidence_threshold {
            self.narrow_range_percent
        } else {
            self.wide_range_percent
        }
    }
}
