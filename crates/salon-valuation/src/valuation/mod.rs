//! Rule-based salon valuation: location tiers, SDE multiples, and confidence scoring.

mod engine;
mod explain;
mod format;
pub mod inputs;
pub mod location;
pub mod router;

#[cfg(test)]
mod tests;

pub use engine::{
    calculate_salon_valuation, ProfitSource, ValuationBreakdown, ValuationEngine,
    ValuationPolicy, ValuationResult,
};
pub use explain::get_multiple_explanation;
pub use format::format_currency;
pub use inputs::{
    resolve_location, validate_valuation_inputs, LeaseLength, LeaseTerms, ProfitBasis,
    ProfitMargin, ProfitMode, ValidationReport, ValuationDraft, ValuationInputs,
};
#[allow(deprecated)]
pub use location::calculate_location_premium;
pub use location::{get_location_tier, LocationPremium, LocationTier, LocationTierResult};
pub use router::valuation_router;

/// Errors surfaced when a draft cannot be valued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValuationError {
    #[error("invalid valuation inputs: {}", .errors.join("; "))]
    InvalidInputs { errors: Vec<String> },
}

impl ValuationError {
    pub fn messages(&self) -> &[String] {
        match self {
            ValuationError::InvalidInputs { errors } => errors,
        }
    }
}
