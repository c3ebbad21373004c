use serde::{Deserialize, Serialize};

use super::ValuationError;

pub const MAX_MONTHLY_REVENUE: f64 = 1_000_000.0;
pub const MAX_YEARS_IN_BUSINESS: f64 = 50.0;
pub const MAX_GOOGLE_RATING: f64 = 5.0;

/// How the caller wants monthly profit derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitMode {
    Explicit,
    Estimate,
}

/// Owner-selected margin band used when profit is estimated from revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProfitMargin {
    Low,
    #[default]
    Normal,
    High,
}

impl ProfitMargin {
    pub fn margin(self) -> f64 {
        match self {
            ProfitMargin::Low => 0.18,
            ProfitMargin::Normal => 0.28,
            ProfitMargin::High => 0.38,
        }
    }
}

/// Legacy lease classification collected before years-remaining existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaseLength {
    ShortTerm,
    LongTerm,
    Owned,
}

/// Caller-supplied form data. Every field is optional so a half-filled form
/// can still be validated and reported on in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationDraft {
    pub monthly_revenue: Option<f64>,
    pub years_in_business: Option<f64>,
    pub has_loyal_client_base: Option<bool>,
    pub location: Option<String>,
    pub zip_code: Option<String>,
    pub profit_mode: Option<ProfitMode>,
    pub monthly_profit: Option<f64>,
    pub profit_margin_choice: Option<ProfitMargin>,
    pub google_rating: Option<f64>,
    pub google_review_count: Option<f64>,
    pub lease_years_remaining: Option<f64>,
    pub lease_length: Option<LeaseLength>,
    pub number_of_stations: Option<f64>,
    pub assets_value: Option<f64>,
}

/// Source of the monthly profit figure. Only the variant selected by
/// `profitMode` survives; the other draft field is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ProfitBasis {
    Explicit {
        #[serde(rename = "monthlyProfit")]
        monthly_profit: f64,
    },
    Estimate {
        margin: ProfitMargin,
    },
}

/// Lease information in priority order: numeric years remaining, then the
/// legacy enum, then nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaseTerms {
    YearsRemaining(f64),
    Legacy(LeaseLength),
    Unknown,
}

impl LeaseTerms {
    pub fn resolve(years_remaining: Option<f64>, legacy: Option<LeaseLength>) -> Self {
        match (years_remaining, legacy) {
            (Some(years), _) => LeaseTerms::YearsRemaining(years),
            (None, Some(length)) => LeaseTerms::Legacy(length),
            (None, None) => LeaseTerms::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, LeaseTerms::Unknown)
    }
}

/// Picks the location text to classify: a non-blank `location` wins, the
/// legacy `zip_code` is the fallback.
pub fn resolve_location<'a>(
    location: Option<&'a str>,
    zip_code: Option<&'a str>,
) -> Option<&'a str> {
    location
        .filter(|value| !value.trim().is_empty())
        .or_else(|| zip_code.filter(|value| !value.trim().is_empty()))
}

/// Validated business fundamentals consumed by the valuation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationInputs {
    pub monthly_revenue: f64,
    pub years_in_business: f64,
    pub has_loyal_client_base: bool,
    pub location: String,
    pub profit: ProfitBasis,
    pub google_rating: Option<f64>,
    pub google_review_count: Option<u32>,
    pub lease: LeaseTerms,
    pub number_of_stations: Option<u32>,
    pub assets_value: Option<f64>,
}

/// Outcome of validating a draft; `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks every field of the draft and reports all violations at once.
pub fn validate_valuation_inputs(draft: &ValuationDraft) -> ValidationReport {
    let mut errors = Vec::new();

    match draft.monthly_revenue {
        None => errors.push("Monthly revenue is required".to_string()),
        Some(revenue) if !revenue.is_finite() => {
            errors.push("Monthly revenue must be a number".to_string())
        }
        Some(revenue) if revenue <= 0.0 => {
            errors.push("Monthly revenue must be greater than 0".to_string())
        }
        Some(revenue) if revenue > MAX_MONTHLY_REVENUE => {
            errors.push("Monthly revenue cannot exceed $1,000,000".to_string())
        }
        Some(_) => {}
    }

    match draft.years_in_business {
        None => errors.push("Years in business is required".to_string()),
        Some(years) if !years.is_finite() => {
            errors.push("Years in business must be a number".to_string())
        }
        Some(years) if years < 0.0 => {
            errors.push("Years in business cannot be negative".to_string())
        }
        Some(years) if years > MAX_YEARS_IN_BUSINESS => {
            errors.push("Years in business cannot exceed 50".to_string())
        }
        Some(_) => {}
    }

    if draft.has_loyal_client_base.is_none() {
        errors.push("Please indicate whether you have a loyal client base".to_string());
    }

    if resolve_location(draft.location.as_deref(), draft.zip_code.as_deref()).is_none() {
        errors.push("Location is required".to_string());
    }

    match draft.profit_mode {
        None => errors.push("Please choose how profit should be determined".to_string()),
        Some(ProfitMode::Explicit) => match draft.monthly_profit {
            None => errors.push("Monthly profit is required when entering profit".to_string()),
            Some(profit) if !profit.is_finite() => {
                errors.push("Monthly profit must be a number".to_string())
            }
            Some(profit) if profit < 0.0 => {
                errors.push("Monthly profit cannot be negative".to_string())
            }
            Some(profit) => {
                if let Some(revenue) = draft.monthly_revenue.filter(|r| r.is_finite()) {
                    if profit > revenue {
                        errors.push("Monthly profit cannot exceed monthly revenue".to_string());
                    }
                }
            }
        },
        Some(ProfitMode::Estimate) => {
            if draft.profit_margin_choice.is_none() {
                errors.push("Please select a profit margin estimate".to_string());
            }
        }
    }

    if let Some(rating) = draft.google_rating {
        if !rating.is_finite() || !(0.0..=MAX_GOOGLE_RATING).contains(&rating) {
            errors.push("Google rating must be between 0 and 5".to_string());
        }
    }

    if let Some(count) = draft.google_review_count {
        if !is_whole_count(count) {
            errors.push("Google review count must be a whole number of 0 or more".to_string());
        }
    }

    if let Some(years) = draft.lease_years_remaining {
        if !years.is_finite() || years < 0.0 {
            errors.push("Lease years remaining cannot be negative".to_string());
        }
    }

    if let Some(stations) = draft.number_of_stations {
        if !is_whole_count(stations) {
            errors.push("Number of stations must be a whole number of 0 or more".to_string());
        }
    }

    if let Some(assets) = draft.assets_value {
        if !assets.is_finite() || assets < 0.0 {
            errors.push("Assets value cannot be negative".to_string());
        }
    }

    ValidationReport::from_errors(errors)
}

fn is_whole_count(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64
}

impl ValuationDraft {
    pub fn validate(&self) -> ValidationReport {
        validate_valuation_inputs(self)
    }

    /// Validates the draft and converts it into typed engine inputs.
    pub fn into_inputs(self) -> Result<ValuationInputs, ValuationError> {
        let report = validate_valuation_inputs(&self);
        if !report.valid {
            return Err(ValuationError::InvalidInputs {
                errors: report.errors,
            });
        }

        let location = resolve_location(self.location.as_deref(), self.zip_code.as_deref())
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        let profit = match self.profit_mode {
            Some(ProfitMode::Explicit) => ProfitBasis::Explicit {
                monthly_profit: self.monthly_profit.unwrap_or_default(),
            },
            _ => ProfitBasis::Estimate {
                margin: self.profit_margin_choice.unwrap_or_default(),
            },
        };

        Ok(ValuationInputs {
            monthly_revenue: self.monthly_revenue.unwrap_or_default(),
            years_in_business: self.years_in_business.unwrap_or_default(),
            has_loyal_client_base: self.has_loyal_client_base.unwrap_or_default(),
            location,
            profit,
            google_rating: self.google_rating,
            google_review_count: self.google_review_count.map(|count| count as u32),
            lease: LeaseTerms::resolve(self.lease_years_remaining, self.lease_length),
            number_of_stations: self.number_of_stations.map(|stations| stations as u32),
            assets_value: self.assets_value,
        })
    }
}

impl From<&ValuationInputs> for ValuationDraft {
    fn from(inputs: &ValuationInputs) -> Self {
        let (profit_mode, monthly_profit, profit_margin_choice) = match inputs.profit {
            ProfitBasis::Explicit { monthly_profit } => {
                (ProfitMode::Explicit, Some(monthly_profit), None)
            }
            ProfitBasis::Estimate { margin } => (ProfitMode::Estimate, None, Some(margin)),
        };
        let (lease_years_remaining, lease_length) = match inputs.lease {
            LeaseTerms::YearsRemaining(years) => (Some(years), None),
            LeaseTerms::Legacy(length) => (None, Some(length)),
            LeaseTerms::Unknown => (None, None),
        };

        Self {
            monthly_revenue: Some(inputs.monthly_revenue),
            years_in_business: Some(inputs.years_in_business),
            has_loyal_client_base: Some(inputs.has_loyal_client_base),
            location: Some(inputs.location.clone()),
            zip_code: None,
            profit_mode: Some(profit_mode),
            monthly_profit,
            profit_margin_choice,
            google_rating: inputs.google_rating,
            google_review_count: inputs.google_review_count.map(f64::from),
            lease_years_remaining,
            lease_length,
            number_of_stations: inputs.number_of_stations.map(f64::from),
            assets_value: inputs.assets_value,
        }
    }
}
