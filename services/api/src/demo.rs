use crate::infra::{LeaseArg, MarginArg};
use clap::Args;
use salon_valuation::config::AppConfig;
use salon_valuation::error::AppError;
use salon_valuation::valuation::router::AppraisalResponse;
use salon_valuation::valuation::{
    get_location_tier, ProfitMargin, ProfitMode, ValuationDraft, ValuationEngine,
};

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// Average monthly revenue in dollars
    #[arg(long)]
    pub(crate) monthly_revenue: f64,
    /// Years the salon has been operating
    #[arg(long)]
    pub(crate) years_in_business: f64,
    /// ZIP code or city name
    #[arg(long)]
    pub(crate) location: String,
    /// The salon has a loyal, recurring client base
    #[arg(long)]
    pub(crate) loyal_clients: bool,
    /// Actual monthly profit; when omitted profit is estimated from revenue
    #[arg(long, conflicts_with = "margin")]
    pub(crate) monthly_profit: Option<f64>,
    /// Margin band used to estimate profit (defaults to normal)
    #[arg(long, value_enum)]
    pub(crate) margin: Option<MarginArg>,
    /// Google rating between 0 and 5
    #[arg(long)]
    pub(crate) google_rating: Option<f64>,
    /// Number of Google reviews
    #[arg(long)]
    pub(crate) google_review_count: Option<u32>,
    /// Years left on the lease; wins over --lease-length
    #[arg(long)]
    pub(crate) lease_years_remaining: Option<f64>,
    /// Lease classification for salons without a years-remaining figure
    #[arg(long, value_enum)]
    pub(crate) lease_length: Option<LeaseArg>,
    /// Number of styling stations, used to estimate equipment value
    #[arg(long)]
    pub(crate) stations: Option<u32>,
    /// Appraised value of equipment and fixtures
    #[arg(long)]
    pub(crate) assets_value: Option<f64>,
    /// Print the full result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl AppraiseArgs {
    pub(crate) fn into_draft(self) -> ValuationDraft {
        let profit_mode = if self.monthly_profit.is_some() {
            ProfitMode::Explicit
        } else {
            ProfitMode::Estimate
        };

        ValuationDraft {
            monthly_revenue: Some(self.monthly_revenue),
            years_in_business: Some(self.years_in_business),
            has_loyal_client_base: Some(self.loyal_clients),
            location: Some(self.location),
            zip_code: None,
            profit_mode: Some(profit_mode),
            monthly_profit: self.monthly_profit,
            profit_margin_choice: Some(self.margin.map(ProfitMargin::from).unwrap_or_default()),
            google_rating: self.google_rating,
            google_review_count: self.google_review_count.map(f64::from),
            lease_years_remaining: self.lease_years_remaining,
            lease_length: self.lease_length.map(Into::into),
            number_of_stations: self.stations.map(f64::from),
            assets_value: self.assets_value,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct LocateArgs {
    /// ZIP code or city name, e.g. "90210" or "Austin, TX"
    pub(crate) query: String,
}

pub(crate) fn run_appraisal(args: AppraiseArgs) -> Result<(), AppError> {
    let as_json = args.json;
    let config = AppConfig::load()?;
    let engine = ValuationEngine::new(config.valuation);

    let response = AppraisalResponse::from(engine.appraise(args.into_draft())?);
    if as_json {
        let rendered =
            serde_json::to_string_pretty(&response).map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    } else {
        render_appraisal(&response);
    }

    Ok(())
}

pub(crate) fn run_locate(args: LocateArgs) {
    let location = get_location_tier(&args.query);
    println!(
        "{} -> {} (tier {}, {}), multiple adjustment {:+.1}x",
        args.query.trim(),
        location.area_name,
        location.tier.number(),
        location.tier.label(),
        location.multiplier_adjustment
    );
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let draft = ValuationDraft {
        monthly_revenue: Some(10_000.0),
        years_in_business: Some(8.0),
        has_loyal_client_base: Some(true),
        location: Some("10001".to_string()),
        profit_mode: Some(ProfitMode::Estimate),
        profit_margin_choice: Some(ProfitMargin::Normal),
        ..ValuationDraft::default()
    };

    println!("Salon valuation demo: Manhattan salon, 8 years, normal margins");
    let result = ValuationEngine::default().appraise(draft)?;
    render_appraisal(&AppraisalResponse::from(result));
    Ok(())
}

fn render_appraisal(response: &AppraisalResponse) {
    let result = &response.result;
    let breakdown = &result.breakdown;

    println!(
        "\nEstimated value: {} (range {} - {})",
        response.formatted.base, response.formatted.low, response.formatted.high
    );
    println!(
        "Confidence: {}/100 (+/- {:.0}%)",
        result.confidence_score,
        result.range_percent * 100.0
    );
    println!(
        "Market: {} (tier {})",
        breakdown.area_name,
        breakdown.location_tier.number()
    );
    println!("Annual SDE: ${:.0}", breakdown.annual_sde);

    println!("\nHow the multiple was reached");
    for line in &response.explanation {
        println!("- {line}");
    }

    if breakdown.assets_added > 0.0 {
        println!("\nAssets added: ${:.0}", breakdown.assets_added);
    }
    if breakdown.valuation_clamped {
        println!("Note: value was held within the $10,000 - $2,000,000 sanity range");
    }
}
