use clap::ValueEnum;
use metrics_exporter_prometheus::PrometheusHandle;
use salon_valuation::valuation::{LeaseLength, ProfitMargin};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Command-line spelling of the margin bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum MarginArg {
    Low,
    Normal,
    High,
}

impl From<MarginArg> for ProfitMargin {
    fn from(value: MarginArg) -> Self {
        match value {
            MarginArg::Low => ProfitMargin::Low,
            MarginArg::Normal => ProfitMargin::Normal,
            MarginArg::High => ProfitMargin::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LeaseArg {
    ShortTerm,
    LongTerm,
    Owned,
}

impl From<LeaseArg> for LeaseLength {
    fn from(value: LeaseArg) -> Self {
        match value {
            LeaseArg::ShortTerm => LeaseLength::ShortTerm,
            LeaseArg::LongTerm => LeaseLength::LongTerm,
            LeaseArg::Owned => LeaseLength::Owned,
        }
    }
}
