//! Cost, latency, and wallclock estimators.
//!
//! cost      = (total_requests × tokens_per_request / 1000) × cost_per_1k
//! latency   = latency_ms / 1000
//! wallclock = latency × total_requests / 60   (fully serialized)
//!
//! The wallclock figure is a pessimistic upper bound: no concurrency is
//! modeled, every request waits for the previous one.

use crate::load::ScenarioLoad;
use pilot_playbook_domain::ModelOption;
use serde::Serialize;

const TOKENS_PER_PRICE_UNIT: f64 = 1000.0;
const MS_PER_SECOND: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Token-based cost in USD. Zero for models priced at 0.0 per 1k tokens.
pub fn estimate_cost_usd(model: &ModelOption, load: &ScenarioLoad) -> f64 {
    let total_tokens = load.total_requests() as f64 * f64::from(model.est_tokens_per_request);
    (total_tokens / TOKENS_PER_PRICE_UNIT) * model.est_cost_per_1k_tokens_usd
}

pub fn estimate_latency_seconds_per_request(model: &ModelOption) -> f64 {
    f64::from(model.est_latency_ms) / MS_PER_SECOND
}

/// Wallclock minutes if every request ran back to back.
pub fn estimate_total_wallclock_minutes(model: &ModelOption, load: &ScenarioLoad) -> f64 {
    let total_seconds = estimate_latency_seconds_per_request(model) * load.total_requests() as f64;
    total_seconds / SECONDS_PER_MINUTE
}

/// The figures a dashboard shows for one model under one load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub total_requests: u64,
    pub avg_latency_s: f64,
    pub total_wallclock_min: f64,
    pub est_cost_usd: f64,
}

pub fn scenario_summary(model: &ModelOption, load: &ScenarioLoad) -> ScenarioSummary {
    let summary = ScenarioSummary {
        total_requests: load.total_requests(),
        avg_latency_s: estimate_latency_seconds_per_request(model),
        total_wallclock_min: estimate_total_wallclock_minutes(model, load),
        est_cost_usd: estimate_cost_usd(model, load),
    };
    tracing::debug!(
        model = model.id,
        total_requests = summary.total_requests,
        cost_usd = summary.est_cost_usd,
        wallclock_min = summary.total_wallclock_min,
        "scenario summary"
    );
    summary
}
