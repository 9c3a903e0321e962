//! Dashboard assembly: one selection in, every figure a presenter needs out.

use crate::estimators::{scenario_summary, ScenarioSummary};
use crate::evaluation::{rubric_breakdown, RubricBreakdown};
use crate::load::ScenarioLoad;
use pilot_playbook_domain::{
    Catalog, CatalogError, ExampleIo, ExampleKey, ModelOption, PilotScenario, QualityMetrics,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelEstimate {
    pub model: ModelOption,
    pub summary: ScenarioSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadinessView {
    pub metrics: QualityMetrics,
    pub rubric: RubricBreakdown,
}

impl ReadinessView {
    pub fn score(&self) -> f64 {
        self.rubric.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub scenario: PilotScenario,
    pub load: ScenarioLoad,
    /// `None` when no example is curated for the pair.
    pub example: Option<ExampleIo>,
    /// One entry per supported model, in scenario order.
    pub estimates: Vec<ModelEstimate>,
    /// `None` when no evaluation baseline exists for the pair.
    pub readiness: Option<ReadinessView>,
}

/// Resolve a selection against the catalog and compute its figures.
///
/// Unknown ids are errors; a pair without curated example or baseline is
/// not.
pub fn build_dashboard(
    catalog: &Catalog,
    industry_id: &str,
    use_case_id: &str,
    load: ScenarioLoad,
) -> Result<Dashboard, CatalogError> {
    let scenario = catalog.scenario(industry_id, use_case_id)?;
    let key = ExampleKey::new(industry_id, use_case_id);

    let example = catalog.example(&key).copied();
    let readiness = catalog.baseline_metrics(&key).map(|metrics| ReadinessView {
        metrics: *metrics,
        rubric: rubric_breakdown(metrics),
    });
    if example.is_none() && readiness.is_none() {
        tracing::warn!(%key, "no curated example or baseline for this combination");
    }

    let estimates = scenario
        .supported_models
        .iter()
        .map(|model| ModelEstimate {
            model: *model,
            summary: scenario_summary(model, &load),
        })
        .collect();

    Ok(Dashboard {
        scenario,
        load,
        example,
        estimates,
        readiness,
    })
}
