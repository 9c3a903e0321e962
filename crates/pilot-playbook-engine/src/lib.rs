//! Pilot Playbook Engine: cost/latency estimates and readiness scoring
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐
//! │ ModelOption │   │ ScenarioLoad │──► LoadBounds::validate (optional)
//! └──────┬──────┘   └──────┬───────┘
//!        └────────┬────────┘
//!                 ▼
//!         ┌──────────────┐            ┌────────────────┐
//!         │  Estimators  │            │ QualityMetrics │
//!         └──────┬───────┘            └───────┬────────┘
//!                │ ScenarioSummary            ▼
//!                │                    ┌────────────────┐
//!                │                    │  Rubric score  │
//!                │                    └───────┬────────┘
//!                └────────────┬───────────────┘
//!                             ▼
//!                       ┌───────────┐
//!                       │ Dashboard │
//!                       └───────────┘
//! ```
//!
//! Every function here is pure: same inputs, same outputs, no shared state.
//! Nothing rounds internally; formatting is left to the caller.

pub mod dashboard;
pub mod estimators;
pub mod evaluation;
pub mod load;

pub use dashboard::{build_dashboard, Dashboard, ModelEstimate, ReadinessView};
pub use estimators::{
    estimate_cost_usd, estimate_latency_seconds_per_request, estimate_total_wallclock_minutes,
    scenario_summary, ScenarioSummary,
};
pub use evaluation::{normalize_score, rubric_breakdown, rubric_score, RubricBreakdown};
pub use load::{LoadBounds, LoadError, ScenarioLoad, StepRange};

pub use pilot_playbook_domain as domain;
