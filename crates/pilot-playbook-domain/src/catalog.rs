//! Static reference catalog: industries, use cases, model options, and the
//! curated examples and baseline metrics keyed by (industry, use case).
//!
//! Tables are ordered slices; ordering is the presentation order. All numbers
//! are illustrative.

use crate::{
    ExampleIo, ExampleKey, Industry, ModelOption, Pattern, PilotScenario, ProviderType,
    QualityMetrics, UseCase,
};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Industries
// ============================================================================

pub static INDUSTRIES: &[Industry] = &[
    Industry {
        id: "banking",
        name: "Banking",
        description: "Retail and SME banking: credit, fraud, customer support, compliance.",
    },
    Industry {
        id: "telco",
        name: "Telecommunications",
        description: "Network operations, billing, churn, and customer support.",
    },
    Industry {
        id: "healthcare",
        name: "Healthcare",
        description: "Clinics, hospitals, and insurance: triage, documentation, and admin.",
    },
];

// ============================================================================
// Use Cases
// ============================================================================

pub static USE_CASES: &[UseCase] = &[
    UseCase {
        id: "call_summarization",
        name: "Call Summarization",
        pattern: Pattern::Summarization,
        description: "Turn long customer support calls into concise summaries and action items.",
    },
    UseCase {
        id: "faq_qa",
        name: "FAQ / Policy Q&A",
        pattern: Pattern::Rag,
        description: "Answer questions grounded in internal policies and FAQs.",
    },
    UseCase {
        id: "ticket_classification",
        name: "Ticket Classification",
        pattern: Pattern::Classification,
        description: "Route tickets to the right team based on intent and urgency.",
    },
];

// ============================================================================
// Model Options
// ============================================================================

pub static MODEL_OPTIONS: &[ModelOption] = &[
    ModelOption {
        id: "oss_medium",
        display_name: "Open-source LLM (Medium, self-hosted)",
        provider_type: ProviderType::OpenSource,
        est_tokens_per_request: 1200,
        est_latency_ms: 800,
        est_cost_per_1k_tokens_usd: 0.0, // infra cost, not tokens
    },
    ModelOption {
        id: "oss_small",
        display_name: "Open-source LLM (Small, self-hosted)",
        provider_type: ProviderType::OpenSource,
        est_tokens_per_request: 600,
        est_latency_ms: 350,
        est_cost_per_1k_tokens_usd: 0.0,
    },
    ModelOption {
        id: "managed_premium",
        display_name: "Managed LLM API (Premium)",
        provider_type: ProviderType::ManagedApi,
        est_tokens_per_request: 1500,
        est_latency_ms: 700,
        est_cost_per_1k_tokens_usd: 5.0,
    },
];

// ============================================================================
// Examples and Baseline Metrics
// ============================================================================

pub static EXAMPLES: &[(ExampleKey<'static>, ExampleIo)] = &[
    (
        ExampleKey {
            industry_id: "banking",
            use_case_id: "call_summarization",
        },
        ExampleIo {
            input: "Customer: I'm calling because my credit card was declined at a grocery store, \
                    even though I paid my balance yesterday...\n\n\
                    Agent: I see, let me check your account. There was a fraud hold triggered...",
            output: "Summary: Customer's credit card was declined after a fraud rule triggered. \
                     Agent verified recent payment and removed the fraud hold.\n\n\
                     Next steps: Send confirmation email, monitor for further declines in next 48 hours.",
        },
    ),
    (
        ExampleKey {
            industry_id: "telco",
            use_case_id: "faq_qa",
        },
        ExampleIo {
            input: "Question: What is the penalty if I cancel my fibre contract before 12 months?",
            output: "Answer: Based on the current policy, early termination within the first 12 months \
                     incurs a fee equal to one month of service plus any equipment balance.",
        },
    ),
    (
        ExampleKey {
            industry_id: "healthcare",
            use_case_id: "ticket_classification",
        },
        ExampleIo {
            input: "Message: I need to reschedule my appointment from tomorrow to next week, \
                    and I also want to ask if my insurance covers the lab tests.",
            output: "Intent: Scheduling + Insurance coverage\n\
                     Routing: Front-desk scheduling + Billing team\n\
                     Priority: Medium",
        },
    ),
];

pub static BASELINE_METRICS: &[(ExampleKey<'static>, QualityMetrics)] = &[
    (
        ExampleKey {
            industry_id: "banking",
            use_case_id: "call_summarization",
        },
        QualityMetrics::new(0.95, 0.10, 0.90),
    ),
    (
        ExampleKey {
            industry_id: "telco",
            use_case_id: "faq_qa",
        },
        QualityMetrics::new(0.90, 0.15, 0.88),
    ),
    (
        ExampleKey {
            industry_id: "healthcare",
            use_case_id: "ticket_classification",
        },
        QualityMetrics::new(0.92, 0.12, 0.89),
    ),
];

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown industry `{0}`")]
    UnknownIndustry(String),
    #[error("unknown use case `{0}`")]
    UnknownUseCase(String),
    #[error("unknown model option `{0}`")]
    UnknownModel(String),
    #[error("duplicate {table} id `{id}`")]
    DuplicateId { table: &'static str, id: String },
    #[error("model option `{id}` has an invalid {field}")]
    InvalidModel { id: String, field: &'static str },
}

/// Read-only view over a set of reference tables.
///
/// [`Catalog::builtin`] is the shipped data; [`Catalog::new`] lets callers
/// supply their own `'static` tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    industries: &'static [Industry],
    use_cases: &'static [UseCase],
    model_options: &'static [ModelOption],
    examples: &'static [(ExampleKey<'static>, ExampleIo)],
    baseline_metrics: &'static [(ExampleKey<'static>, QualityMetrics)],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            industries: INDUSTRIES,
            use_cases: USE_CASES,
            model_options: MODEL_OPTIONS,
            examples: EXAMPLES,
            baseline_metrics: BASELINE_METRICS,
        }
    }

    /// Build a catalog over custom tables, rejecting duplicate ids and model
    /// options with a negative or non-finite price.
    pub fn new(
        industries: &'static [Industry],
        use_cases: &'static [UseCase],
        model_options: &'static [ModelOption],
        examples: &'static [(ExampleKey<'static>, ExampleIo)],
        baseline_metrics: &'static [(ExampleKey<'static>, QualityMetrics)],
    ) -> Result<Self, CatalogError> {
        ensure_unique("industry", industries.iter().map(|i| i.id))?;
        ensure_unique("use case", use_cases.iter().map(|u| u.id))?;
        ensure_unique("model option", model_options.iter().map(|m| m.id))?;
        model_options.iter().try_for_each(ensure_valid_model)?;
        Ok(Self {
            industries,
            use_cases,
            model_options,
            examples,
            baseline_metrics,
        })
    }

    pub fn industries(&self) -> &'static [Industry] {
        self.industries
    }

    pub fn use_cases(&self) -> &'static [UseCase] {
        self.use_cases
    }

    pub fn model_options(&self) -> &'static [ModelOption] {
        self.model_options
    }

    pub fn industry(&self, id: &str) -> Option<&'static Industry> {
        self.industries.iter().find(|i| i.id == id)
    }

    pub fn use_case(&self, id: &str) -> Option<&'static UseCase> {
        self.use_cases.iter().find(|u| u.id == id)
    }

    pub fn model_option(&self, id: &str) -> Option<&'static ModelOption> {
        self.model_options.iter().find(|m| m.id == id)
    }

    /// Like [`Catalog::model_option`] but an unknown id is an error.
    pub fn require_model_option(&self, id: &str) -> Result<&'static ModelOption, CatalogError> {
        self.model_option(id)
            .ok_or_else(|| CatalogError::UnknownModel(id.to_string()))
    }

    /// Curated example text; `None` when nothing is curated for the pair.
    pub fn example(&self, key: &ExampleKey<'_>) -> Option<&'static ExampleIo> {
        let found = self
            .examples
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, io)| io);
        if found.is_none() {
            tracing::debug!(%key, "no curated example");
        }
        found
    }

    /// Baseline metrics; `None` when no baseline exists for the pair.
    pub fn baseline_metrics(&self, key: &ExampleKey<'_>) -> Option<&'static QualityMetrics> {
        let found = self
            .baseline_metrics
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, m)| m);
        if found.is_none() {
            tracing::debug!(%key, "no evaluation baseline");
        }
        found
    }

    /// Resolve a scenario. Every model option is supported, in table order.
    pub fn scenario(
        &self,
        industry_id: &str,
        use_case_id: &str,
    ) -> Result<PilotScenario, CatalogError> {
        let industry = self
            .industry(industry_id)
            .ok_or_else(|| CatalogError::UnknownIndustry(industry_id.to_string()))?;
        let use_case = self
            .use_case(use_case_id)
            .ok_or_else(|| CatalogError::UnknownUseCase(use_case_id.to_string()))?;

        Ok(PilotScenario {
            industry: *industry,
            use_case: *use_case,
            supported_models: self.model_options.to_vec(),
        })
    }
}

// Token and latency estimates are unsigned; only the price can go wrong.
fn ensure_valid_model(model: &ModelOption) -> Result<(), CatalogError> {
    let cost = model.est_cost_per_1k_tokens_usd;
    if !cost.is_finite() || cost < 0.0 {
        return Err(CatalogError::InvalidModel {
            id: model.id.to_string(),
            field: "est_cost_per_1k_tokens_usd",
        });
    }
    Ok(())
}

fn ensure_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_have_unique_ids() {
        let catalog = Catalog::new(
            INDUSTRIES,
            USE_CASES,
            MODEL_OPTIONS,
            EXAMPLES,
            BASELINE_METRICS,
        );
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_duplicate_model_id_rejected() {
        static DUPES: &[ModelOption] = &[
            ModelOption {
                id: "same",
                display_name: "A",
                provider_type: ProviderType::OpenSource,
                est_tokens_per_request: 1,
                est_latency_ms: 1,
                est_cost_per_1k_tokens_usd: 0.0,
            },
            ModelOption {
                id: "same",
                display_name: "B",
                provider_type: ProviderType::ManagedApi,
                est_tokens_per_request: 2,
                est_latency_ms: 2,
                est_cost_per_1k_tokens_usd: 1.0,
            },
        ];

        let err = Catalog::new(INDUSTRIES, USE_CASES, DUPES, &[], &[]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                table: "model option",
                id: "same".to_string(),
            }
        );
        assert_eq!(err.to_string(), "duplicate model option id `same`");
    }

    #[test]
    fn test_invalid_model_price_rejected() {
        static NEGATIVE: &[ModelOption] = &[ModelOption {
            id: "refund",
            display_name: "Pays you to use it",
            provider_type: ProviderType::ManagedApi,
            est_tokens_per_request: 1000,
            est_latency_ms: 100,
            est_cost_per_1k_tokens_usd: -5.0,
        }];
        static NAN: &[ModelOption] = &[ModelOption {
            id: "unpriced",
            display_name: "Unpriced",
            provider_type: ProviderType::ManagedApi,
            est_tokens_per_request: 1000,
            est_latency_ms: 100,
            est_cost_per_1k_tokens_usd: f64::NAN,
        }];

        let err = Catalog::new(INDUSTRIES, USE_CASES, NEGATIVE, &[], &[]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidModel {
                id: "refund".to_string(),
                field: "est_cost_per_1k_tokens_usd",
            }
        );
        assert_eq!(
            err.to_string(),
            "model option `refund` has an invalid est_cost_per_1k_tokens_usd"
        );
        assert!(matches!(
            Catalog::new(INDUSTRIES, USE_CASES, NAN, &[], &[]),
            Err(CatalogError::InvalidModel { .. })
        ));
    }

    #[test]
    fn test_table_order_is_preserved() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog.model_options().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["oss_medium", "oss_small", "managed_premium"]);

        let ids: Vec<_> = catalog.industries().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["banking", "telco", "healthcare"]);
    }

    #[test]
    fn test_unknown_model_is_error() {
        let catalog = Catalog::builtin();
        assert!(catalog.require_model_option("managed_premium").is_ok());
        assert_eq!(
            catalog.require_model_option("gpt-x").unwrap_err(),
            CatalogError::UnknownModel("gpt-x".to_string())
        );
    }
}
