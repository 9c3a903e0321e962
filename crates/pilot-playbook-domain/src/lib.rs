//! Pilot Playbook domain model
//!
//! Immutable value records describing an LLM pilot discussion:
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌──────────────────────────┐
//! │  Industry  │   │  UseCase   │   │  ModelOption (ordered)   │
//! └─────┬──────┘   └─────┬──────┘   └────────────┬─────────────┘
//!       │                │                       │
//!       └───────┬────────┴───────────────────────┘
//!               ▼
//!        ┌──────────────┐      ExampleKey (industry_id, use_case_id)
//!        │PilotScenario │ ───► ├── ExampleIo       (curated text)
//!        └──────────────┘      └── QualityMetrics  (baseline scores)
//! ```
//!
//! Every record is built once as `'static` configuration (see [`catalog`])
//! and never mutated afterwards. Records only carry data; the arithmetic
//! lives in `pilot-playbook-engine`.

pub mod catalog;

pub use catalog::{Catalog, CatalogError};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Reference Records
// ============================================================================

/// A vertical the pilot is pitched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Solution pattern a use case is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    #[serde(rename = "RAG")]
    Rag,
    Summarization,
    Classification,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Rag => "RAG",
            Pattern::Summarization => "Summarization",
            Pattern::Classification => "Classification",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UseCase {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: Pattern,
    pub description: &'static str,
}

/// How a model option is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// Self-hosted; cost is infrastructure, not tokens.
    OpenSource,
    /// Externally billed per token.
    ManagedApi,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::OpenSource => "open_source",
            ProviderType::ManagedApi => "managed_api",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical model choice, not tied to any vendor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelOption {
    pub id: &'static str,
    pub display_name: &'static str,
    pub provider_type: ProviderType,
    /// Rough average tokens (prompt + completion) per request.
    pub est_tokens_per_request: u32,
    /// Base latency per request.
    pub est_latency_ms: u32,
    /// Hypothetical price; 0.0 for self-hosted options.
    pub est_cost_per_1k_tokens_usd: f64,
}

/// An industry + use case combination and the models it can be piloted with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotScenario {
    pub industry: Industry,
    pub use_case: UseCase,
    pub supported_models: Vec<ModelOption>,
}

// ============================================================================
// Keyed Example Data
// ============================================================================

/// Lookup key for curated examples and baseline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExampleKey<'a> {
    pub industry_id: &'a str,
    pub use_case_id: &'a str,
}

impl<'a> ExampleKey<'a> {
    pub fn new(industry_id: &'a str, use_case_id: &'a str) -> Self {
        Self {
            industry_id,
            use_case_id,
        }
    }
}

impl fmt::Display for ExampleKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.industry_id, self.use_case_id)
    }
}

/// Curated input text and the ideal model output for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleIo {
    pub input: &'static str,
    pub output: &'static str,
}

pub const GROUNDEDNESS: &str = "groundedness";
pub const HALLUCINATION_RISK: &str = "hallucination_risk";
pub const RESPONSE_QUALITY: &str = "response_quality";

/// Baseline evaluation signals, nominally on a 0–1 scale.
///
/// Values are not range-checked. Absent fields deserialize to 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityMetrics {
    /// How well answers stay within known sources.
    pub groundedness: f64,
    /// Lower is better.
    pub hallucination_risk: f64,
    /// Clarity, tone, completeness.
    pub response_quality: f64,
}

impl QualityMetrics {
    pub const fn new(groundedness: f64, hallucination_risk: f64, response_quality: f64) -> Self {
        Self {
            groundedness,
            hallucination_risk,
            response_quality,
        }
    }

    /// Build from a loose name → value map. Missing names read as 0.0 and
    /// unrecognized names are ignored.
    pub fn from_map(metrics: &HashMap<String, f64>) -> Self {
        let get = |name: &str| metrics.get(name).copied().unwrap_or(0.0);
        Self {
            groundedness: get(GROUNDEDNESS),
            hallucination_risk: get(HALLUCINATION_RISK),
            response_quality: get(RESPONSE_QUALITY),
        }
    }

    pub fn with_hallucination_risk(self, hallucination_risk: f64) -> Self {
        Self {
            hallucination_risk,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_map_defaults_missing_metrics() {
        let mut map = HashMap::new();
        map.insert(GROUNDEDNESS.to_string(), 0.7);
        map.insert("latency".to_string(), 12.0);

        let metrics = QualityMetrics::from_map(&map);
        assert_eq!(metrics, QualityMetrics::new(0.7, 0.0, 0.0));
    }

    #[test]
    fn test_metrics_deserialize_with_absent_fields() {
        let metrics: QualityMetrics =
            serde_json::from_str(r#"{"response_quality": 0.8}"#).unwrap();
        assert_eq!(metrics.groundedness, 0.0);
        assert_eq!(metrics.hallucination_risk, 0.0);
        assert_eq!(metrics.response_quality, 0.8);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProviderType::ManagedApi).unwrap(),
            "\"managed_api\""
        );
        assert_eq!(serde_json::to_string(&Pattern::Rag).unwrap(), "\"RAG\"");
        assert_eq!(Pattern::Summarization.to_string(), "Summarization");
    }

    #[test]
    fn test_example_key_equality_across_lifetimes() {
        static STORED: ExampleKey<'static> = ExampleKey {
            industry_id: "banking",
            use_case_id: "faq_qa",
        };
        let owned = String::from("banking");
        let key = ExampleKey::new(&owned, "faq_qa");
        assert_eq!(STORED, key);
        assert_ne!(ExampleKey::new(&owned, "call_summarization"), STORED);
        assert_eq!(key.to_string(), "(banking, faq_qa)");
    }
}
