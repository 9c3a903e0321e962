//! Pilot Playbook CLI
//!
//! Terminal dashboard for discussing LLM pilots:
//! - Listing the reference catalog (industries, use cases, model options)
//! - Showing cost/latency estimates and readiness for one selection
//!
//! All numbers are illustrative.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pilot_playbook_domain::Catalog;
use pilot_playbook_engine::{build_dashboard, Dashboard, LoadBounds, ScenarioLoad};
use tracing_subscriber::EnvFilter;

mod render;

const LOG_ENV: &str = "PILOT_PLAYBOOK_LOG";

#[derive(Parser)]
#[command(name = "pilot-playbook")]
#[command(
    author,
    version,
    about = "LLM Pilot Playbook: illustrative pilot estimates by industry and use case"
)]
struct Cli {
    /// Log filter (overrides PILOT_PLAYBOOK_LOG), e.g. `debug` or `pilot_playbook_engine=debug`
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List industries, use cases, and model options.
    List,

    /// Show estimates and readiness for one industry + use case.
    Show {
        /// Industry id (see `list`)
        #[arg(long)]
        industry: String,
        /// Use case id (see `list`)
        #[arg(long)]
        use_case: String,
        /// Requests per day [default: 1000]
        #[arg(long)]
        requests_per_day: Option<u64>,
        /// Pilot duration in days [default: 30]
        #[arg(long)]
        days: Option<u64>,
        /// Reject loads outside the supported pilot ranges
        #[arg(long)]
        strict: bool,
        /// Only compare these model options (repeatable; see `list`)
        #[arg(long = "model", value_name = "ID")]
        models: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let catalog = Catalog::builtin();
    match cli.command {
        Commands::List => {
            print!("{}", render::render_catalog(&catalog)?);
        }
        Commands::Show {
            industry,
            use_case,
            requests_per_day,
            days,
            strict,
            models,
            format,
        } => {
            let bounds = LoadBounds::default();
            let load = resolve_load(&bounds, requests_per_day, days, strict)?;
            let mut dashboard = build_dashboard(&catalog, &industry, &use_case, load)
                .map_err(|e| anyhow!("{e} (run `pilot-playbook list` for valid ids)"))?;
            select_models(&catalog, &mut dashboard, &models)?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dashboard)?),
                OutputFormat::Text => print!("{}", render::render_dashboard(&dashboard)?),
            }
        }
    }
    Ok(())
}

fn resolve_load(
    bounds: &LoadBounds,
    requests_per_day: Option<u64>,
    days: Option<u64>,
    strict: bool,
) -> Result<ScenarioLoad> {
    let defaults = bounds.default_load();
    let requests_per_day = requests_per_day.unwrap_or(defaults.requests_per_day);
    let days = days.unwrap_or(defaults.days);

    if !strict {
        return Ok(ScenarioLoad::new(requests_per_day, days));
    }
    let load = ScenarioLoad::try_new(requests_per_day, days)?;
    bounds.validate(&load)?;
    Ok(load)
}

/// Keep only the estimates for the requested model ids, in catalog order.
/// An empty selection keeps every model.
fn select_models(catalog: &Catalog, dashboard: &mut Dashboard, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let selected = ids
        .iter()
        .map(|id| catalog.require_model_option(id).map(|model| model.id))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow!("{e} (run `pilot-playbook list` for valid ids)"))?;

    dashboard
        .estimates
        .retain(|estimate| selected.contains(&estimate.model.id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_load_defaults() {
        let load = resolve_load(&LoadBounds::default(), None, None, true).unwrap();
        assert_eq!(load, ScenarioLoad::new(1000, 30));
    }

    #[test]
    fn test_resolve_load_lenient_accepts_zero() {
        let load = resolve_load(&LoadBounds::default(), Some(0), Some(3), false).unwrap();
        assert_eq!(load.total_requests(), 0);
    }

    #[test]
    fn test_resolve_load_strict_rejects() {
        let err = resolve_load(&LoadBounds::default(), Some(0), None, true).unwrap_err();
        assert_eq!(err.to_string(), "requests per day must be positive");

        let err = resolve_load(&LoadBounds::default(), Some(50_000), None, true).unwrap_err();
        assert!(err.to_string().contains("outside 100..=10000"));
    }

    fn banking_dashboard() -> Dashboard {
        build_dashboard(
            &Catalog::builtin(),
            "banking",
            "call_summarization",
            ScenarioLoad::new(100, 1),
        )
        .unwrap()
    }

    #[test]
    fn test_select_models_filters_estimates() {
        let catalog = Catalog::builtin();
        let mut dashboard = banking_dashboard();
        let ids = vec!["managed_premium".to_string(), "oss_small".to_string()];
        select_models(&catalog, &mut dashboard, &ids).unwrap();

        let kept: Vec<_> = dashboard.estimates.iter().map(|e| e.model.id).collect();
        assert_eq!(kept, vec!["oss_small", "managed_premium"]);
    }

    #[test]
    fn test_select_models_empty_keeps_all() {
        let catalog = Catalog::builtin();
        let mut dashboard = banking_dashboard();
        select_models(&catalog, &mut dashboard, &[]).unwrap();
        assert_eq!(dashboard.estimates.len(), catalog.model_options().len());
    }

    #[test]
    fn test_select_models_unknown_id_is_error() {
        let mut dashboard = banking_dashboard();
        let err = select_models(&Catalog::builtin(), &mut dashboard, &["gpt-x".to_string()])
            .unwrap_err();
        assert!(err.to_string().starts_with("unknown model option `gpt-x`"));
        assert_eq!(dashboard.estimates.len(), 3);
    }

    #[test]
    fn test_cli_parses_show() {
        let cli = Cli::try_parse_from([
            "pilot-playbook",
            "show",
            "--industry",
            "telco",
            "--use-case",
            "faq_qa",
            "--days",
            "14",
            "--format",
            "json",
            "--model",
            "oss_small",
            "--model",
            "managed_premium",
        ])
        .unwrap();
        match cli.command {
            Commands::Show {
                industry,
                days,
                models,
                format,
                ..
            } => {
                assert_eq!(industry, "telco");
                assert_eq!(days, Some(14));
                assert_eq!(models, vec!["oss_small", "managed_premium"]);
                assert_eq!(format, OutputFormat::Json);
            }
            Commands::List => panic!("expected show"),
        }
    }
}
