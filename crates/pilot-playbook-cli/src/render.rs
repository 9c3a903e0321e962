//! Text rendering for the terminal dashboard.

use anyhow::Result;
use colored::Colorize;
use pilot_playbook_domain::Catalog;
use pilot_playbook_engine::Dashboard;
use std::fmt::Write;

const RULE: &str = "───────────────────────────────────────────────────────────────";

pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    let mut out = String::new();

    writeln!(&mut out, "{}", "Industries".bold())?;
    for industry in catalog.industries() {
        writeln!(&mut out, "  {:<24} {}", industry.id.cyan(), industry.name)?;
    }

    writeln!(&mut out)?;
    writeln!(&mut out, "{}", "Use cases".bold())?;
    for use_case in catalog.use_cases() {
        writeln!(
            &mut out,
            "  {:<24} {} [{}]",
            use_case.id.cyan(),
            use_case.name,
            use_case.pattern
        )?;
    }

    writeln!(&mut out)?;
    writeln!(&mut out, "{}", "Model options".bold())?;
    for model in catalog.model_options() {
        writeln!(
            &mut out,
            "  {:<24} {} ({})",
            model.id.cyan(),
            model.display_name,
            model.provider_type
        )?;
    }
    Ok(out)
}

pub fn render_dashboard(dashboard: &Dashboard) -> Result<String> {
    let mut out = String::new();
    let scenario = &dashboard.scenario;

    writeln!(&mut out, "{}", "LLM Pilot Playbook".bold())?;
    writeln!(&mut out, "{}", "All numbers are illustrative.".dimmed())?;
    writeln!(&mut out, "{RULE}")?;
    writeln!(&mut out, "{} {}", "Industry:".bold(), scenario.industry.name)?;
    writeln!(&mut out, "  {}", scenario.industry.description)?;
    writeln!(&mut out, "{} {}", "Use case:".bold(), scenario.use_case.name)?;
    writeln!(&mut out, "  Pattern: {}", scenario.use_case.pattern)?;
    writeln!(&mut out, "  {}", scenario.use_case.description)?;
    writeln!(
        &mut out,
        "{} {} requests/day × {} days",
        "Load:".bold(),
        dashboard.load.requests_per_day,
        dashboard.load.days
    )?;

    writeln!(&mut out, "{RULE}")?;
    writeln!(&mut out, "{}", "Example Input/Output".bold())?;
    match &dashboard.example {
        Some(example) => {
            writeln!(&mut out, "Example input (truncated):")?;
            writeln!(&mut out, "{}", indent(example.input))?;
            writeln!(&mut out, "Example model output (ideal):")?;
            writeln!(&mut out, "{}", indent(example.output))?;
        }
        None => {
            writeln!(
                &mut out,
                "{}",
                "No curated example yet for this combination.".yellow()
            )?;
        }
    }

    writeln!(&mut out, "{RULE}")?;
    writeln!(&mut out, "{}", "Model Strategy Comparison".bold())?;
    for estimate in &dashboard.estimates {
        let model = &estimate.model;
        let summary = &estimate.summary;
        writeln!(&mut out, "{}", model.display_name.cyan().bold())?;
        writeln!(&mut out, "  Provider type:                   {}", model.provider_type)?;
        writeln!(
            &mut out,
            "  Avg tokens / request:            ~{}",
            model.est_tokens_per_request
        )?;
        writeln!(
            &mut out,
            "  Avg latency / request:           {:.2} s",
            summary.avg_latency_s
        )?;
        writeln!(
            &mut out,
            "  Pilot cost (USD):                ${:.2}",
            summary.est_cost_usd
        )?;
        writeln!(
            &mut out,
            "  Total wallclock (if serialized):  {:.1} min",
            summary.total_wallclock_min
        )?;
    }

    writeln!(&mut out, "{RULE}")?;
    writeln!(&mut out, "{}", "Evaluation Metrics (Illustrative)".bold())?;
    match &dashboard.readiness {
        Some(readiness) => {
            let m = &readiness.metrics;
            writeln!(&mut out, "  Groundedness:               {}", percent(m.groundedness))?;
            writeln!(
                &mut out,
                "  Hallucination risk:         {}",
                percent(m.hallucination_risk)
            )?;
            writeln!(
                &mut out,
                "  Response quality:           {}",
                percent(m.response_quality)
            )?;
            writeln!(
                &mut out,
                "  Business readiness score:   {}",
                format!("{:.0} / 100", readiness.score() * 100.0).green().bold()
            )?;
        }
        None => {
            writeln!(
                &mut out,
                "{}",
                "No evaluation baseline yet for this combination.".yellow()
            )?;
        }
    }
    Ok(out)
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
