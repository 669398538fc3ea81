use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use triage_core::{
    filter_by_priority, generate, limit_tasks, summarize, GeneratedTask, Priority, RuleCatalog,
    TaskSummary,
};

mod config;
mod input;

#[derive(Parser, Debug)]
#[command(
    name = "triage",
    version,
    about = "Ranked action suggestions from back-office badge counts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate ranked suggestions from a badge snapshot
    Suggest {
        /// Path to a JSON badge snapshot (array of badge counts)
        #[arg(long)]
        badges: PathBuf,

        /// Minimum priority tier to display: low, medium, high, critical
        #[arg(long)]
        min_priority: Option<String>,

        /// Limit number of tasks printed
        #[arg(long)]
        limit: Option<usize>,

        /// Emit the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in rule catalog
    Rules,

    /// Write the default config file to ~/.triage/config.toml
    Init,
}

#[derive(Debug, Serialize)]
struct SuggestReport {
    generated_at_utc: String,
    summary: TaskSummary,
    tasks: Vec<GeneratedTask>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Suggest {
            badges,
            min_priority,
            limit,
            json,
        } => suggest(badges, min_priority, limit, json)?,
        Command::Rules => print_rules()?,
        Command::Init => config::init_config()?,
    }

    Ok(())
}

fn suggest(
    path: PathBuf,
    min_priority: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    if !path.exists() {
        bail!("snapshot not found: {} (pass --badges <path>)", path.display());
    }

    let cfg = config::load_config()?;
    let min = match min_priority {
        Some(s) => parse_priority(&s)?,
        None => parse_priority(&cfg.display.min_priority)
            .context("invalid display.min_priority in config")?,
    };
    let limit = limit.unwrap_or(cfg.display.max_tasks);

    let badges = input::load_badges(&path)?;
    let catalog = RuleCatalog::builtin()?;

    let tasks = generate(&badges, &catalog);
    // Summary covers the whole generated set; filtering below is display-only.
    let summary = summarize(&tasks);
    let shown = limit_tasks(filter_by_priority(tasks, min), limit);

    if json {
        let report = SuggestReport {
            generated_at_utc: Utc::now().to_rfc3339(),
            summary,
            tasks: shown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Loaded {} badges from {}", badges.len(), path.display());
    println!("{} suggestions ({} shown)\n", summary.total, shown.len());

    for t in &shown {
        println!(
            "[{:>8}] score={:5.1} | {} | {} -> {}",
            t.priority.label(),
            t.rice.score,
            t.title,
            t.action_label,
            t.action_target
        );
    }

    println!("\nBy priority:");
    for (p, n) in summary.by_priority.iter().rev() {
        println!("  {:>8}: {}", p.label(), n);
    }
    println!("\nBy category:");
    for (c, n) in &summary.by_category {
        println!("  {:>26}: {}", c.label(), n);
    }
    println!("\nTotal score: {:.1}", summary.total_score);

    Ok(())
}

fn print_rules() -> Result<()> {
    let catalog = RuleCatalog::builtin()?;
    println!("{} rules\n", catalog.len());

    for r in catalog.rules() {
        let severity = match &r.trigger.severity {
            Some(s) => format!("{s:?}"),
            None => "any".to_string(),
        };
        println!(
            "{:<24} {:?} min={} severity={} impact={:?} confidence={:.2} effort={:.2}h",
            r.id,
            r.trigger.source,
            r.trigger.min_count,
            severity,
            r.template.impact,
            r.template.confidence,
            r.template.effort_hours
        );
    }

    Ok(())
}

fn parse_priority(s: &str) -> Result<Priority> {
    match s.to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        "critical" => Ok(Priority::Critical),
        other => bail!("unknown priority tier: {other} (expected low|medium|high|critical)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert_eq!(parse_priority("CRITICAL").unwrap(), Priority::Critical);
        assert!(parse_priority("p0").is_err());
    }
}
