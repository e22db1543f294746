//! Implementation of the `ccux cost` command.

use crate::analysis::{DesignAnalysis, UsageRecord};
use crate::cli::CostArgs;
use crate::error::{CcuxError, Result};
use crate::project;
use crate::usage::{UsageStats, aggregate, format_cost, group_thousands};
use crate::ui;
use std::path::{Path, PathBuf};

/// Usage accounting for one project.
#[derive(Debug, Clone)]
struct ProjectCost {
    dir: PathBuf,
    name: String,
    generation: UsageStats,
    phases: Vec<(String, f64, UsageStats)>,
    history: Vec<UsageRecord>,
}

impl ProjectCost {
    fn load(dir: &Path) -> Result<Self> {
        let analysis = DesignAnalysis::load(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            name: project::display_name(dir),
            generation: analysis.total_usage(),
            phases: analysis.phase_stats(),
            history: analysis.history_usage(),
        })
    }

    fn total(&self) -> UsageStats {
        self.generation + aggregate(self.history.iter().map(|r| &r.usage))
    }
}

/// Execute the `ccux cost` command.
pub fn cmd_cost(args: CostArgs) -> Result<()> {
    let dirs = match &args.project_dir {
        Some(dir) => {
            if !project::is_project_dir(dir) {
                return Err(CcuxError::UserError(format!(
                    "'{}' is not a ccux project (needs index.html and design_analysis.json)",
                    dir.display()
                )));
            }
            vec![dir.clone()]
        }
        None => project::discover_all(Path::new("."))?,
    };

    if dirs.is_empty() {
        ui::info("No projects with usage data found in the current directory");
        return Ok(());
    }

    let reports = dirs
        .iter()
        .map(|dir| ProjectCost::load(dir))
        .collect::<Result<Vec<_>>>()?;

    println!("Usage and Cost");
    println!("==============");
    for report in &reports {
        print_project(report, args.detailed);
    }

    if reports.len() > 1 || args.summary {
        print_totals(&reports);
    }
    Ok(())
}

fn print_project(report: &ProjectCost, detailed: bool) {
    let total = report.total();
    println!();
    println!("{} ({})", report.name, report.dir.display());
    println!("  {:12} {}", "Tokens:", tokens(&total));
    println!("  {:12} {}", "Cost:", format_cost(total.effective_cost()));
    println!("  {:12} {}", "Operations:", report.history.len() + 1);

    if !detailed {
        return;
    }

    println!("  Operations:");
    println!(
        "    {:10} {:40} {}",
        "generation",
        "initial page",
        usage_line(&report.generation)
    );
    for (name, seconds, usage) in &report.phases {
        println!(
            "      {:38} {:>6.1}s  {}",
            name,
            seconds,
            usage_line(usage)
        );
    }
    for record in &report.history {
        let when = record
            .timestamp
            .as_deref()
            .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| format!(" [{}]", ts.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        println!(
            "    {:10} {:40} {}{}",
            record.operation,
            crate::content::truncate_chars(&record.detail, 37),
            usage_line(&record.usage),
            when
        );
    }
}

fn print_totals(reports: &[ProjectCost]) {
    let totals: Vec<UsageStats> = reports.iter().map(ProjectCost::total).collect();
    let total = aggregate(&totals);
    let cost = total.effective_cost();
    println!();
    println!("Summary");
    println!("-------");
    println!("  {:12} {}", "Projects:", reports.len());
    println!("  {:12} {}", "Tokens:", tokens(&total));
    println!("  {:12} {}", "Total cost:", format_cost(cost));
    println!(
        "  {:12} {}",
        "Average:",
        format_cost(cost / reports.len() as f64)
    );
}

fn tokens(usage: &UsageStats) -> String {
    format!(
        "{} in / {} out",
        group_thousands(usage.input_tokens),
        group_thousands(usage.output_tokens)
    )
}

fn usage_line(usage: &UsageStats) -> String {
    format!("{} ({})", tokens(usage), format_cost(usage.effective_cost()))
}
