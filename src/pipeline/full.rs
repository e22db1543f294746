//! The twelve-phase design pipeline.
//!
//! Each phase is one prompt and one generator call. JSON phase outputs are
//! threaded into later prompts; a phase whose reply holds no JSON object
//! continues with `{}` instead of failing the run.

use super::references::{MAX_REFERENCES, merge_references, parse_reference_urls};
use super::retry::{Attempt, validate_output};
use super::{
    GenerationOutcome, GenerationRequest, page_title, record_generation, write_debug_output,
    write_page,
};
use crate::analysis::{DesignAnalysis, PhaseStat};
use crate::config::Framework;
use crate::content::extract_json;
use crate::error::{CcuxError, Result};
use crate::prompts::{self, DesignInputs};
use crate::runner::Runner;
use crate::ui;
use crate::usage::UsageStats;
use serde_json::Value;
use std::path::Path;
use std::time::{Duration, Instant};

pub const TOTAL_PHASES: u32 = 12;

/// Runs phases through the generator and keeps per-phase stats.
pub struct PhaseTracker<'a> {
    runner: &'a Runner,
    total: u32,
    stats: Vec<PhaseStat>,
    usage: UsageStats,
}

impl<'a> PhaseTracker<'a> {
    pub fn new(runner: &'a Runner, total: u32) -> Self {
        Self {
            runner,
            total,
            stats: Vec::new(),
            usage: UsageStats::default(),
        }
    }

    pub fn announce(&self, phase: u32, name: &str) {
        ui::header(&format!("Phase {}/{}: {}", phase, self.total, name));
    }

    pub fn skip(&self, phase: u32, name: &str, reason: &str) {
        ui::info(&format!("Phase {}/{}: {} skipped ({})", phase, self.total, name, reason));
        tracing::info!(phase, name, reason, "phase skipped");
    }

    pub fn record(&mut self, phase: u32, name: &str, duration: Duration, usage: UsageStats) {
        self.usage += usage;
        self.stats.push(PhaseStat {
            phase,
            name: name.to_string(),
            duration_seconds: duration.as_secs_f64(),
            usage,
        });
    }

    /// One call; returns the raw reply text.
    pub fn text(&mut self, phase: u32, name: &str, prompt: &str) -> Result<String> {
        self.announce(phase, name);
        let out = self.runner.run(prompt, name)?;
        self.record(phase, name, out.duration, out.usage);
        Ok(out.text)
    }

    /// One call; returns the JSON object in the reply, or `{}`.
    pub fn json(&mut self, phase: u32, name: &str, prompt: &str) -> Result<Value> {
        let text = self.text(phase, name, prompt)?;
        let extracted = extract_json(&text);
        if extracted.is_empty() {
            ui::warn(&format!("{} returned no JSON; continuing with empty results", name));
        }
        Ok(extracted.into_value())
    }

    pub fn runner(&self) -> &Runner {
        self.runner
    }

    pub fn usage(&self) -> UsageStats {
        self.usage
    }

    pub fn stats(&self) -> &[PhaseStat] {
        &self.stats
    }
}

/// Implementation inputs shared by `gen` and `theme`.
pub struct Implementation<'a> {
    pub description: &'a str,
    pub final_copy: &'a Value,
    pub framework: Framework,
    pub theme: &'a str,
    pub design: DesignInputs<'a>,
    pub include_forms: bool,
    pub max_attempts: u32,
}

/// Final phase: generate the page with bounded retries.
///
/// Returns the validated page and the number of attempts. When every
/// attempt is rejected the last raw output lands in `debug_output.txt`
/// inside `dir` and the call fails with a validation error.
pub fn implement(
    tracker: &mut PhaseTracker<'_>,
    phase: u32,
    job: &Implementation<'_>,
    dir: &Path,
) -> Result<(String, u32)> {
    const NAME: &str = "Implementation";
    tracker.announce(phase, NAME);

    let base_prompt = prompts::implementation_prompt(
        job.description,
        job.final_copy,
        job.framework,
        job.theme,
        job.design,
        job.include_forms,
    );

    let started = Instant::now();
    let mut usage = UsageStats::default();
    let mut state = Attempt::start(job.max_attempts);

    while let Attempt::Pending {
        attempt, previous, ..
    } = &state
    {
        let (prompt, label) = match previous {
            None => (base_prompt.clone(), "Implementing landing page".to_string()),
            Some(reason) => (
                format!(
                    "{}\n\nThe previous attempt was rejected ({}). Return the complete page.",
                    base_prompt, reason
                ),
                format!("Retrying implementation (attempt {})", attempt),
            ),
        };
        let out = tracker.runner().run(&prompt, &label)?;
        usage += out.usage;
        state = state.advance(out.text, |raw| validate_output(job.framework, raw));
    }
    tracker.record(phase, NAME, started.elapsed(), usage);

    match state {
        Attempt::Validated { html, attempts } => Ok((html, attempts)),
        Attempt::RetryExhausted {
            last_output,
            attempts,
            reason,
        } => {
            let path = write_debug_output(dir, &last_output)?;
            Err(CcuxError::ValidationError(format!(
                "{} after {} attempt(s); raw output saved to {}",
                reason,
                attempts,
                path.display()
            )))
        }
        Attempt::Pending { .. } => Err(CcuxError::GeneratorError(
            "implementation ended without a result".to_string(),
        )),
    }
}

pub(super) fn run(runner: &Runner, request: &GenerationRequest) -> Result<GenerationOutcome> {
    ui::header("Running the design thinking pipeline");
    let started = Instant::now();
    let desc = request.description.as_str();
    let mut tracker = PhaseTracker::new(runner, TOTAL_PHASES);

    // 1. Reference discovery
    let references = if request.urls.len() >= MAX_REFERENCES {
        tracker.skip(1, "Reference discovery", "references supplied");
        merge_references(&request.urls, &[])
    } else {
        let reply = tracker.text(
            1,
            "Reference discovery",
            &prompts::reference_discovery_prompt(desc),
        )?;
        let found = parse_reference_urls(&reply);
        tracing::debug!(found = found.len(), "parsed reference urls");
        merge_references(&request.urls, &found)
    };
    for url in &references {
        ui::field("Reference", url);
    }

    // 2. Screenshots
    tracker.skip(2, "Screenshots", "screenshot capture is not supported");

    // 3. Product understanding
    let understanding = tracker.json(
        3,
        "Product understanding",
        &prompts::product_understanding_prompt(desc),
    )?;

    // 4. UX analysis
    let ux_analysis = if references.is_empty() {
        tracker.skip(4, "UX analysis", "no reference sites");
        Value::Object(Default::default())
    } else {
        tracker.json(
            4,
            "UX analysis",
            &prompts::ux_analysis_prompt(desc, &references),
        )?
    };

    // 5-8. Research and structure
    let user_research = tracker.json(
        5,
        "Empathize",
        &prompts::empathize_prompt(desc, &understanding, &ux_analysis),
    )?;
    let site_flow = tracker.json(6, "Define", &prompts::define_prompt(desc, &user_research))?;
    let content_strategy = tracker.json(
        7,
        "Ideate",
        &prompts::ideate_prompt(desc, &user_research, &site_flow),
    )?;
    let wireframes = tracker.json(
        8,
        "Wireframes",
        &prompts::wireframe_prompt(desc, &content_strategy, &site_flow),
    )?;

    // 9-11. Visual design and copy
    let design_system = tracker.json(
        9,
        "Design system",
        &prompts::design_system_prompt(desc, &wireframes, &content_strategy, &request.theme),
    )?;
    let hifi_design = tracker.json(
        10,
        "High-fidelity design",
        &prompts::high_fidelity_prompt(desc, &design_system, &wireframes, &content_strategy),
    )?;
    let final_copy = tracker.json(
        11,
        "Final copy",
        &prompts::prototype_prompt(desc, &content_strategy, &design_system, &wireframes),
    )?;

    // 12. Implementation
    let (page, attempts) = implement(
        &mut tracker,
        12,
        &Implementation {
            description: desc,
            final_copy: &final_copy,
            framework: request.framework,
            theme: &request.theme,
            design: DesignInputs {
                design_system: &design_system,
                content_strategy: &content_strategy,
                ux_analysis: &ux_analysis,
                wireframes: &wireframes,
            },
            include_forms: request.include_forms,
            max_attempts: request.max_attempts,
        },
        &request.output_dir,
    )?;
    tracing::info!(attempts, "implementation validated");

    let path = write_page(
        &request.output_dir,
        request.framework,
        &page,
        &page_title(desc),
    )?;

    let usage = tracker.usage();
    let mut analysis = DesignAnalysis::new(&request.output_dir);
    record_generation(&mut analysis, request, &page, usage)?;
    analysis.set("reference_urls", &references)?;
    for (key, value) in [
        ("product_understanding", understanding),
        ("ux_analysis", ux_analysis),
        ("user_research", user_research),
        ("site_flow", site_flow),
        ("content_strategy", content_strategy),
        ("wireframes", wireframes),
        ("design_system", design_system),
        ("hifi_design", hifi_design),
        ("final_copy", final_copy),
    ] {
        analysis.set(key, value)?;
    }
    analysis.set("design_phases", tracker.stats())?;
    analysis.save()?;

    Ok(GenerationOutcome {
        page: path,
        usage,
        duration: started.elapsed(),
    })
}
