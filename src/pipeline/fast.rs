use super::{GenerationOutcome, GenerationRequest, page_title, record_generation, write_page};
use crate::analysis::{DesignAnalysis, GenerationStats};
use crate::config::Framework;
use crate::content::{clean_html, validate_html_output, validate_html_structure};
use crate::error::{CcuxError, Result};
use crate::prompts;
use crate::runner::Runner;
use crate::ui;
use std::time::Instant;

pub(super) fn run(runner: &Runner, request: &GenerationRequest) -> Result<GenerationOutcome> {
    ui::header("Quick generation (no design thinking)");
    if !request.urls.is_empty() {
        tracing::info!(count = request.urls.len(), "reference screenshots are not captured");
    }

    let started = Instant::now();
    let prompt = prompts::landing_prompt(
        &request.description,
        request.framework,
        &request.theme,
        &request.sections,
        request.include_forms,
    );
    let out = runner.run(&prompt, "Generating landing page")?;

    let page = clean_html(&out.text);
    if page.trim().is_empty() {
        return Err(CcuxError::GeneratorError(
            "Claude Code returned no output".to_string(),
        ));
    }
    if request.framework == Framework::Html {
        let check = validate_html_output(&page);
        if !check.valid {
            ui::warn(&format!("generated page may be incomplete: {}", check.reason));
        }
        for issue in validate_html_structure(&page) {
            ui::warn(&format!("generated page: {}", issue));
        }
    }

    let path = write_page(
        &request.output_dir,
        request.framework,
        &page,
        &page_title(&request.description),
    )?;

    let duration = started.elapsed();
    let mut analysis = DesignAnalysis::new(&request.output_dir);
    record_generation(&mut analysis, request, &page, out.usage)?;
    analysis.set(
        "generation_stats",
        GenerationStats {
            duration_seconds: duration.as_secs_f64(),
            attempts: 1,
        },
    )?;
    analysis.save()?;

    Ok(GenerationOutcome {
        page: path,
        usage: out.usage,
        duration,
    })
}
