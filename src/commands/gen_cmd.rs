//! Implementation of the `ccux gen` command.

use super::Session;
use crate::cli::{GenArgs, split_list};
use crate::error::{CcuxError, Result};
use crate::fs::read_text;
use crate::pipeline::{self, GenerationRequest, MAX_REFERENCES, Mode};
use crate::project;
use crate::theme;
use crate::ui;
use std::path::Path;

/// Execute the `ccux gen` command.
///
/// Without `--desc` or `--desc-file` every missing choice is asked for
/// interactively.
pub fn cmd_gen(session: &Session, args: GenArgs) -> Result<()> {
    let config = &session.config;
    let interactive = args.desc.is_none() && args.desc_file.is_none();

    let description = read_description(&args)?;
    let mut urls = args.urls.clone();
    let mut framework_arg = args.framework.clone();
    let mut theme_arg = args.theme.clone();
    let mut fast = args.no_design_thinking;

    if interactive {
        if urls.is_empty() {
            let answer = ui::ask("Reference URLs (comma-separated, optional)", Some(""))?;
            urls = split_list(&answer)
                .into_iter()
                .filter(|u| u.starts_with("http"))
                .collect();
        }
        if framework_arg.is_none() {
            let options = ["html", "react"];
            let index = ui::choose("Output framework", &options, 0)?;
            framework_arg = Some(options[index].to_string());
        }
        if theme_arg.is_none() {
            let names = theme::names();
            let labels: Vec<String> = names
                .iter()
                .map(|n| format!("{}: {}", n, theme::description(n)))
                .collect();
            let options: Vec<&str> = labels.iter().map(String::as_str).collect();
            let default = names.iter().position(|n| *n == config.theme).unwrap_or(0);
            let index = ui::choose("Design theme", &options, default)?;
            theme_arg = Some(names[index].to_string());
        }
        if !fast {
            fast = !ui::confirm(
                "Run the full design thinking process? (research, wireframes; slower, better results)",
                true,
            )?;
        }
    }

    if urls.len() > MAX_REFERENCES {
        return Err(CcuxError::UserError(format!(
            "at most {} reference URLs are supported, got {}",
            MAX_REFERENCES,
            urls.len()
        )));
    }

    let framework = config.resolve_framework(framework_arg.as_deref())?;
    let theme_name = config.resolve_theme(theme_arg.as_deref())?;
    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => project::next_available_output_dir(Path::new(""), &config.output_dir),
    };

    let runner = session.runner()?;
    let (description, summary_usage) =
        pipeline::summarize_description(&runner, &description, config.summarize_threshold_words);

    ui::header(&format!(
        "Generating landing page for: {}",
        crate::content::truncate_chars(&description, 80)
    ));
    ui::field("Framework", &framework.to_string());
    ui::field("Theme", &theme_name);
    ui::field("Output", &output_dir.display().to_string());

    let request = GenerationRequest {
        description,
        framework,
        theme: theme_name,
        sections: config.sections.clone(),
        output_dir,
        urls,
        include_forms: args.include_forms,
        mode: if fast { Mode::Fast } else { Mode::Full },
        max_attempts: config.max_implementation_attempts,
        prior_usage: summary_usage,
    };
    let outcome = pipeline::generate(&runner, &request)?;

    ui::success(&format!(
        "Landing page generated in {:.1}s",
        outcome.duration.as_secs_f64()
    ));
    ui::field("Page", &outcome.page.display().to_string());
    let usage = outcome.usage + summary_usage;
    if !usage.is_empty() {
        ui::field("Usage", &usage.to_string());
    }
    Ok(())
}

/// `--desc-file` > `--desc` > interactive prompt.
fn read_description(args: &GenArgs) -> Result<String> {
    let description = if let Some(path) = &args.desc_file {
        if !path.is_file() {
            return Err(CcuxError::UserError(format!(
                "description file not found: '{}'",
                path.display()
            )));
        }
        read_text(path)?
    } else if let Some(desc) = &args.desc {
        desc.clone()
    } else {
        ui::ask("Product description", None)?
    };

    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(CcuxError::UserError(
            "a product description is required\nFix: pass --desc \"...\" or --desc-file <path>."
                .to_string(),
        ));
    }
    Ok(description)
}
