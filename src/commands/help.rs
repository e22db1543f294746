//! Implementation of the `ccux help` command.

use crate::cli::HelpArgs;
use crate::error::{CcuxError, Result};
use crate::theme::{self, ThemeCategory};

pub const TOPICS: [&str; 4] = ["quickstart", "themes", "examples", "workflows"];

const OVERVIEW: &str = "\
ccux: generate conversion-focused landing pages with Claude Code

Commands:
  init                 Interactive wizard (default when no command is given)
  gen                  Generate a new landing page
  regen                Regenerate specific sections of a page
  editgen              Apply a free-form edit to a page
  theme                Switch a page to another theme
  form                 Add, remove or customize forms
  projects             List generated projects
  cost                 Show token usage and cost
  help [topic]         Show help for a topic
  version              Show versions

Global flags:
  -v, --verbose        Log debug detail to stderr (or set CCUX_LOG)
  --config <path>      Use a config file other than ./ccux.yaml
";

const QUICKSTART: &str = "\
Quickstart

1. Install Claude Code and make sure `claude --version` works.
2. Generate a page in one call:
     ccux gen --desc \"AI meeting notes for remote teams\" --no-design-thinking
3. Or run the full design thinking pipeline with reference sites:
     ccux gen --desc-file product.txt --url https://linear.app
4. Open output/index.html in a browser.
5. Refine it:
     ccux regen --section hero
     ccux editgen \"shorten the pricing copy\" --sections pricing
";

const EXAMPLES: &str = "\
Examples

  ccux gen --desc \"Budgeting app for students\" --theme playful
  ccux gen --desc \"Dev tool\" --framework react --output site
  ccux regen --section hero,features --output output2
  ccux regen --all
  ccux editgen \"add a testimonial from a CTO\" --sections testimonials
  ccux theme dark
  ccux form edit --type newsletter --cta \"Join the list\"
  ccux form off
  ccux cost --detailed
";

const WORKFLOWS: &str = "\
Workflows

Fast iteration:
  gen --no-design-thinking, then regen single sections until the page reads well.

Research-driven page:
  gen with up to three --url references; the pipeline analyzes them before
  wireframing, designing and writing copy. Everything it learns is kept in
  design_analysis.json and reused by later theme changes.

Restyling:
  theme <name> reruns design system, high-fidelity design and implementation
  with the new theme while keeping the researched copy.

Lead capture:
  form on adds a contact form, form edit customizes type, fields, style and
  button text, form off removes every form.
";

/// Text for `topic`, or the overview when none is given.
pub fn help_text(topic: Option<&str>) -> Result<String> {
    let Some(topic) = topic else {
        return Ok(format!("{}\nHelp topics: {}\n", OVERVIEW, TOPICS.join(", ")));
    };
    match topic.trim().to_ascii_lowercase().as_str() {
        "quickstart" => Ok(QUICKSTART.to_string()),
        "themes" => Ok(themes_text()),
        "examples" => Ok(EXAMPLES.to_string()),
        "workflows" => Ok(WORKFLOWS.to_string()),
        other => Err(CcuxError::UserError(format!(
            "unknown help topic '{}'\nFix: use one of: {}",
            other,
            TOPICS.join(", ")
        ))),
    }
}

fn themes_text() -> String {
    let mut out = String::from("Themes\n");
    for category in ThemeCategory::ALL {
        out.push_str(&format!("\n{}:\n", category.label()));
        for name in category.members() {
            out.push_str(&format!("  {:14} {}\n", name, theme::description(name)));
        }
    }
    out.push_str("\nUse with: ccux gen --theme <name> or ccux theme <name>\n");
    out
}

/// Execute the `ccux help` command.
pub fn cmd_help(args: HelpArgs) -> Result<()> {
    print!("{}", help_text(args.topic.as_deref())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_commands_and_topics() {
        let text = help_text(None).unwrap();
        assert!(text.contains("editgen"));
        assert!(text.contains("quickstart, themes, examples, workflows"));
    }

    #[test]
    fn themes_topic_lists_every_theme() {
        let text = help_text(Some("Themes")).unwrap();
        for name in theme::names() {
            assert!(text.contains(name), "missing theme {}", name);
        }
    }

    #[test]
    fn unknown_topic_is_a_user_error_listing_topics() {
        let err = help_text(Some("colors")).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
        assert!(err.to_string().contains("workflows"));
    }
}
