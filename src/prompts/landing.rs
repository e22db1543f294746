//! Prompts that produce a whole page.

use super::requirements::{HTML_ONLY, animation_requirements, functional_requirements};
use super::{join_or_none, list_at, text_at};
use crate::config::Framework;
use crate::content::truncate_chars;
use serde_json::Value;

const REACT_ONLY: &str = "OUTPUT: Only the contents of App.jsx. Define `function App()` using \
Tailwind classes and finish with \
`ReactDOM.createRoot(document.getElementById('root')).render(<App />);`. \
React and ReactDOM are globals (UMD build); do not use import statements. \
No explanations, no markdown fences.";

fn output_rules(framework: Framework) -> &'static str {
    match framework {
        Framework::Html => HTML_ONLY,
        Framework::React => REACT_ONLY,
    }
}

fn marker_rules(sections: &[String]) -> String {
    let listed = if sections.is_empty() {
        "each section".to_string()
    } else {
        sections.join(", ")
    };
    format!(
        "SECTION MARKERS:\n\
         Wrap every top-level section ({listed}) in comment markers so it can be edited later:\n\
         <!-- START: name -->\n<section id=\"name\">...</section>\n<!-- END: name -->\n\
         Use lowercase names made of letters, digits and underscores."
    )
}

/// Wireframe labels like "Social Proof" become `social_proof`.
fn marker_name(label: &str) -> String {
    label
        .to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Single-call page generation used by fast mode.
pub fn landing_prompt(
    description: &str,
    framework: Framework,
    theme_name: &str,
    sections: &[String],
    include_forms: bool,
) -> String {
    let section_list = if sections.is_empty() {
        "hero, features, pricing, footer".to_string()
    } else {
        sections.join(", ")
    };

    format!(
        "Create a high-converting landing page.\n\n\
         Product: {description}\n\
         Sections: {section_list}\n\
         Framework: {framework}\n\
         Theme: {theme_name}\n\n\
         Pick a visual treatment per section from its goal: data as charts, features as \
         product shots, benefits as illustrations, social proof as testimonials.\n\
         Semantic HTML5, Tailwind via CDN, accessible interactions, SVG icons instead of emoji.\n\n\
         {functional}\n\n\
         {animation}\n\n\
         {markers}\n\n\
         {output}",
        functional = functional_requirements(include_forms),
        animation = animation_requirements(),
        markers = marker_rules(sections),
        output = output_rules(framework),
    )
}

/// Design-phase outputs consumed by the implementation prompt.
#[derive(Debug, Clone, Copy)]
pub struct DesignInputs<'a> {
    pub design_system: &'a Value,
    pub content_strategy: &'a Value,
    pub ux_analysis: &'a Value,
    pub wireframes: &'a Value,
}

/// Final implementation step of a full run.
pub fn implementation_prompt(
    description: &str,
    final_copy: &Value,
    framework: Framework,
    theme_name: &str,
    design: DesignInputs<'_>,
    include_forms: bool,
) -> String {
    let color = match super::lookup(design.design_system, &["color_tokens", "primary"]) {
        Some(Value::String(primary)) => format!("Primary color: {}", primary),
        _ => "Color system: derive a palette that fits the theme".to_string(),
    };
    let value_prop = truncate_chars(
        &text_at(design.content_strategy, &["core_messaging", "value_proposition"], ""),
        120,
    );
    let cta = text_at(design.content_strategy, &["ctas", "primary_action"], "Get Started");
    let adopt: Vec<String> = list_at(design.ux_analysis, &["recommendations", "adopt"])
        .into_iter()
        .take(2)
        .collect();
    let sections: Vec<String> = super::pluck(design.wireframes, &["layout", "sections"], "name")
        .into_iter()
        .map(|s| marker_name(&s))
        .filter(|s| crate::sections::is_valid_name(s))
        .collect();
    let copy = serde_json::to_string_pretty(final_copy).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are a senior product designer implementing the final landing page.\n\n\
         Product: {description}\n\
         Framework: {framework}\n\
         Theme: {theme_name}\n\n\
         Design inputs:\n\
         1. {color}\n\
         2. Value proposition: {value_prop}\n\
         3. Primary CTA: {cta}\n\
         4. UX patterns to adopt: {adopt}\n\n\
         Final copy (use it verbatim where it fits):\n{copy}\n\n\
         Build mobile first, keep every visual element purposeful, meet WCAG AA, \
         use SVG icons instead of emoji.\n\n\
         {functional}\n\n\
         {animation}\n\n\
         {markers}\n\n\
         {output}",
        adopt = join_or_none(&adopt),
        functional = functional_requirements(include_forms),
        animation = animation_requirements(),
        markers = marker_rules(&sections),
        output = output_rules(framework),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn landing_lists_sections_and_markers() {
        let sections = vec!["hero".to_string(), "pricing".to_string()];
        let prompt = landing_prompt("Todo app", Framework::Html, "minimal", &sections, false);
        assert!(prompt.contains("Sections: hero, pricing"));
        assert!(prompt.contains("Theme: minimal"));
        assert!(prompt.contains("<!-- START: name -->"));
        assert!(prompt.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn landing_defaults_sections_and_targets_react() {
        let prompt = landing_prompt("Todo app", Framework::React, "dark", &[], true);
        assert!(prompt.contains("Sections: hero, features, pricing, footer"));
        assert!(prompt.contains("App.jsx"));
        assert!(prompt.contains("working contact form"));
    }

    #[test]
    fn implementation_uses_design_inputs() {
        let ds = json!({"color_tokens": {"primary": "#112233"}});
        let cs = json!({"core_messaging": {"value_proposition": "Less busywork"}, "ctas": {"primary_action": "Try it"}});
        let ux = json!({"recommendations": {"adopt": ["a", "b", "c"]}});
        let wf = json!({"layout": {"sections": [{"name": "Hero"}, {"name": "social proof"}]}});
        let copy = json!({"hero": {"headline": "Do less"}});
        let prompt = implementation_prompt(
            "Todo app",
            &copy,
            Framework::Html,
            "minimal",
            DesignInputs {
                design_system: &ds,
                content_strategy: &cs,
                ux_analysis: &ux,
                wireframes: &wf,
            },
            false,
        );
        assert!(prompt.contains("Primary color: #112233"));
        assert!(prompt.contains("Value proposition: Less busywork"));
        assert!(prompt.contains("Primary CTA: Try it"));
        assert!(prompt.contains("UX patterns to adopt: a, b\n"));
        assert!(prompt.contains("\"headline\": \"Do less\""));
        assert!(prompt.contains("every top-level section (hero, social_proof)"));
    }

    #[test]
    fn implementation_tolerates_empty_inputs() {
        let empty = json!({});
        let prompt = implementation_prompt(
            "X",
            &empty,
            Framework::Html,
            "minimal",
            DesignInputs {
                design_system: &empty,
                content_strategy: &empty,
                ux_analysis: &empty,
                wireframes: &empty,
            },
            false,
        );
        assert!(prompt.contains("Color system: derive a palette"));
        assert!(prompt.contains("Primary CTA: Get Started"));
        assert!(prompt.contains("UX patterns to adopt: none"));
    }
}
