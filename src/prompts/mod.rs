//! Prompt builders.
//!
//! Every builder is a pure function from structured inputs (phase outputs
//! as `serde_json::Value`, theme specs, section lists) to a prompt string.
//! Missing keys in phase outputs fall back to neutral placeholders so a
//! degraded (empty) phase never breaks the next prompt.

mod edit;
mod forms;
mod landing;
mod phases;
mod requirements;

pub use edit::{editgen_prompt, editgen_sections_prompt, regeneration_prompt};
pub use forms::{FormStyle, FormType, form_edit_prompt, form_off_prompt, form_on_prompt};
pub use landing::{DesignInputs, implementation_prompt, landing_prompt};
pub use phases::{
    define_prompt, design_system_prompt, empathize_prompt, high_fidelity_prompt, ideate_prompt,
    product_understanding_prompt, prototype_prompt, reference_discovery_prompt,
    ux_analysis_prompt, wireframe_prompt,
};

use serde_json::Value;
use std::collections::BTreeMap;

/// Value at a key path, if every step exists.
pub(crate) fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(key))
}

/// String at `path`, `default` when absent. Non-string values are rendered as JSON.
pub(crate) fn text_at(value: &Value, path: &[&str], default: &str) -> String {
    match lookup(value, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

/// String items of the array at `path`.
pub(crate) fn list_at(value: &Value, path: &[&str]) -> Vec<String> {
    lookup(value, path)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `key` of every object in the array at `path`.
pub(crate) fn pluck(value: &Value, path: &[&str], key: &str) -> Vec<String> {
    lookup(value, path)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(|item| text_at(item, &[key], "N/A")).collect())
        .unwrap_or_default()
}

/// `a, b, c`, or `none` for an empty list.
pub(crate) fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Page context block: one `- key: value` line per entry, long text cut to 60 chars.
pub fn format_context(context: &BTreeMap<String, String>) -> String {
    if context.is_empty() {
        return "No specific context provided".to_string();
    }
    context
        .iter()
        .map(|(k, v)| format!("- {}: {}", k, crate::content::truncate_chars(v, 60)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking the generator to shorten a long product description.
pub fn summarize_prompt(description: &str) -> String {
    format!(
        "Summarize the product description below in 200 to 300 words.\n\
         Keep only what matters for a landing page: the problem it solves, \
         the target user, the main differentiator and the best feature.\n\
         Plain business language, no marketing filler. Output only the summary text.\n\n\
         Product description:\n{}",
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookups_fall_back_on_missing_keys() {
        let v = json!({"hero": {"headline": "Ship it", "count": 3}, "items": ["a", 1]});
        assert_eq!(text_at(&v, &["hero", "headline"], "N/A"), "Ship it");
        assert_eq!(text_at(&v, &["hero", "count"], "N/A"), "3");
        assert_eq!(text_at(&v, &["hero", "missing"], "N/A"), "N/A");
        assert_eq!(text_at(&json!({}), &["a", "b", "c"], "x"), "x");
        assert_eq!(list_at(&v, &["items"]), vec!["a", "1"]);
        assert!(list_at(&v, &["hero"]).is_empty());
    }

    #[test]
    fn pluck_reads_object_arrays() {
        let v = json!({"layout": {"sections": [{"name": "hero"}, {"other": 1}]}});
        assert_eq!(pluck(&v, &["layout", "sections"], "name"), vec!["hero", "N/A"]);
    }

    #[test]
    fn context_lines_are_truncated() {
        let mut ctx = BTreeMap::new();
        ctx.insert("theme".to_string(), "minimal".to_string());
        ctx.insert("sections".to_string(), "x".repeat(100));
        let text = format_context(&ctx);
        assert!(text.contains("- theme: minimal"));
        assert!(text.contains(&format!("- sections: {}...", "x".repeat(60))));
        assert_eq!(format_context(&BTreeMap::new()), "No specific context provided");
    }

    #[test]
    fn summarize_prompt_embeds_description() {
        let p = summarize_prompt("A very long description");
        assert!(p.contains("200 to 300 words"));
        assert!(p.ends_with("A very long description"));
    }
}
