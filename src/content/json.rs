//! JSON extraction from free-form generator output.
//!
//! The generator is asked for JSON but often wraps it in a Markdown fence or
//! surrounds it with prose. Extraction tries, in order: the whole text, a
//! line-based fence scan, a regex fence match, and finally the greedy span
//! from the first `{` to the last `}`. Only JSON objects count.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*\n?(.*?)\n?```").expect("Invalid fence regex")
});

/// Outcome of [`extract_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum JsonExtract {
    /// A JSON object was found and parsed.
    Parsed(Value),
    /// Nothing in the text parsed as a JSON object.
    Empty,
}

impl JsonExtract {
    /// The parsed object, or an empty object when nothing was found.
    pub fn into_value(self) -> Value {
        match self {
            JsonExtract::Parsed(value) => value,
            JsonExtract::Empty => Value::Object(Map::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, JsonExtract::Empty)
    }
}

/// Extract the first JSON object from generator output.
pub fn extract_json(text: &str) -> JsonExtract {
    let candidates = [
        Some(text.trim().to_string()),
        scan_fenced_lines(text),
        FENCE_REGEX
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string()),
        brace_span(text).map(str::to_string),
    ];

    for (stage, candidate) in candidates.into_iter().enumerate() {
        let Some(candidate) = candidate else {
            continue;
        };
        if let Some(value) = parse_object(&candidate) {
            tracing::trace!(stage, "extracted JSON object");
            return JsonExtract::Parsed(value);
        }
    }

    tracing::debug!("no JSON object found in generator output");
    JsonExtract::Empty
}

fn parse_object(candidate: &str) -> Option<Value> {
    if candidate.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(candidate) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

/// Collect lines from an opening fence (or a line starting with `{`) until
/// the closing fence.
fn scan_fenced_lines(text: &str) -> Option<String> {
    let mut collected = Vec::new();
    let mut collecting = false;
    let mut in_fence = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if !collecting && trimmed.starts_with("```") {
            collecting = true;
            in_fence = true;
            continue;
        }
        if collecting && in_fence && trimmed == "```" {
            break;
        }
        if !collecting && trimmed.starts_with('{') {
            collecting = true;
        }
        if collecting {
            collected.push(line);
        }
    }

    let joined = collected.join("\n").trim().to_string();
    (!joined.is_empty()).then_some(joined)
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
