//! Markdown fence stripping for generated code.

/// Remove Markdown fence marker lines and keep the fenced content.
///
/// Any line whose trimmed form starts with three backticks is dropped (this
/// covers ```` ```html ````, ```` ```jsx ```` and bare closers). The result
/// is trimmed.
pub fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
