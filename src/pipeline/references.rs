//! Reference site discovery output parsing.

pub const MAX_REFERENCES: usize = 3;

const SEPARATOR: char = '–';

/// URLs from lines shaped `Name – URL – note`.
pub fn parse_reference_urls(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains(SEPARATOR) && line.contains("http"))
        .filter_map(|line| {
            let candidate = line.split(SEPARATOR).nth(1)?.trim();
            if !candidate.starts_with("http") {
                return None;
            }
            candidate.split_whitespace().next().map(str::to_string)
        })
        .collect()
}

/// User URLs first, then discovered ones, without duplicates, capped at [`MAX_REFERENCES`].
pub fn merge_references(user: &[String], discovered: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for url in user.iter().chain(discovered) {
        if merged.len() == MAX_REFERENCES {
            break;
        }
        if !merged.contains(url) {
            merged.push(url.clone());
        }
    }
    merged
}
