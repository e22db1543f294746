//! Project directories: discovery, naming and locating the landing page.

use crate::analysis::{ANALYSIS_FILE, DesignAnalysis};
use crate::config::Framework;
use crate::content;
use crate::error::{CcuxError, Result};
use crate::sections;
use crate::theme;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Page file names, React first.
pub const LANDING_FILES: [&str; 6] = [
    "App.jsx",
    "Landing.jsx",
    "Page.jsx",
    "index.html",
    "landing.html",
    "page.html",
];

/// Directories searched (after the project directory) for a landing page.
pub const SEARCH_DIRS: [&str; 4] = [".", "dist", "build", "public"];

const MAX_NUMBERED: u32 = 99;
const NAME_LIMIT: usize = 30;

/// A generated project found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub dir: PathBuf,
    pub name: String,
}

fn output_globs(base: &str) -> Result<GlobSet> {
    let base = globset::escape(base);
    let mut builder = GlobSetBuilder::new();
    for pattern in [
        base.clone(),
        format!("{}[1-9]", base),
        format!("{}[1-9][0-9]", base),
    ] {
        let glob = Glob::new(&pattern).map_err(|e| {
            CcuxError::UserError(format!("invalid output directory name '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| CcuxError::UserError(format!("failed to compile project globs: {}", e)))
}

/// Position in the `output`, `output1`, ... sequence (`output` is 0).
fn sequence_index(name: &str, base: &str) -> u32 {
    name.strip_prefix(base)
        .and_then(|rest| rest.parse().ok())
        .unwrap_or(0)
}

/// Both files every project has.
pub fn is_project_dir(dir: &Path) -> bool {
    dir.join("index.html").is_file() && dir.join(ANALYSIS_FILE).is_file()
}

/// Projects under `root` named `{base}`, `{base}1` .. `{base}99`, in sequence order.
pub fn discover(root: &Path, base: &str) -> Result<Vec<Project>> {
    let globs = output_globs(base)?;
    let entries = std::fs::read_dir(root).map_err(|e| CcuxError::io("read directory", root, e))?;

    let mut found: Vec<(u32, Project)> = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !globs.is_match(name) {
            continue;
        }
        let dir = entry.path();
        if !is_project_dir(&dir) {
            continue;
        }
        found.push((
            sequence_index(name, base),
            Project {
                name: display_name(&dir),
                dir,
            },
        ));
    }
    found.sort_by_key(|(index, _)| *index);
    tracing::debug!(count = found.len(), root = %root.display(), "discovered projects");
    Ok(found.into_iter().map(|(_, project)| project).collect())
}

/// Every direct subdirectory of `root` that is a project, sorted by path.
pub fn discover_all(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root).map_err(|e| CcuxError::io("read directory", root, e))?;
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && is_project_dir(path))
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// First unused directory of `{base}`, `{base}1` .. `{base}99`, else `{base}-{unix time}`.
pub fn next_available_output_dir(root: &Path, base: &str) -> PathBuf {
    let candidate = root.join(base);
    if !candidate.exists() {
        return candidate;
    }
    for i in 1..=MAX_NUMBERED {
        let candidate = root.join(format!("{}{}", base, i));
        if !candidate.exists() {
            return candidate;
        }
    }
    root.join(format!("{}-{}", base, chrono::Utc::now().timestamp()))
}

fn cut(text: &str, max: usize) -> String {
    text.chars().take(max).collect::<String>().trim().to_string()
}

/// Human name for a project directory.
pub fn display_name(dir: &Path) -> String {
    if let Ok(analysis) = DesignAnalysis::load(dir) {
        if let Some(brand) = analysis
            .str_at(&["brand_name"])
            .or_else(|| analysis.str_at(&["project_metadata", "brand_name"]))
        {
            return cut(brand, NAME_LIMIT);
        }
        if let Some(desc) = analysis.str_at(&["product_description"]) {
            return format!("{}...", cut(desc, NAME_LIMIT));
        }
    }

    if let Ok(html) = std::fs::read_to_string(dir.join("index.html")) {
        if let Some(title) = content::extract_title(&html) {
            return cut(&title, NAME_LIMIT);
        }
        if let Some(heading) = content::extract_first_heading(&html) {
            return cut(&heading, NAME_LIMIT);
        }
    }

    format!("Project in {}", dir.display())
}

/// Locate the page to edit: the project directory first, then [`SEARCH_DIRS`].
pub fn find_landing_page(dir: &Path) -> Option<PathBuf> {
    let mut search: Vec<PathBuf> = vec![dir.to_path_buf()];
    search.extend(SEARCH_DIRS.iter().map(PathBuf::from));

    for base in &search {
        for file in LANDING_FILES {
            let candidate = base.join(file);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "found landing page");
                return Some(candidate);
            }
        }
    }
    None
}

/// Page to edit: `--file` when given, else the discovered landing page.
pub fn resolve_page(dir: &Path, file: Option<&Path>) -> Result<PathBuf> {
    if let Some(file) = file {
        if !file.is_file() {
            return Err(CcuxError::UserError(format!(
                "file not found: '{}'",
                file.display()
            )));
        }
        return Ok(file.to_path_buf());
    }
    find_landing_page(dir).ok_or_else(|| {
        CcuxError::UserError(format!(
            "no landing page found in '{}'\nFix: run `ccux gen` first or pass --file <page>.",
            dir.display()
        ))
    })
}

/// Framework of a page file, by extension.
pub fn framework_of(page: &Path) -> Framework {
    match page.extension().and_then(|e| e.to_str()) {
        Some("jsx") | Some("tsx") | Some("js") => Framework::React,
        _ => Framework::Html,
    }
}

/// Facts about an existing page handed to edit prompts.
pub fn page_context(page: &Path, html: &str) -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    context.insert("framework".to_string(), framework_of(page).to_string());
    let names = sections::SectionDocument::parse(html).names();
    if !names.is_empty() {
        context.insert("existing_sections".to_string(), names.join(", "));
    }
    context.insert(
        "detected_theme".to_string(),
        theme::detect_theme(html).to_string(),
    );
    if let Some(meta) = content::extract_meta_description(html) {
        context.insert("meta_description".to_string(), meta);
    }
    context
}

/// One line of the `projects` listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub mode: &'static str,
    pub theme: String,
    pub created: String,
    pub cost: f64,
}

pub fn summarize(dir: &Path) -> ProjectSummary {
    let analysis = DesignAnalysis::load(dir).unwrap_or_else(|_| DesignAnalysis::new(dir));
    let mode = match analysis.str_at(&["generation_mode"]) {
        Some("fast") => "Fast",
        _ => "Full",
    };
    let created = analysis
        .str_at(&["created_at"])
        .or_else(|| analysis.str_at(&["project_metadata", "created_at"]))
        .map(|ts| match chrono::DateTime::parse_from_rfc3339(ts) {
            Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => ts.to_string(),
        })
        .unwrap_or_else(|| "unknown".to_string());
    ProjectSummary {
        mode,
        theme: analysis.theme().unwrap_or_else(|| "unknown".to_string()),
        created,
        cost: analysis.lifetime_usage().effective_cost(),
    }
}
