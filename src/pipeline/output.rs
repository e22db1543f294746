//! Writing generated pages into the project directory.

use crate::config::Framework;
use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

pub const DEBUG_FILE: &str = "debug_output.txt";

/// `index.html` that loads `App.jsx` through React 18 UMD and Babel standalone.
pub fn react_shell(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://unpkg.com/react@18/umd/react.development.js"></script>
    <script src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
    <script src="https://unpkg.com/@babel/standalone/babel.min.js"></script>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
    <div id="root"></div>
    <script type="text/babel" src="App.jsx"></script>
</body>
</html>
"#,
        escape_text(title)
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Write the page for `framework` and return the file that holds the page.
///
/// React writes `App.jsx` plus the shell `index.html`.
pub fn write_page(dir: &Path, framework: Framework, page: &str, title: &str) -> Result<PathBuf> {
    let target = dir.join(framework.page_file());
    atomic_write_file(&target, page)?;
    if framework == Framework::React {
        atomic_write_file(dir.join("index.html"), &react_shell(title))?;
    }
    tracing::info!(path = %target.display(), bytes = page.len(), "wrote page");
    Ok(target)
}

/// Keep rejected output for inspection.
pub fn write_debug_output(dir: &Path, raw: &str) -> Result<PathBuf> {
    let path = dir.join(DEBUG_FILE);
    atomic_write_file(&path, raw)?;
    Ok(path)
}
