use super::*;
use serde_json::json;
use tempfile::TempDir;

fn stats(input: u64, output: u64, cost: f64) -> UsageStats {
    UsageStats {
        input_tokens: input,
        output_tokens: output,
        cost,
    }
}

#[test]
fn missing_file_loads_empty() {
    let temp = TempDir::new().unwrap();
    let analysis = DesignAnalysis::load(temp.path()).unwrap();
    assert!(analysis.is_empty());
    assert!(!DesignAnalysis::exists(temp.path()));
}

#[test]
fn load_existing_requires_file() {
    let temp = TempDir::new().unwrap();
    let err = DesignAnalysis::load_existing(temp.path()).unwrap_err();
    assert!(err.to_string().contains("design_analysis.json"));
}

#[test]
fn malformed_json_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(ANALYSIS_FILE), "{not json").unwrap();
    assert!(DesignAnalysis::load(temp.path()).unwrap().is_empty());

    std::fs::write(temp.path().join(ANALYSIS_FILE), "[1, 2]").unwrap();
    assert!(DesignAnalysis::load(temp.path()).unwrap().is_empty());
}

#[test]
fn save_round_trips_and_keeps_unknown_keys() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(ANALYSIS_FILE),
        r#"{"custom_key": {"nested": [1, 2]}, "theme": "dark"}"#,
    )
    .unwrap();

    let mut analysis = DesignAnalysis::load(temp.path()).unwrap();
    analysis.set("framework", "html").unwrap();
    analysis.touch();
    analysis.save().unwrap();

    let reloaded = DesignAnalysis::load(temp.path()).unwrap();
    assert_eq!(reloaded.get("custom_key"), Some(&json!({"nested": [1, 2]})));
    assert_eq!(reloaded.str_at(&["framework"]), Some("html"));
    assert!(reloaded.str_at(&["last_updated"]).is_some());
    assert!(!temp.path().join(".design_analysis.json.tmp").exists());
}

#[test]
fn set_path_creates_and_replaces_parents() {
    let temp = TempDir::new().unwrap();
    let mut analysis = DesignAnalysis::new(temp.path());
    analysis.set("product_understanding", "oops").unwrap();
    analysis
        .set_path(&["product_understanding", "description"], "Todo app")
        .unwrap();
    analysis.set_path(&["a", "b", "c"], 3).unwrap();

    assert_eq!(
        analysis.str_at(&["product_understanding", "description"]),
        Some("Todo app")
    );
    assert_eq!(analysis.lookup(&["a", "b", "c"]), Some(&json!(3)));
}

#[test]
fn push_appends_history_entries() {
    let temp = TempDir::new().unwrap();
    let mut analysis = DesignAnalysis::new(temp.path());
    analysis
        .push(
            "edit_history",
            EditEntry::new("shorter hero", vec!["hero".into()], stats(10, 5, 0.0)),
        )
        .unwrap();
    analysis
        .push(
            "edit_history",
            EditEntry::new("new footer", vec![], stats(1, 1, 0.0)),
        )
        .unwrap();

    let entries = analysis.get("edit_history").unwrap().as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["instruction"], "shorter hero");
    assert_eq!(entries[0]["usage_stats"]["input_tokens"], 10);
}

#[test]
fn product_description_precedence() {
    let temp = TempDir::new().unwrap();
    let mut analysis = DesignAnalysis::new(temp.path());
    assert_eq!(analysis.product_description(), None);

    analysis.set("product_description", "plain").unwrap();
    assert_eq!(analysis.product_description().as_deref(), Some("plain"));

    analysis
        .set_path(&["product_understanding", "problem"], "the problem")
        .unwrap();
    assert_eq!(analysis.product_description().as_deref(), Some("the problem"));

    analysis
        .set_path(&["project_metadata", "product_description"], "from metadata")
        .unwrap();
    assert_eq!(
        analysis.product_description().as_deref(),
        Some("from metadata")
    );
}

#[test]
fn add_sections_keeps_order_without_duplicates() {
    let temp = TempDir::new().unwrap();
    let mut analysis = DesignAnalysis::new(temp.path());
    analysis.set("sections", ["hero", "footer"]).unwrap();
    analysis.add_sections(&["footer".to_string(), "pricing".to_string()]);
    assert_eq!(analysis.sections(), vec!["hero", "footer", "pricing"]);
}

#[test]
fn lifetime_usage_sums_generation_and_histories() {
    let temp = TempDir::new().unwrap();
    let mut analysis = DesignAnalysis::new(temp.path());
    analysis.set("total_usage", stats(100, 50, 1.0)).unwrap();
    analysis
        .push(
            "theme_history",
            ThemeEntry::new("minimal", "dark", stats(10, 5, 0.5)),
        )
        .unwrap();
    analysis
        .push(
            "regeneration_history",
            RegenerationEntry::new(vec!["hero".into()], "Todo", stats(1, 2, 0.25)),
        )
        .unwrap();
    // Entries written by older versions may lack usage.
    analysis
        .push("form_history", json!({"operation": "off"}))
        .unwrap();

    let records = analysis.history_usage();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].operation, "regen");
    assert_eq!(records[0].detail, "sections: hero");
    assert_eq!(records[1].detail, "minimal -> dark");
    assert_eq!(records[2].detail, "form off");
    assert!(records[2].usage.is_empty());

    let total = analysis.lifetime_usage();
    assert_eq!(total.input_tokens, 111);
    assert_eq!(total.output_tokens, 57);
    assert!((total.cost - 1.75).abs() < 1e-9);
}

#[test]
fn phase_stats_read_design_phases() {
    let temp = TempDir::new().unwrap();
    let mut analysis = DesignAnalysis::new(temp.path());
    analysis
        .push(
            "design_phases",
            PhaseStat {
                phase: 3,
                name: "Product understanding".into(),
                duration_seconds: 2.5,
                usage: stats(7, 3, 0.0),
            },
        )
        .unwrap();
    let phases = analysis.phase_stats();
    assert_eq!(phases.len(), 1);
    assert_eq!(phases[0].0, "Product understanding");
    assert_eq!(phases[0].2.input_tokens, 7);
}

#[test]
fn theme_lookup_prefers_current_theme() {
    let temp = TempDir::new().unwrap();
    let mut analysis = DesignAnalysis::new(temp.path());
    analysis
        .set_path(&["project_metadata", "theme"], "playful")
        .unwrap();
    assert_eq!(analysis.theme().as_deref(), Some("playful"));
    analysis.set("theme", "minimal").unwrap();
    analysis.set("current_theme", "dark").unwrap();
    assert_eq!(analysis.theme().as_deref(), Some("dark"));
}
