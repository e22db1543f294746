use super::*;
use crate::analysis::ANALYSIS_FILE;
use crate::cli::{CostArgs, EditgenArgs, FormArgs, HelpArgs, RegenArgs, ThemeArgs};
use crate::sections::extract_sections;
use crate::test_support::{FakeGenerator, page_with_sections};
use serde_json::Value;
use tempfile::TempDir;

const HERO: &str = "<section id=\"hero\"><h1>Old headline</h1></section>";
const PRICING: &str = "<section id=\"pricing\"><div>$9 per month</div></section>";
const FOOTER: &str = "<footer><p>Made by Acme</p></footer>";

fn session_for(fake: &FakeGenerator) -> Session {
    Session::new(
        Config {
            claude_cmd: fake.command(),
            timeout_seconds: 10,
            track_usage: false,
            ..Config::default()
        },
        CancelToken::new(),
    )
}

/// A project directory with a marked page and a minimal analysis document.
fn make_project(root: &Path) -> (PathBuf, String) {
    let dir = root.join("output");
    std::fs::create_dir_all(&dir).unwrap();
    let page = page_with_sections(&[("hero", HERO), ("pricing", PRICING), ("footer", FOOTER)]);
    std::fs::write(dir.join("index.html"), &page).unwrap();
    std::fs::write(
        dir.join(ANALYSIS_FILE),
        r#"{"product_description": "Acme - a todo app for busy teams", "current_theme": "minimal"}"#,
    )
    .unwrap();
    (dir, page)
}

fn read_page(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("index.html")).unwrap()
}

fn read_analysis(dir: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(dir.join(ANALYSIS_FILE)).unwrap()).unwrap()
}

#[test]
fn regen_hero_leaves_other_sections_byte_identical() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let new_hero = "<section id=\"hero\"><h1>Ship faster</h1></section>";
    let fake = FakeGenerator::new(temp.path())
        .reply(&format!("<!-- START: hero -->\n{}\n<!-- END: hero -->", new_hero));

    cmd_regen(
        &session_for(&fake),
        RegenArgs {
            section: Some("Hero".to_string()),
            output: Some(dir.clone()),
            ..RegenArgs::default()
        },
    )
    .unwrap();

    assert_eq!(fake.calls(), 1);
    assert!(fake.last_prompt().contains("hero"));
    let updated = read_page(&dir);
    assert_eq!(updated, original.replace(HERO, new_hero));
    let before = extract_sections(&original);
    let after = extract_sections(&updated);
    assert_eq!(before["footer"], after["footer"]);
    assert_eq!(before["pricing"], after["pricing"]);

    let analysis = read_analysis(&dir);
    assert_eq!(analysis["regeneration_history"].as_array().unwrap().len(), 1);
    assert_eq!(
        analysis["regeneration_history"][0]["sections_updated"],
        serde_json::json!(["hero"])
    );
    assert_eq!(
        analysis["product_understanding"]["description"],
        "Acme - a todo app for busy teams"
    );
    assert!(analysis.get("last_updated").is_some());
}

#[test]
fn regen_keeps_duplicated_sibling_regions() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("output");
    std::fs::create_dir_all(&dir).unwrap();
    let original = page_with_sections(&[
        ("hero", HERO),
        ("footer", "<footer>desktop</footer>"),
        ("footer", "<footer>mobile</footer>"),
    ]);
    std::fs::write(dir.join("index.html"), &original).unwrap();
    let new_hero = "<section id=\"hero\"><h1>New</h1></section>";
    let fake = FakeGenerator::new(temp.path())
        .reply(&format!("<!-- START: hero -->\n{}\n<!-- END: hero -->", new_hero));

    cmd_regen(
        &session_for(&fake),
        RegenArgs {
            section: Some("hero".to_string()),
            desc: Some("Acme".to_string()),
            output: Some(dir.clone()),
            ..RegenArgs::default()
        },
    )
    .unwrap();

    let updated = read_page(&dir);
    assert_eq!(updated, original.replace(HERO, new_hero));
    assert!(updated.contains("<footer>mobile</footer>"));
}

#[test]
fn regen_appends_sections_the_page_lacks() {
    let temp = TempDir::new().unwrap();
    let (dir, _) = make_project(temp.path());
    let fake = FakeGenerator::new(temp.path())
        .reply("<!-- START: faq -->\n<section><h2>FAQ</h2></section>\n<!-- END: faq -->");

    cmd_regen(
        &session_for(&fake),
        RegenArgs {
            section: Some("faq".to_string()),
            output: Some(dir.clone()),
            ..RegenArgs::default()
        },
    )
    .unwrap();

    let updated = read_page(&dir);
    assert_eq!(updated.matches("<!-- START: faq -->").count(), 1);
    assert!(updated.find("<!-- START: faq -->").unwrap() < updated.find("</body>").unwrap());
    assert_eq!(
        read_analysis(&dir)["sections"].as_array().unwrap().last().unwrap(),
        "faq"
    );
}

#[test]
fn regen_without_marked_output_keeps_page() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let fake = FakeGenerator::new(temp.path()).reply("Here is your hero section!");

    let err = cmd_regen(
        &session_for(&fake),
        RegenArgs {
            section: Some("hero".to_string()),
            output: Some(dir.clone()),
            ..RegenArgs::default()
        },
    )
    .unwrap_err();

    assert!(matches!(err, CcuxError::GeneratorError(_)));
    assert_eq!(read_page(&dir), original);
    assert!(read_analysis(&dir).get("regeneration_history").is_none());
}

#[test]
fn regen_rejects_missing_selection_and_bad_names_without_calls() {
    let temp = TempDir::new().unwrap();
    let (dir, _) = make_project(temp.path());
    let fake = FakeGenerator::new(temp.path()).reply("unused");
    let session = session_for(&fake);

    let err = cmd_regen(
        &session,
        RegenArgs {
            output: Some(dir.clone()),
            ..RegenArgs::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);

    let err = cmd_regen(
        &session,
        RegenArgs {
            section: Some("hero-banner".to_string()),
            output: Some(dir),
            ..RegenArgs::default()
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid section name"));
    assert_eq!(fake.calls(), 0);
}

#[test]
fn regen_all_uses_existing_sections() {
    let temp = TempDir::new().unwrap();
    let (dir, _) = make_project(temp.path());
    let fake = FakeGenerator::new(temp.path())
        .reply("<!-- START: pricing -->\n<section><div>$5</div></section>\n<!-- END: pricing -->");

    cmd_regen(
        &session_for(&fake),
        RegenArgs {
            all: true,
            output: Some(dir.clone()),
            ..RegenArgs::default()
        },
    )
    .unwrap();

    assert!(fake.last_prompt().contains("hero, pricing, footer"));
    assert!(read_page(&dir).contains("$5"));
}

#[test]
fn editgen_sections_merges_only_returned_regions() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let new_pricing = "<section id=\"pricing\"><div>$12 per month</div></section>";
    let fake = FakeGenerator::new(temp.path()).reply(&format!(
        "```html\n<!-- START: pricing -->\n{}\n<!-- END: pricing -->\n```",
        new_pricing
    ));

    cmd_editgen(
        &session_for(&fake),
        EditgenArgs {
            instruction: "raise the price".to_string(),
            sections: Some("pricing".to_string()),
            output: Some(dir.clone()),
            ..EditgenArgs::default()
        },
    )
    .unwrap();

    let prompt = fake.last_prompt();
    assert!(prompt.contains(PRICING));
    assert!(!prompt.contains(FOOTER));
    assert_eq!(read_page(&dir), original.replace(PRICING, new_pricing));

    let history = &read_analysis(&dir)["edit_history"];
    assert_eq!(history[0]["instruction"], "raise the price");
    assert_eq!(history[0]["affected_sections"], serde_json::json!(["pricing"]));
}

#[test]
fn editgen_unknown_section_is_user_error() {
    let temp = TempDir::new().unwrap();
    let (dir, _) = make_project(temp.path());
    let fake = FakeGenerator::new(temp.path()).reply("unused");

    let err = cmd_editgen(
        &session_for(&fake),
        EditgenArgs {
            instruction: "add quotes".to_string(),
            sections: Some("testimonials".to_string()),
            output: Some(dir),
            ..EditgenArgs::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    assert!(err.to_string().contains("testimonials"));
    assert_eq!(fake.calls(), 0);
}

#[test]
fn editgen_rejected_output_leaves_page_untouched() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let fake = FakeGenerator::new(temp.path())
        .reply("Sorry, I can't make that change to the page without more details.");

    let err = cmd_editgen(
        &session_for(&fake),
        EditgenArgs {
            instruction: "make it pop".to_string(),
            output: Some(dir.clone()),
            ..EditgenArgs::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, CcuxError::ValidationError(_)));
    assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
    assert_eq!(read_page(&dir), original);
}

#[test]
fn editgen_whole_page_sends_page_and_replaces_it() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let edited = original.replace("Old headline", "New headline");
    let fake = FakeGenerator::new(temp.path()).reply(&edited);

    cmd_editgen(
        &session_for(&fake),
        EditgenArgs {
            instruction: "rewrite the hero headline".to_string(),
            output: Some(dir.clone()),
            ..EditgenArgs::default()
        },
    )
    .unwrap();

    let prompt = fake.last_prompt();
    assert!(prompt.contains("Old headline"));
    assert!(prompt.contains("Focus changes on these sections: hero"));
    assert_eq!(read_page(&dir), edited.trim());
}

#[test]
fn form_edit_writes_page_and_records_history() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let with_form = original.replace(
        FOOTER,
        "<footer><form><input type=\"email\" name=\"email\"><button>Join</button></form></footer>",
    );
    let fake = FakeGenerator::new(temp.path()).reply(&with_form);

    cmd_form(
        &session_for(&fake),
        FormArgs {
            state: "edit".to_string(),
            form_type: Some("newsletter".to_string()),
            cta: Some("Join".to_string()),
            output: Some(dir.clone()),
            ..FormArgs::default()
        },
    )
    .unwrap();

    assert!(fake.last_prompt().contains("newsletter"));
    assert!(read_page(&dir).contains("<form>"));
    let entry = &read_analysis(&dir)["form_history"][0];
    assert_eq!(entry["operation"], "edit");
    assert_eq!(entry["form_type"], "newsletter");
    assert_eq!(entry["fields"], serde_json::json!(["email"]));
    assert_eq!(entry["cta_text"], "Join");
}

#[test]
fn form_rejects_react_pages() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("site");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("App.jsx"), "function App() { return <div/>; }").unwrap();
    let fake = FakeGenerator::new(temp.path()).reply("unused");

    let err = cmd_form(
        &session_for(&fake),
        FormArgs {
            state: "on".to_string(),
            output: Some(dir),
            ..FormArgs::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    assert_eq!(fake.calls(), 0);
}

#[test]
fn theme_same_as_current_makes_no_calls() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let fake = FakeGenerator::new(temp.path()).reply("unused");

    cmd_theme(
        &session_for(&fake),
        ThemeArgs {
            new_theme: Some("minimal".to_string()),
            output: Some(dir.clone()),
            ..ThemeArgs::default()
        },
    )
    .unwrap();
    assert_eq!(fake.calls(), 0);
    assert_eq!(read_page(&dir), original);
}

#[test]
fn theme_change_reruns_visual_phases() {
    let temp = TempDir::new().unwrap();
    let (dir, original) = make_project(temp.path());
    let restyled = original.replace("<footer>", "<footer class=\"bg-gray-900\">");
    let fake = FakeGenerator::new(temp.path()).replies(&[
        r##"{"color_tokens": {"primary": "#0f172a"}}"##,
        r#"{"hero": {"layout": "split"}}"#,
        &restyled,
    ]);

    cmd_theme(
        &session_for(&fake),
        ThemeArgs {
            new_theme: Some("dark".to_string()),
            output: Some(dir.clone()),
            ..ThemeArgs::default()
        },
    )
    .unwrap();

    assert_eq!(fake.calls(), 3);
    assert!(fake.prompt(3).contains("#0f172a"));
    assert_eq!(read_page(&dir), restyled.trim());

    let analysis = read_analysis(&dir);
    assert_eq!(analysis["current_theme"], "dark");
    assert_eq!(analysis["theme"], "dark");
    assert_eq!(analysis["project_metadata"]["theme"], "dark");
    assert_eq!(analysis["design_system"]["color_tokens"]["primary"], "#0f172a");
    assert_eq!(analysis["theme_history"][0]["from_theme"], "minimal");
    assert_eq!(analysis["theme_history"][0]["to_theme"], "dark");
}

#[test]
fn theme_requires_analysis_file() {
    let temp = TempDir::new().unwrap();
    let (dir, _) = make_project(temp.path());
    std::fs::remove_file(dir.join(ANALYSIS_FILE)).unwrap();
    let fake = FakeGenerator::new(temp.path()).reply("unused");

    let err = cmd_theme(
        &session_for(&fake),
        ThemeArgs {
            new_theme: Some("dark".to_string()),
            output: Some(dir),
            ..ThemeArgs::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    assert_eq!(fake.calls(), 0);
}

#[test]
fn cost_reports_projects_and_rejects_plain_dirs() {
    let temp = TempDir::new().unwrap();
    let (dir, _) = make_project(temp.path());

    cmd_cost(CostArgs {
        project_dir: Some(dir),
        detailed: true,
        summary: true,
    })
    .unwrap();

    let err = cmd_cost(CostArgs {
        project_dir: Some(temp.path().to_path_buf()),
        ..CostArgs::default()
    })
    .unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn missing_output_dir_is_user_error() {
    let temp = TempDir::new().unwrap();
    let fake = FakeGenerator::new(temp.path()).reply("unused");
    let err = select_project_dir(&session_for(&fake), Some(&temp.path().join("nope"))).unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn dispatch_routes_help() {
    let temp = TempDir::new().unwrap();
    let fake = FakeGenerator::new(temp.path()).reply("unused");
    let session = session_for(&fake);

    dispatch(
        Some(Command::Help(HelpArgs {
            topic: Some("quickstart".to_string()),
        })),
        &session,
    )
    .unwrap();
    let err = dispatch(
        Some(Command::Help(HelpArgs {
            topic: Some("nope".to_string()),
        })),
        &session,
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}
