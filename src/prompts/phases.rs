//! Prompts for the research and design phases of a full generation run.
//!
//! Each phase asks for a JSON object; the shape is spelled out in the
//! prompt and read back by later phases through the lookup helpers.

use super::{join_or_none, list_at, pluck, text_at};
use crate::content::truncate_chars;
use crate::theme;
use serde_json::Value;

const JSON_ONLY: &str = "Respond with a single JSON object only, no prose and no markdown.";

pub fn reference_discovery_prompt(description: &str) -> String {
    format!(
        "Product: {description}\n\n\
         List 3 live websites of products similar to this one (product sites, not blogs or articles).\n\
         One per line in the form: Name – URL – short note"
    )
}

pub fn product_understanding_prompt(description: &str) -> String {
    format!(
        "Analyze this product: {description}\n\n\
         {JSON_ONLY}\n\
         {{\"problem\": \"core issue it solves\", \"user\": \"who needs it\", \
         \"differentiator\": \"why not the existing alternatives\", \
         \"best_feature\": \"what users will love most\", \
         \"risks\": \"how it could fail\"}}\n\
         Be concise and focus on the user's pain."
    )
}

/// UX analysis of reference sites. References are listed by URL.
pub fn ux_analysis_prompt(description: &str, references: &[String]) -> String {
    let refs = references
        .iter()
        .map(|r| format!("- {}", r))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Competitive UX analysis for: {description}\n\n\
         Reference sites:\n{refs}\n\n\
         {JSON_ONLY}\n\
         {{\n\
         \x20 \"patterns\": {{\"navigation\": [], \"ctas\": [], \"layouts\": [], \"messaging\": []}},\n\
         \x20 \"differentiators\": [{{\"reference\": \"\", \"element\": \"\", \"why\": \"\"}}],\n\
         \x20 \"weaknesses\": {{\"common\": [], \"severe\": []}},\n\
         \x20 \"recommendations\": {{\"adopt\": [], \"avoid\": [], \"innovate\": []}},\n\
         \x20 \"summary\": \"one or two sentences\"\n\
         }}\n\
         Be specific and mobile-first."
    )
}

pub fn empathize_prompt(description: &str, understanding: &Value, ux_analysis: &Value) -> String {
    let problem = truncate_chars(&text_at(understanding, &["problem"], "N/A"), 200);
    let user = truncate_chars(&text_at(understanding, &["user"], "N/A"), 200);
    let differentiator = truncate_chars(&text_at(understanding, &["differentiator"], "N/A"), 200);
    let navigation = join_or_none(&list_at(ux_analysis, &["patterns", "navigation"]));
    let adopt = join_or_none(&list_at(ux_analysis, &["recommendations", "adopt"]));
    let avoid = join_or_none(&list_at(ux_analysis, &["recommendations", "avoid"]));

    format!(
        "Product: {description}\n\n\
         Understanding:\n\
         - Problem: {problem}\n\
         - User: {user}\n\
         - Differentiator: {differentiator}\n\n\
         UX insights:\n\
         - Navigation patterns: {navigation}\n\
         - Adopt: {adopt}\n\
         - Avoid: {avoid}\n\n\
         Map the visitor's situation and questions. {JSON_ONLY}\n\
         {{\n\
         \x20 \"context\": {{\"device\": \"\", \"channels\": [], \"immediate_need\": \"\"}},\n\
         \x20 \"questions\": {{\"identity\": [], \"value\": [], \"trust\": []}},\n\
         \x20 \"conversion\": {{\"primary\": \"\", \"secondary\": [], \"required_info\": []}},\n\
         \x20 \"personas\": [{{\"name\": \"\", \"role\": \"\", \"urgency\": \"\", \"decision_process\": \"\", \"content_needs\": []}}],\n\
         \x20 \"touchpoints\": {{\"first_impression\": \"\", \"dropoff_risk\": \"\", \"persuasive_element\": \"\"}},\n\
         \x20 \"research_gaps\": []\n\
         }}\n\
         Quote real visitor questions and focus on behavior."
    )
}

pub fn define_prompt(description: &str, user_research: &Value) -> String {
    let goal = text_at(user_research, &["conversion", "primary"], "N/A");
    let need = text_at(user_research, &["context", "immediate_need"], "N/A");
    let questions = join_or_none(&list_at(user_research, &["questions", "value"]));
    let personas = user_research
        .get("personas")
        .and_then(Value::as_array)
        .map(|ps| {
            ps.iter()
                .map(|p| format!("{} ({})", text_at(p, &["name"], "N/A"), text_at(p, &["role"], "")))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    let personas = join_or_none(&personas);

    format!(
        "Product: {description}\n\n\
         Research:\n\
         - Conversion goal: {goal}\n\
         - Immediate need: {need}\n\
         - Value questions: {questions}\n\
         - Personas: {personas}\n\n\
         Define the site flow. {JSON_ONLY}\n\
         {{\n\
         \x20 \"core_pages\": {{\"homepage\": {{\"job\": \"\", \"must_show\": [], \"next_step\": \"\"}}, \"key_secondary\": []}},\n\
         \x20 \"primary_flow\": {{\"steps\": [], \"dropoff_points\": [], \"support_elements\": []}},\n\
         \x20 \"alternate_paths\": {{\"price_concerns\": \"\", \"trust_issues\": \"\", \"feature_questions\": \"\"}},\n\
         \x20 \"navigation\": {{\"global_nav\": [], \"mobile_priority\": \"\", \"footer_strategy\": \"\"}},\n\
         \x20 \"conflicts\": [],\n\
         \x20 \"research_gaps\": []\n\
         }}\n\
         Name concrete UI elements and flag conflicts."
    )
}

pub fn ideate_prompt(description: &str, user_research: &Value, site_flow: &Value) -> String {
    let goal = text_at(user_research, &["conversion", "primary"], "N/A");
    let questions = join_or_none(&list_at(user_research, &["questions", "value"]));
    let must_show = join_or_none(&list_at(site_flow, &["core_pages", "homepage", "must_show"]));
    let steps = join_or_none(&list_at(site_flow, &["primary_flow", "steps"]));

    format!(
        "Product: {description}\n\n\
         Inputs:\n\
         - Conversion goal: {goal}\n\
         - Value questions: {questions}\n\
         - Homepage must show: {must_show}\n\
         - Primary flow: {steps}\n\n\
         Write the content strategy. {JSON_ONLY}\n\
         {{\n\
         \x20 \"core_messaging\": {{\"value_proposition\": \"\", \"unique_angle\": \"\"}},\n\
         \x20 \"hero\": {{\"headline\": \"\", \"subhead\": \"\", \"primary_cta\": \"\", \"supporting_element\": \"\"}},\n\
         \x20 \"benefits\": [{{\"headline\": \"\", \"proof_point\": \"\", \"icon_concept\": \"\"}}],\n\
         \x20 \"objections\": {{\"top_3_concerns\": [], \"faq_answers\": [{{\"question\": \"\", \"answer\": \"\"}}], \"trust_elements\": []}},\n\
         \x20 \"ctas\": {{\"primary_action\": \"\", \"secondary_action\": \"\", \"microcopy\": \"\"}},\n\
         \x20 \"rules\": {{\"tone\": \"\", \"avoid\": [], \"must_include\": []}}\n\
         }}\n\
         Outcome-focused; reuse the visitor's own words where possible."
    )
}

pub fn wireframe_prompt(description: &str, content_strategy: &Value, site_flow: &Value) -> String {
    let hero = text_at(content_strategy, &["hero", "headline"], "N/A");
    let benefits = join_or_none(&pluck(content_strategy, &["benefits"], "headline"));
    let cta = text_at(content_strategy, &["ctas", "primary_action"], "N/A");
    let pages = site_flow
        .get("core_pages")
        .and_then(Value::as_object)
        .map(|pages| pages.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    let pages = join_or_none(&pages);
    let mobile = text_at(site_flow, &["navigation", "mobile_priority"], "N/A");

    format!(
        "Product: {description}\n\n\
         Content:\n\
         - Hero: {hero}\n\
         - Benefits: {benefits}\n\
         - Primary CTA: {cta}\n\n\
         Flow:\n\
         - Pages: {pages}\n\
         - Mobile nav priority: {mobile}\n\n\
         Produce wireframes. {JSON_ONLY}\n\
         {{\n\
         \x20 \"layout\": {{\"sections\": [{{\"name\": \"hero\", \"elements\": [], \"mobile_stack\": [], \"priority\": \"\"}}]}},\n\
         \x20 \"mobile_checks\": {{\"critical\": [], \"red_flags\": []}},\n\
         \x20 \"interactions\": {{\"key\": [{{\"element\": \"\", \"behavior\": \"\", \"mobile_consideration\": \"\"}}]}},\n\
         \x20 \"responsive\": {{\"breakpoints\": {{\"mobile\": {{\"rules\": []}}, \"tablet\": {{\"rules\": []}}}}}}\n\
         }}\n\
         Mobile first; the primary CTA must always be visible."
    )
}

pub fn design_system_prompt(
    description: &str,
    wireframes: &Value,
    content_strategy: &Value,
    theme_name: &str,
) -> String {
    let sections = join_or_none(&pluck(wireframes, &["layout", "sections"], "name"));
    let checks = join_or_none(&list_at(wireframes, &["mobile_checks", "critical"]));
    let tone = text_at(content_strategy, &["rules", "tone"], "Professional");
    let rules = theme::design_system_rules(theme_name);

    format!(
        "Product: {description}\n\n\
         Wireframe sections: {sections}\n\
         Mobile checks: {checks}\n\
         Tone: {tone}\n\n\
         Define the design system. {JSON_ONLY}\n\
         {{\n\
         \x20 \"typography\": {{\"typeface_choice\": \"\", \"brand_rationale\": \"\", \"heading_hierarchy\": {{\"h1\": \"\", \"h2\": \"\", \"h3\": \"\"}}, \"body_text\": \"\"}},\n\
         \x20 \"color_tokens\": {{\"primary\": \"#\", \"primary_light\": \"#\", \"primary_dark\": \"#\", \"secondary\": \"#\", \"accent\": \"#\", \
         \"surface\": \"#\", \"background\": \"#\", \"text_primary\": \"#\", \"text_secondary\": \"#\", \"border\": \"#\"}},\n\
         \x20 \"gradients\": {{\"primary_gradient\": \"\", \"hero_gradient\": \"\"}},\n\
         \x20 \"shadows\": {{\"card_shadow\": \"\", \"button_shadow\": \"\", \"hover_shadow\": \"\"}},\n\
         \x20 \"animations\": {{\"duration\": {{\"fast\": \"150ms\", \"normal\": \"300ms\", \"slow\": \"500ms\"}}, \"easing\": {{}}}},\n\
         \x20 \"wcag_contrast\": {{\"primary_cta\": \"X.X:1\", \"body_text\": \"X.X:1\", \"accessible\": \"true/false\"}},\n\
         \x20 \"signature_elements\": [{{\"element\": \"\", \"specification\": \"\", \"usage\": \"\"}}],\n\
         \x20 \"components\": {{\"buttons\": {{}}, \"inputs\": {{}}, \"cards\": {{}}}},\n\
         \x20 \"spacing_system\": {{\"scale\": [], \"usage\": \"\"}},\n\
         \x20 \"border_radius\": {{}},\n\
         \x20 \"logo_concept\": {{\"style\": \"\", \"elements\": \"\", \"colors\": \"\"}},\n\
         \x20 \"summary\": \"\"\n\
         }}\n\n\
         {rules}\n\n\
         Keep contrast at WCAG AA or better."
    )
}

pub fn high_fidelity_prompt(
    description: &str,
    design_system: &Value,
    wireframes: &Value,
    content_strategy: &Value,
) -> String {
    let typeface = text_at(design_system, &["typography", "typeface_choice"], "N/A");
    let primary = text_at(design_system, &["color_tokens", "primary"], "N/A");
    let signature = join_or_none(&pluck(design_system, &["signature_elements"], "element"));
    let sections = join_or_none(&pluck(wireframes, &["layout", "sections"], "name"));
    let tone = text_at(content_strategy, &["rules", "tone"], "Professional");

    format!(
        "Product: {description}\n\n\
         Design system:\n\
         - Typeface: {typeface}\n\
         - Primary color: {primary}\n\
         - Signature elements: {signature}\n\
         Sections: {sections}\n\
         Tone: {tone}\n\n\
         Turn this into high-fidelity design specifications. {JSON_ONLY}\n\
         {{\n\
         \x20 \"design_specifications\": {{\"typography\": \"\", \"colors\": \"\", \"spacing\": \"\", \"components\": \"\"}},\n\
         \x20 \"interactions\": {{\"hover_states\": \"\", \"transitions\": \"\", \"responsive\": \"\"}},\n\
         \x20 \"accessibility\": {{\"contrast\": \"\", \"typography\": \"\", \"navigation\": \"\"}},\n\
         \x20 \"implementation_ready\": \"\"\n\
         }}"
    )
}

/// Final copy for every section.
pub fn prototype_prompt(
    description: &str,
    content_strategy: &Value,
    design_system: &Value,
    wireframes: &Value,
) -> String {
    let value_prop = text_at(content_strategy, &["core_messaging", "value_proposition"], "N/A");
    let hero = text_at(content_strategy, &["hero", "headline"], "N/A");
    let cta = text_at(content_strategy, &["ctas", "primary_action"], "N/A");
    let tone = text_at(content_strategy, &["rules", "tone"], "Professional");
    let sections = join_or_none(&pluck(wireframes, &["layout", "sections"], "name"));
    let personality = text_at(design_system, &["typography", "brand_rationale"], "Modern and clean");

    format!(
        "Product: {description}\n\n\
         Messaging:\n\
         - Value proposition: {value_prop}\n\
         - Hero: {hero}\n\
         - Primary CTA: {cta}\n\
         - Tone: {tone}\n\
         Sections: {sections}\n\
         Brand personality: {personality}\n\n\
         Write the final page copy. {JSON_ONLY}\n\
         {{\n\
         \x20 \"hero\": {{\"headline\": \"\", \"subheadline\": \"\", \"cta_primary\": \"\", \"cta_secondary\": \"\"}},\n\
         \x20 \"problem\": {{\"headline\": \"\", \"description\": \"\", \"pain_points\": []}},\n\
         \x20 \"solution\": {{\"headline\": \"\", \"value_proposition\": \"\", \"key_benefits\": []}},\n\
         \x20 \"features\": {{\"headline\": \"\", \"features\": [{{\"title\": \"\", \"description\": \"\", \"benefit\": \"\"}}]}},\n\
         \x20 \"social_proof\": {{\"headline\": \"\", \"testimonial\": \"\", \"stats\": []}},\n\
         \x20 \"pricing\": {{\"headline\": \"\", \"plan_name\": \"\", \"price\": \"\", \"features\": [], \"cta\": \"\"}},\n\
         \x20 \"footer\": {{\"cta_headline\": \"\", \"cta_description\": \"\", \"cta_button\": \"\"}}\n\
         }}\n\
         Lead with benefits, answer objections, keep the tone consistent."
    )
}
