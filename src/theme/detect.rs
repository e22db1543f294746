//! Keyword-scoring theme classifier.
//!
//! Scores lowercased page text against utility-class signals for the six
//! themes with distinctive markup. The highest score wins (ties go to the
//! earlier theme in [`SCORED_ORDER`]) when it reaches [`MIN_SCORE`];
//! otherwise a second set of substring checks picks a theme, with
//! `minimal` as the final default.

/// Scored themes, in tie-break priority order.
pub const SCORED_ORDER: [&str; 6] = [
    "brutalist",
    "morphism",
    "terminal",
    "playful",
    "corporate",
    "dark",
];

/// Minimum score for a scored theme to win.
pub const MIN_SCORE: u32 = 5;

/// Per-theme scores for `content`, in [`SCORED_ORDER`] order.
pub fn score(content: &str) -> [(&'static str, u32); 6] {
    let text = content.to_lowercase();
    let has = |needle: &str| text.contains(needle);
    let any = |needles: &[&str]| needles.iter().any(|n| text.contains(n));

    let mut brutalist = 0;
    if has("brutalist-border") {
        brutalist += 10;
    }
    if has("brutalist-shadow") {
        brutalist += 10;
    }
    if has("font-black") {
        brutalist += 5;
    }
    if has("font-bold uppercase") {
        brutalist += 3;
    }
    if has("bg-red-600") && has("bg-yellow-400") {
        brutalist += 5;
    }
    if has("jetbrains mono") {
        brutalist += 3;
    }

    let mut morphism = 0;
    if has("backdrop-filter") {
        morphism += 10;
    }
    if has("glassmorphism") {
        morphism += 10;
    }
    if has("neumorphism") {
        morphism += 10;
    }
    if any(&["bg-white/20", "bg-opacity-"]) {
        morphism += 5;
    }

    let mut terminal = 0;
    if has("font-mono") {
        terminal += 5;
    }
    if any(&["text-green-400", "text-green-500"]) {
        terminal += 5;
    }
    if has("border-green-500") {
        terminal += 5;
    }
    if has("animate-pulse") && has("green") {
        terminal += 3;
    }
    if has("terminal") {
        terminal += 3;
    }

    let mut playful = 0;
    if any(&["rounded-xl", "rounded-2xl"]) {
        playful += 5;
    }
    if any(&["bg-pink-", "bg-purple-"]) {
        playful += 5;
    }
    if has("hover:scale-") {
        playful += 3;
    }
    if has("gradient") && any(&["pink", "purple"]) {
        playful += 5;
    }

    let mut corporate = 0;
    if any(&["bg-blue-900", "bg-blue-800"]) {
        corporate += 5;
    }
    if any(&["shadow-lg", "shadow-xl"]) {
        corporate += 3;
    }
    if any(&["corporate", "professional"]) {
        corporate += 5;
    }

    let mut dark = 0;
    if has("dark") && has("theme") {
        dark += 10;
    }
    if has("bg-gray-900") {
        dark += 5;
    }
    if any(&["text-gray-100", "text-white"]) {
        dark += 3;
    }
    if has("border-gray-700") {
        dark += 3;
    }

    [
        ("brutalist", brutalist),
        ("morphism", morphism),
        ("terminal", terminal),
        ("playful", playful),
        ("corporate", corporate),
        ("dark", dark),
    ]
}

/// Classify page content into a theme key.
pub fn detect_theme(content: &str) -> &'static str {
    let scores = score(content);

    // max_by_key keeps the last maximum; fold keeps the first.
    let (best, best_score) = scores
        .iter()
        .fold(("minimal", 0u32), |acc, &(name, s)| {
            if s > acc.1 { (name, s) } else { acc }
        });

    if best_score >= MIN_SCORE {
        return best;
    }

    let text = content.to_lowercase();
    let any = |needles: &[&str]| needles.iter().any(|n| text.contains(n));

    if any(&["neon", "cyber", "retro"]) {
        "aesthetic"
    } else if any(&["vibrant", "dopamine"]) {
        "vibrant"
    } else if any(&["sustainable", "eco"]) {
        "sustainable"
    } else if any(&["data", "dashboard", "analytics"]) {
        "data"
    } else if any(&["illustrated", "illustration"]) {
        "illustrated"
    } else if text.contains("animation") && any(&["transform", "keyframes"]) {
        "animated"
    } else {
        "minimal"
    }
}
