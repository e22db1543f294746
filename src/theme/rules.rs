//! Tailwind utility rules injected into regeneration and edit prompts.

/// Utility-class requirements for a theme.
///
/// Themes without a dedicated block get a single generic instruction.
pub fn utility_rules(theme: &str) -> String {
    let block = match theme {
        "brutalist" => {
            "BRUTALIST THEME REQUIREMENTS - MUST FOLLOW EXACTLY:\n\
             - Colors limited to: bg-black, bg-white, bg-red-600, bg-yellow-400\n\
             - Text styles limited to: font-black, font-bold, uppercase, tracking-tight, tracking-wide\n\
             - Every section carries the classes brutalist-border and brutalist-shadow\n\
             - Typography: JetBrains Mono (already loaded)\n\
             - No rounded corners, gradients or soft shadows\n\
             - Buttons: brutalist-border brutalist-shadow hover:translate-x-1 hover:translate-y-1 hover:shadow-none\n\
             - Black text on white or yellow, white text on black or red"
        }
        "minimal" => {
            "MINIMAL THEME REQUIREMENTS - MUST FOLLOW EXACTLY:\n\
             - Neutral colors: bg-white, bg-gray-50, bg-gray-100, text-gray-900, text-gray-600\n\
             - Typography: font-normal, font-medium, font-semibold (never font-black)\n\
             - Generous whitespace: py-16, py-24, space-y-8, space-y-12\n\
             - Subtle borders: border border-gray-200, rounded-lg\n\
             - Buttons: bg-blue-600 hover:bg-blue-700 rounded-md px-6 py-3\n\
             - Shadows: shadow-sm, shadow-md only"
        }
        "playful" => {
            "PLAYFUL THEME REQUIREMENTS - MUST FOLLOW EXACTLY:\n\
             - Bright colors: bg-pink-500, bg-purple-500, bg-blue-500, bg-yellow-400, bg-green-500\n\
             - Rounded elements: rounded-xl, rounded-2xl, rounded-full\n\
             - Typography: font-bold, font-extrabold\n\
             - Motion: hover:scale-105 transition-transform\n\
             - Gradients: bg-gradient-to-r from-pink-500 to-purple-500\n\
             - Asymmetrical, playful spacing"
        }
        "corporate" => {
            "CORPORATE THEME REQUIREMENTS - MUST FOLLOW EXACTLY:\n\
             - Colors: bg-blue-900, bg-gray-800, bg-white, text-blue-900\n\
             - Typography: font-medium, font-semibold\n\
             - Structured grid layouts with even spacing\n\
             - Shadows: shadow-lg, shadow-xl\n\
             - Buttons: bg-blue-600 hover:bg-blue-700"
        }
        "terminal" => {
            "TERMINAL THEME REQUIREMENTS - MUST FOLLOW EXACTLY:\n\
             - Colors: bg-black, bg-gray-900, text-green-400, text-green-300\n\
             - Font: font-mono (already loaded)\n\
             - Accents: border-green-500, bg-green-500/10\n\
             - Command-line details: $ prompts and code blocks\n\
             - Sharp edges, no rounded corners\n\
             - Glow: animate-pulse on text-green-400 accents"
        }
        "dark" => {
            "DARK THEME REQUIREMENTS - MUST FOLLOW EXACTLY:\n\
             - Backgrounds: bg-gray-900, bg-gray-800, bg-black\n\
             - Text: text-white, text-gray-100, text-gray-300\n\
             - Accents: bg-blue-600, bg-purple-600, bg-indigo-600\n\
             - Borders: border-gray-700, border-gray-600\n\
             - Keep contrast high"
        }
        "morphism" => {
            "MORPHISM THEME REQUIREMENTS - MUST FOLLOW EXACTLY:\n\
             - Backgrounds: bg-gray-100, bg-white, bg-gradient-to-br\n\
             - Glass: backdrop-blur-sm, bg-white/20, border border-white/20\n\
             - Shadows: shadow-xl, shadow-2xl\n\
             - Corners: rounded-xl, rounded-2xl\n\
             - Translucent accents: bg-blue-500/10, text-gray-700"
        }
        other => {
            return format!(
                "Follow {} theme guidelines with appropriate colors and styling",
                other
            );
        }
    };

    block.to_string()
}
