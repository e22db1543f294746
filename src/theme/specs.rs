//! Built-in theme specifications.

/// Visual characteristics of a theme, one line each.
#[derive(Debug, Clone, Copy)]
pub struct VisualCharacteristics {
    pub color_palette: &'static str,
    pub typography: &'static str,
    pub spacing: &'static str,
    pub components: &'static str,
    pub interactions: &'static str,
    pub layout: &'static str,
}

/// A named visual style the prompts ask the generator to follow.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSpec {
    /// Lookup key (`minimal`, `brutalist`, ...).
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub target_audience: &'static str,
    pub design_philosophy: &'static str,
    pub visual: VisualCharacteristics,
    pub accessibility_priority: &'static str,
    pub implementation_notes: &'static str,
}

/// Grouping used by `help themes` and the interactive picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCategory {
    Core,
    Modern,
    Specialized,
}

impl ThemeCategory {
    pub const ALL: [ThemeCategory; 3] = [Self::Core, Self::Modern, Self::Specialized];

    pub fn label(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Modern => "Modern",
            Self::Specialized => "Specialized",
        }
    }

    pub fn members(self) -> &'static [&'static str] {
        match self {
            Self::Core => &["minimal", "brutalist", "playful", "corporate"],
            Self::Modern => &["morphism", "animated", "terminal", "aesthetic"],
            Self::Specialized => &["dark", "vibrant", "sustainable", "data", "illustrated"],
        }
    }
}

pub static THEMES: [ThemeSpec; 13] = [
    ThemeSpec {
        key: "minimal",
        name: "Minimal",
        description: "Clean, content-focused design following Dieter Rams' principles of good design",
        use_cases: &["B2B SaaS platforms", "Professional services", "Documentation sites", "Portfolio websites"],
        target_audience: "Professional users who value efficiency and clarity",
        design_philosophy: "Less but better: remove visual noise so content and function lead",
        visual: VisualCharacteristics {
            color_palette: "Monochromatic with a single accent color",
            typography: "Sans-serif with high readability (Inter, system fonts)",
            spacing: "Generous whitespace on an 8px grid",
            components: "Flat surfaces, subtle borders, minimal shadows",
            interactions: "Subtle hover states, no exaggerated animation",
            layout: "Grid-based with plenty of breathing room",
        },
        accessibility_priority: "AAA compliance, highest readability standards",
        implementation_notes: "Lead with typographic hierarchy, use system fonts, skip decorative elements",
    },
    ThemeSpec {
        key: "brutalist",
        name: "Brutalist",
        description: "Raw, honest design inspired by Brutalist architecture, bold and uncompromising",
        use_cases: &["Creative agencies", "Art portfolios", "Experimental products", "Bold brand statements"],
        target_audience: "Design-forward users who enjoy unconventional aesthetics",
        design_philosophy: "Raw materials, honest construction, bold geometric forms",
        visual: VisualCharacteristics {
            color_palette: "High contrast monochrome with one bold accent",
            typography: "Heavy sans-serif (Helvetica Bold, Arial Black)",
            spacing: "Tight spacing, overlapping elements, asymmetry",
            components: "Sharp edges, no rounded corners, heavy borders",
            interactions: "Abrupt state changes without easing",
            layout: "Asymmetrical, overlapping sections, deliberate grid breaks",
        },
        accessibility_priority: "AA compliance with high contrast ratios",
        implementation_notes: "System fonts at heavy weights, no gradients, hard edges everywhere",
    },
    ThemeSpec {
        key: "playful",
        name: "Playful",
        description: "Joyful, approachable design using organic shapes and vibrant colors",
        use_cases: &["Consumer apps", "Children's products", "Entertainment platforms", "Creative tools"],
        target_audience: "General consumers looking for delightful experiences",
        design_philosophy: "Design should spark joy and build an emotional connection",
        visual: VisualCharacteristics {
            color_palette: "Bright saturated colors with rainbow gradients",
            typography: "Rounded fonts in varied weights (Circular, Nunito)",
            spacing: "Organic spacing with playful asymmetry",
            components: "Rounded corners, soft shadows, gradient backgrounds",
            interactions: "Bouncy animation, micro-interactions, spring physics",
            layout: "Flowing organic shapes and circular elements",
        },
        accessibility_priority: "AA compliance with careful color contrast management",
        implementation_notes: "CSS custom properties for color variants, spring-like transitions",
    },
    ThemeSpec {
        key: "corporate",
        name: "Corporate",
        description: "Traditional, trustworthy design following established business conventions",
        use_cases: &["Financial services", "Healthcare", "Government", "Enterprise software"],
        target_audience: "Business professionals who need trust and reliability signals",
        design_philosophy: "Established patterns that signal competence and trust",
        visual: VisualCharacteristics {
            color_palette: "Conservative blue-based palette",
            typography: "Traditional serif and sans pairings (Georgia, Arial)",
            spacing: "Structured grid with consistent margins",
            components: "Traditional buttons, formal layouts, subtle shadows",
            interactions: "Conservative, predictable animation",
            layout: "Hierarchical with left-to-right reading flow",
        },
        accessibility_priority: "WCAG 2.1 AA minimum",
        implementation_notes: "Established UI patterns only, no experimental layouts",
    },
    ThemeSpec {
        key: "morphism",
        name: "Morphism",
        description: "Soft, tactile design combining neumorphism and glassmorphism",
        use_cases: &["Mobile apps", "Design portfolios", "Premium products", "UI/UX showcases"],
        target_audience: "Design enthusiasts and users of premium digital products",
        design_philosophy: "Skeuomorphic depth that feels tangible on screen",
        visual: VisualCharacteristics {
            color_palette: "Soft muted backgrounds with subtle color shifts",
            typography: "Soft rounded fonts (SF Pro, Poppins)",
            spacing: "Generous padding for a tactile feel",
            components: "Inset and outset shadows, glass panels, soft borders",
            interactions: "Pressure-like depth changes",
            layout: "Layered depth with floating elements",
        },
        accessibility_priority: "AA compliance with extra care for text on glass",
        implementation_notes: "Layered box-shadows for depth, backdrop-filter for glass, use sparingly",
    },
    ThemeSpec {
        key: "animated",
        name: "Animated",
        description: "Motion-first design where animation drives the story",
        use_cases: &["Interactive storytelling", "Product launches", "Creative portfolios", "Brand experiences"],
        target_audience: "Users looking for engaging, immersive experiences",
        design_philosophy: "Motion is a design material that guides attention",
        visual: VisualCharacteristics {
            color_palette: "Dynamic colors that respond to interaction",
            typography: "Variable and web fonts that animate well",
            spacing: "Fluid spacing that adapts to motion",
            components: "Elements built to transform",
            interactions: "Choreographed sequences and gesture responses",
            layout: "Scenes that change with scroll and interaction",
        },
        accessibility_priority: "AA compliance honoring prefers-reduced-motion",
        implementation_notes: "CSS animations and transforms, reduced-motion fallbacks, keep it fast",
    },
    ThemeSpec {
        key: "terminal",
        name: "Terminal",
        description: "Monospace, CLI-inspired aesthetic for developers and tech enthusiasts",
        use_cases: &["Developer tools", "Technical documentation", "API platforms", "Security tools"],
        target_audience: "Developers, system administrators, technical users",
        design_philosophy: "Borrow the look and feel of command-line interfaces",
        visual: VisualCharacteristics {
            color_palette: "Green or amber text on dark backgrounds",
            typography: "Monospace only (Fira Code, JetBrains Mono)",
            spacing: "Character-grid spacing",
            components: "ASCII accents and code-block styling",
            interactions: "Typewriter reveals and blinking cursors",
            layout: "Terminal window metaphors with fixed-width columns",
        },
        accessibility_priority: "High contrast support and screen reader friendly markup",
        implementation_notes: "Use ch units for spacing, typewriter effects, small ASCII art",
    },
    ThemeSpec {
        key: "aesthetic",
        name: "Aesthetic",
        description: "Retro-futuristic design drawing from Y2K, vaporwave and cyber styles",
        use_cases: &["Creative platforms", "Music and entertainment", "Fashion brands", "Art communities"],
        target_audience: "Gen Z and millennial users drawn to nostalgic digital culture",
        design_philosophy: "Nostalgic digital styles rebuilt with modern usability",
        visual: VisualCharacteristics {
            color_palette: "Dark navy or black base with neon cyan, magenta and electric blue accents",
            typography: "Retro-futuristic display fonts, white or cyan text on dark backgrounds",
            spacing: "Modern grid with retro accents and generous padding",
            components: "Neon-outlined components on dark surfaces",
            interactions: "Subtle neon glows that never reduce readability",
            layout: "Dark layouts with bright accents at 4.5:1 contrast or better",
        },
        accessibility_priority: "WCAG AA, every text pairing at 4.5:1 or better",
        implementation_notes: "Dark backgrounds (rgb(15,23,42) or darker) with bright text only; glow is additive to contrast, never a replacement",
    },
    ThemeSpec {
        key: "dark",
        name: "Dark",
        description: "Modern dark theme tuned for contrast and reduced eye strain",
        use_cases: &["Developer tools", "Creative portfolios", "Entertainment platforms", "Productivity apps"],
        target_audience: "Night-owl users, developers, gamers and professionals",
        design_philosophy: "Content first with reduced luminance",
        visual: VisualCharacteristics {
            color_palette: "Dark grays and blacks with teal, purple or green accents",
            typography: "Highly readable sans-serif (Inter, Roboto)",
            spacing: "Balanced spacing that keeps dark surfaces clear",
            components: "High-contrast buttons, glowing outlines, subtle elevation",
            interactions: "Smooth transitions and glowing hovers",
            layout: "Dark surfaces with accent highlights",
        },
        accessibility_priority: "WCAG AA with 4.5:1 minimum contrast",
        implementation_notes: "Check every pairing; no low-contrast grays on dark backgrounds",
    },
    ThemeSpec {
        key: "vibrant",
        name: "Vibrant",
        description: "Colorful, dopamine-rich design that energizes every interaction",
        use_cases: &["Marketing websites", "Consumer products", "Music apps", "Startups"],
        target_audience: "Younger audiences and casual consumers",
        design_philosophy: "Bold bright color that reads as energy",
        visual: VisualCharacteristics {
            color_palette: "Purple-pink and orange-teal gradients",
            typography: "Bold expressive fonts (Montserrat, Gilroy)",
            spacing: "Dynamic asymmetric spacing",
            components: "Colorful buttons, gradient panels, pop shadows",
            interactions: "Animated gradients, hover glows, micro-motion",
            layout: "Hero-first with a loud call to action",
        },
        accessibility_priority: "AA compliance with balanced saturation",
        implementation_notes: "CSS gradients without oversaturation; test text over gradients",
    },
    ThemeSpec {
        key: "sustainable",
        name: "Sustainable",
        description: "Nature-inspired design for eco-conscious brands",
        use_cases: &["Environmental organizations", "Eco products", "Sustainable brands", "Wellness platforms"],
        target_audience: "Eco-conscious consumers and businesses",
        design_philosophy: "Calm natural aesthetics that signal environmental care",
        visual: VisualCharacteristics {
            color_palette: "Greens, browns and muted earth tones",
            typography: "Clean organic fonts (Lora, Poppins)",
            spacing: "Airy layouts with ample whitespace",
            components: "Soft corners, natural textures, leaf motifs",
            interactions: "Gentle fades and smooth transitions",
            layout: "Grounded natural hierarchy with open sections",
        },
        accessibility_priority: "AA compliance against muted palettes",
        implementation_notes: "Prefer muted natural tones over neon greens, keep contrast",
    },
    ThemeSpec {
        key: "data",
        name: "Data",
        description: "Information-dense design for dashboards and analytics products",
        use_cases: &["Analytics dashboards", "Finance apps", "Enterprise SaaS", "Developer tools"],
        target_audience: "Analysts and data-driven technical teams",
        design_philosophy: "Clarity and efficiency for dense information",
        visual: VisualCharacteristics {
            color_palette: "Blue and gray neutrals with strong highlight accents",
            typography: "Readable sans-serif (Roboto, IBM Plex Sans)",
            spacing: "Tight grid spacing for dense content",
            components: "Charts, tables and cards with strong hierarchy",
            interactions: "Tooltips, filtering and sorting transitions",
            layout: "Modular grids tuned for scanning",
        },
        accessibility_priority: "AAA clarity for dense information",
        implementation_notes: "Colorblind-safe chart palettes with text alternatives",
    },
    ThemeSpec {
        key: "illustrated",
        name: "Illustrated",
        description: "Hand-drawn, illustration-led design with a human feel",
        use_cases: &["Creative startups", "Onboarding flows", "Educational platforms", "Community websites"],
        target_audience: "Casual users, students and creative professionals",
        design_philosophy: "Warmth and personality through illustration",
        visual: VisualCharacteristics {
            color_palette: "Soft pastels with playful accents",
            typography: "Rounded friendly fonts (Nunito, Quicksand)",
            spacing: "Organic spacing around flowing shapes",
            components: "Illustration-heavy blocks and custom icons",
            interactions: "Playful micro-interactions",
            layout: "Centered storytelling layouts",
        },
        accessibility_priority: "AA compliance; illustrations never carry meaning alone",
        implementation_notes: "Lightweight inline SVG illustrations",
    },
];

/// Look up a theme by key.
pub fn get(key: &str) -> Option<&'static ThemeSpec> {
    THEMES.iter().find(|t| t.key == key)
}

/// Theme-specific design-system rules for the design system prompt.
///
/// Returns an empty string for unknown themes.
pub fn design_system_rules(key: &str) -> String {
    let Some(theme) = get(key) else {
        return String::new();
    };
    let v = &theme.visual;

    format!(
        "THEME-SPECIFIC DESIGN SYSTEM RULES FOR {upper}:\n\n\
         Philosophy: {philosophy}\n\
         Target Use: {uses}\n\n\
         Visual Requirements:\n\
         - Colors: {colors}\n\
         - Typography: {typography}\n\
         - Spacing: {spacing}\n\
         - Components: {components}\n\
         - Interactions: {interactions}\n\
         - Layout: {layout}\n\n\
         Accessibility: {a11y}\n\
         Implementation Notes: {notes}\n\n\
         CRITICAL: All design tokens must align with these {name} theme characteristics.",
        upper = theme.name.to_uppercase(),
        philosophy = theme.design_philosophy,
        uses = theme.use_cases.iter().take(2).copied().collect::<Vec<_>>().join(", "),
        colors = v.color_palette,
        typography = v.typography,
        spacing = v.spacing,
        components = v.components,
        interactions = v.interactions,
        layout = v.layout,
        a11y = theme.accessibility_priority,
        notes = theme.implementation_notes,
        name = theme.name,
    )
}
