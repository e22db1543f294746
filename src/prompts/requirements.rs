//! Requirement blocks shared by the page-producing prompts.

/// Navigation, responsiveness and CTA requirements.
pub(crate) fn functional_requirements(include_forms: bool) -> String {
    let cta_line = if include_forms {
        "   - Primary CTA is either a mailto: link or a working contact form \
         (action=\"#\" method=\"POST\", email input, submit button, client-side validation)"
    } else {
        "   - Primary CTA is a mailto: link"
    };

    format!(
        "FUNCTIONAL REQUIREMENTS:\n\
         \n\
         1. Navigation\n\
         \x20  - Sticky navbar with logo and links to every section (href=\"#section-id\")\n\
         \x20  - Every major section has an id attribute (id=\"hero\", id=\"features\", ...)\n\
         \x20  - Mobile menu: button id=\"mobile-menu-button\" with aria-expanded and aria-controls,\n\
         \x20    menu id=\"mobile-menu\" hidden by default, toggled by toggleMobileMenu()\n\
         \x20  - Clicking a mobile nav link closes the menu\n\
         \x20  - Smooth scrolling: html {{ scroll-behavior: smooth; }}\n\
         \n\
         2. Responsive layout\n\
         \x20  - Mobile first, Tailwind breakpoints sm: md: lg: throughout\n\
         \x20  - Grids collapse to one column on small screens\n\
         \n\
         3. Calls to action\n\
         {cta_line}\n\
         \x20  - Secondary CTAs link to real anchors (#contact) or mailto: addresses\n\
         \x20  - Every button has hover and focus states and is keyboard reachable\n\
         \n\
         4. Script\n\
         \x20  - Define toggleMobileMenu() in a <script> right before </body>; it toggles the\n\
         \x20    'hidden' class on #mobile-menu and updates aria-expanded on the button"
    )
}

/// Scroll and entrance animation requirements.
pub(crate) fn animation_requirements() -> &'static str {
    "ANIMATION REQUIREMENTS:\n\
     - Hero fades in on load; features, pricing and testimonials reveal on scroll\n\
     \x20 via IntersectionObserver (threshold 0.1) with a short stagger between cards\n\
     - Mark animated sections with data-animate=\"true\"\n\
     - Use transforms and opacity only; keep durations between 150ms and 500ms\n\
     - Honor @media (prefers-reduced-motion: reduce) by disabling all animation\n\
     - A .no-animations class on <body> disables every animation"
}

/// Closing instruction for prompts that must return a full HTML document.
pub(crate) const HTML_ONLY: &str = "OUTPUT: Only the complete HTML document, starting with <!DOCTYPE html> \
and ending with </html>. No explanations, no markdown fences, no commentary.";

/// Closing instruction for prompts that must return marked sections only.
pub(crate) const SECTIONS_ONLY: &str = "OUTPUT: Only the requested sections, each wrapped in its \
<!-- START: name --> and <!-- END: name --> markers. No full document, no explanations, \
no markdown fences.";
