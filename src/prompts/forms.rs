//! Form management prompts.

use super::requirements::HTML_ONLY;
use crate::error::{CcuxError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormType {
    #[default]
    Contact,
    Newsletter,
    Signup,
    Custom,
}

impl FormType {
    pub const NAMES: [&'static str; 4] = ["contact", "newsletter", "signup", "custom"];

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contact" => Ok(Self::Contact),
            "newsletter" => Ok(Self::Newsletter),
            "signup" => Ok(Self::Signup),
            "custom" => Ok(Self::Custom),
            other => Err(CcuxError::UserError(format!(
                "unknown form type '{}'\nFix: use one of: {}",
                other,
                Self::NAMES.join(", ")
            ))),
        }
    }

    pub fn default_fields(self) -> Vec<String> {
        let fields: &[&str] = match self {
            Self::Contact | Self::Custom => &["name", "email", "message"],
            Self::Newsletter => &["email"],
            Self::Signup => &["name", "email", "phone"],
        };
        fields.iter().map(|f| f.to_string()).collect()
    }

    /// Where the form belongs on the page.
    fn placement(self) -> &'static str {
        match self {
            Self::Contact | Self::Custom => "inside the contact section, or the footer when there is none",
            Self::Newsletter => "in the hero or the footer",
            Self::Signup => "prominently, in the hero or a dedicated signup area",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAMES[*self as usize])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStyle {
    Inline,
    Modal,
    Sidebar,
    Fullpage,
}

impl FormStyle {
    pub const NAMES: [&'static str; 4] = ["inline", "modal", "sidebar", "fullpage"];

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "modal" => Ok(Self::Modal),
            "sidebar" => Ok(Self::Sidebar),
            "fullpage" => Ok(Self::Fullpage),
            other => Err(CcuxError::UserError(format!(
                "unknown form style '{}'\nFix: use one of: {}",
                other,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for FormStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAMES[*self as usize])
    }
}

/// Human label for a field name; unknown names are used as given.
pub fn field_description(field: &str) -> &str {
    match field {
        "name" => "Full name",
        "email" => "Email address",
        "phone" => "Phone number",
        "message" => "Message textarea",
        "company" => "Company/organization",
        "website" => "Website URL",
        "subject" => "Subject line",
        other => other,
    }
}

pub fn form_on_prompt(description: &str, page: &str, theme_name: &str) -> String {
    format!(
        "Add a contact form to the landing page below.\n\
         Theme: {theme_name}\n\n\
         PRODUCT:\n{description}\n\n\
         CURRENT HTML:\n{page}\n\n\
         REQUIREMENTS:\n\
         1. Only add form markup, styles and script; existing text, images, layout, \
         navigation and animations stay untouched\n\
         2. Fields: Name, Email, Message, with labels, placeholders and required attributes\n\
         3. Place it in the contact section, else the footer, or the hero when it captures leads\n\
         4. Match the {theme_name} colors, fonts and spacing\n\
         5. action=\"#\" method=\"POST\", client-side validation and a success message\n\
         6. Responsive at every breakpoint, keyboard reachable, ARIA labels, readable contrast\n\n\
         {HTML_ONLY}"
    )
}

pub fn form_off_prompt(page: &str) -> String {
    format!(
        "Remove every form from the landing page below.\n\n\
         CURRENT HTML:\n{page}\n\n\
         REQUIREMENTS:\n\
         - Delete all <form> elements with their inputs, textareas, selects and form-only script and CSS\n\
         - Keep non-form buttons (CTAs, navigation)\n\
         - Drop containers left empty, keep section structure and spacing\n\
         - Design, text, images and other features stay unchanged\n\n\
         {HTML_ONLY}"
    )
}

pub fn form_edit_prompt(
    page: &str,
    form_type: FormType,
    fields: &[String],
    style: Option<FormStyle>,
    cta: Option<&str>,
    theme_name: &str,
) -> String {
    let field_list = fields
        .iter()
        .map(|f| field_description(f))
        .collect::<Vec<_>>()
        .join(", ");
    let style_text = style
        .map(|s| s.to_string())
        .unwrap_or_else(|| "inline (embedded)".to_string());
    let style_suffix = style.map(|s| format!(" ({} style)", s)).unwrap_or_default();

    format!(
        "Insert a {form_type} form{style_suffix} into the landing page below.\n\
         Theme: {theme_name}\n\n\
         CURRENT HTML:\n{page}\n\n\
         FORM DETAILS:\n\
         - Fields: {field_list}\n\
         - CTA: \"{cta}\"\n\
         - Style: {style_text}\n\n\
         PLACEMENT:\n\
         - Put it {placement}\n\
         - Replace existing forms if present\n\
         - Keep the existing design and theme\n\n\
         OTHER RULES:\n\
         - Semantic HTML with validation and accessibility\n\
         - Responsive behavior preserved\n\
         - action=\"#\" method=\"POST\" with success and error messages\n\n\
         {HTML_ONLY}",
        cta = cta.unwrap_or("Submit"),
        placement = form_type.placement(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fields_by_type() {
        assert_eq!(FormType::Contact.default_fields(), vec!["name", "email", "message"]);
        assert_eq!(FormType::Newsletter.default_fields(), vec!["email"]);
        assert_eq!(FormType::Signup.default_fields(), vec!["name", "email", "phone"]);
        assert_eq!(FormType::Custom.default_fields(), vec!["name", "email", "message"]);
    }

    #[test]
    fn parses_types_and_styles() {
        assert_eq!(FormType::parse("Newsletter").unwrap(), FormType::Newsletter);
        assert_eq!(FormStyle::parse("modal").unwrap(), FormStyle::Modal);
        let err = FormType::parse("survey").unwrap_err();
        assert!(err.to_string().contains("contact, newsletter, signup, custom"));
        assert!(FormStyle::parse("popup").is_err());
        assert_eq!(FormType::Signup.to_string(), "signup");
        assert_eq!(FormStyle::Fullpage.to_string(), "fullpage");
    }

    #[test]
    fn describes_known_fields() {
        assert_eq!(field_description("company"), "Company/organization");
        assert_eq!(field_description("budget"), "budget");
    }

    #[test]
    fn edit_prompt_details() {
        let fields = vec!["email".to_string(), "company".to_string()];
        let prompt = form_edit_prompt(
            "<html></html>",
            FormType::Newsletter,
            &fields,
            Some(FormStyle::Modal),
            Some("Join"),
            "dark",
        );
        assert!(prompt.contains("Insert a newsletter form (modal style)"));
        assert!(prompt.contains("Fields: Email address, Company/organization"));
        assert!(prompt.contains("CTA: \"Join\""));
        assert!(prompt.contains("in the hero or the footer"));
    }

    #[test]
    fn edit_prompt_defaults() {
        let prompt = form_edit_prompt("<html></html>", FormType::Contact, &[], None, None, "minimal");
        assert!(prompt.contains("Insert a contact form into"));
        assert!(prompt.contains("CTA: \"Submit\""));
        assert!(prompt.contains("Style: inline (embedded)"));
    }

    #[test]
    fn on_and_off_prompts_embed_page() {
        let on = form_on_prompt("Todo app", "<body>X</body>", "playful");
        assert!(on.contains("<body>X</body>"));
        assert!(on.contains("Theme: playful"));
        let off = form_off_prompt("<body>Y</body>");
        assert!(off.contains("<body>Y</body>"));
        assert!(off.contains("Remove every form"));
    }
}
