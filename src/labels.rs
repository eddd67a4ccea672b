use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::Value;

/// Shown wherever a field is missing or empty.
pub const PLACEHOLDER: &str = "—";

static LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Existing site
        ("yes-outdated", "Yes — needs full redo"),
        ("yes-ok", "Yes — minor improvements"),
        ("no", "No website yet"),
        // Goals
        ("leads", "Get more leads"),
        ("credibility", "Look professional"),
        ("sales", "Sell online"),
        ("portfolio", "Showcase work"),
        ("info", "Informational"),
        ("seo", "Improve SEO"),
        // Branding
        ("logo", "Logo"),
        ("colors", "Brand colors"),
        ("fonts", "Fonts"),
        ("photos", "Photography"),
        ("copy", "Written copy"),
        ("none", "None — starting fresh"),
        // Features
        ("contact-form", "Contact form"),
        ("live-chat", "Live chat"),
        ("booking", "Online booking"),
        ("payments", "Payments"),
        ("gallery", "Gallery"),
        ("map", "Map embed"),
        ("multilang", "Multi-language"),
        ("nothing", "Keep it simple"),
        // Timeline
        ("urgent", "ASAP"),
        ("month", "Within a month"),
        ("1-3mo", "1–3 months"),
        ("planning", "Just planning"),
        // Budget
        ("<500", "Under $500"),
        ("500-1k", "$500–$1k"),
        ("1-2k", "$1k–$2k"),
        ("2k+", "$2k+"),
        ("unsure", "Not sure / get a quote"),
        // Pages
        ("home", "Home"),
        ("about", "About"),
        ("services", "Services"),
        ("contact", "Contact"),
        ("shop", "Online Store"),
        ("blog", "Blog"),
        ("faq", "FAQ"),
    ])
});

/// Resolve a single form code to its label.
///
/// Unknown codes pass through unchanged; blank values (see [`is_blank`]) become
/// [`PLACEHOLDER`]. Other scalars are rendered as JSON text.
pub fn label(value: Option<&Value>) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        Some(v) if is_blank(v) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => label_code(s),
        Some(Value::Array(_)) => label_list(value),
        Some(other) => other.to_string(),
    }
}

/// Resolve a raw code string.
pub fn label_code(code: &str) -> String {
    if code.is_empty() {
        return PLACEHOLDER.to_string();
    }
    LABELS
        .get(code)
        .map(|l| l.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Resolve every element of a list and join with `", "`.
///
/// An empty list resolves to [`PLACEHOLDER`]; a scalar is treated like
/// [`label`].
pub fn label_list(value: Option<&Value>) -> String {
    let Some(Value::Array(items)) = value else {
        return label(value);
    };

    if items.is_empty() {
        return PLACEHOLDER.to_string();
    }

    items
        .iter()
        .map(|item| label(Some(item)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Null, `""`, `false` and zero count as "not answered".
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}
