//! Summary sanitising
//!
//! Show summaries arrive from the API as HTML fragments. Under
//! [`SummaryPolicy::Sanitized`] the fragment is re-emitted with an allow-list
//! of formatting tags, no attributes and escaped text. [`SummaryPolicy::Trusted`]
//! inserts the API markup unchanged and makes the API a trust boundary.

use scraper::{ElementRef, Html, Node};

use crate::dom::escape_text;

/// Formatting tags kept by the sanitizer
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "b", "strong", "i", "em", "u", "ul", "ol", "li", "span",
];

/// Tags dropped together with their content
const DROPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math",
];

/// How the API-provided summary HTML is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryPolicy {
    /// Keep only allow-listed formatting tags
    #[default]
    Sanitized,
    /// Insert the API markup verbatim
    Trusted,
}

impl SummaryPolicy {
    /// Apply the policy to `html`
    pub fn apply(self, html: &str) -> String {
        match self {
            SummaryPolicy::Sanitized => sanitize_summary(html),
            SummaryPolicy::Trusted => html.to_string(),
        }
    }
}

/// Sanitize an HTML fragment down to allow-listed formatting.
///
/// Unknown elements are unwrapped (their text is kept), dropped elements
/// disappear with their content, and all attributes are removed.
///
/// # Examples
/// ```
/// use showfinder_core::sanitize_summary;
///
/// let clean = sanitize_summary(r#"<p onclick="x()">Hi <a href="y">there</a></p>"#);
/// assert_eq!(clean, "<p>Hi there</p>");
/// ```
pub fn sanitize_summary(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    write_element(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROPPED_TAGS.contains(&name) {
        return;
    }

    if !ALLOWED_TAGS.contains(&name) {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    out.push('>');
    if name == "br" {
        return;
    }
    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
