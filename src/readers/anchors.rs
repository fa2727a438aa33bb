//! Scroll anchors for rendered section headings.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Level-2 heading without attributes.
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<h2>(?P<inner>.*?)</h2>").unwrap());

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Turns heading text into an anchor id.
///
/// `"Step 1: Create File"` becomes `"step-1-create-file"`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_ALNUM
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Adds an `id` to every `<h2>` in rendered HTML.
///
/// The id is the slug of the heading's text content. Headings that already
/// carry attributes are left alone; equal texts get equal ids.
pub fn inject_anchors(html: &str) -> Cow<'_, str> {
    H2.replace_all(html, |caps: &Captures| {
        let inner = &caps["inner"];
        format!("<h2 id=\"{}\">{}</h2>", slugify(&heading_text(inner)), inner)
    })
}

/// Text content of a rendered heading: tags removed, common entities decoded.
fn heading_text(inner: &str) -> String {
    TAG.replace_all(inner, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
