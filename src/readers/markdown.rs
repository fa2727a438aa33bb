//! Markdown to HTML rendering for step prose.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::config::RenderConfig;

use super::anchors::inject_anchors;
use super::callouts::rewrite_callouts;

/// Converts markdown to HTML.
pub trait MarkdownRenderer: Send + Sync + std::fmt::Debug {
    /// Renders a markdown document.
    fn render(&self, markdown: &str) -> String;
}

/// Renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Default)]
pub struct CmarkRenderer {
    config: RenderConfig,
}

impl CmarkRenderer {
    /// Creates a renderer with the given settings.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn options(&self) -> Options {
        let mut options = Options::empty();
        if self.config.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.config.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.config.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if self.config.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let hard_breaks = self.config.hard_breaks;
        let parser = Parser::new_ext(markdown, self.options()).map(|event| match event {
            Event::SoftBreak if hard_breaks => Event::HardBreak,
            other => other,
        });

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

/// Full prose pipeline for one step: callouts, rendering, heading anchors.
pub fn render_step_html(raw: &str, renderer: &dyn MarkdownRenderer) -> String {
    let rewritten = rewrite_callouts(raw);
    let html = renderer.render(&rewritten);
    inject_anchors(&html).into_owned()
}

/// Wraps plain text in a paragraph, escaping HTML.
pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
