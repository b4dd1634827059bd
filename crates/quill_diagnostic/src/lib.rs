mod render;
pub mod sources;
pub mod span;

use derive_where::derive_where;
pub use termcolor;
use termcolor::{Color, ColorSpec};

use self::sources::Sources;
use self::span::{AsSpan, Span};

/// An error message with the source regions it refers to.
#[derive_where(Debug; S::SourceId)]
pub struct Diagnostic<S: Sources> {
    pub message: Option<String>,
    pub snippets: Vec<Snippet<S>>,
}

impl<S: Sources> Diagnostic<S> {
    pub fn error() -> Self {
        Self {
            message: None,
            snippets: vec![],
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: Snippet<S>) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// A labelled region of a source.
#[derive_where(Debug; S::SourceId)]
pub struct Snippet<S: Sources> {
    label: String,

    source_id: S::SourceId,
    span: Span,
}

impl<S: Sources> Snippet<S> {
    pub fn new(label: impl Into<String>, source_id: S::SourceId, span: impl AsSpan) -> Self {
        Self {
            label: label.into(),

            source_id,
            span: span.as_span(),
        }
    }
}

/// How diagnostics are laid out and coloured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lines of source shown above and below a snippet.
    pub context_size: usize,

    pub error_color: ColorSpec,
    pub subtle: ColorSpec,

    pub gutter: &'static str,

    pub underline: &'static str,
    pub underline_after: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        let mut error_color = ColorSpec::new();
        error_color.set_fg(Some(Color::Red));
        error_color.set_bold(true);

        let mut subtle = ColorSpec::new();
        subtle.set_italic(true);
        subtle.set_dimmed(true);

        Self {
            context_size: 2,

            error_color,
            subtle,

            gutter: "│",

            underline: "^",
            underline_after: "  ",
        }
    }
}
