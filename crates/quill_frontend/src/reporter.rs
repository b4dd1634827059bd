use std::io;

use quill_diagnostic::sources::{Cached, NamedSource};
use quill_diagnostic::span::Span;
use quill_diagnostic::termcolor::{ColorChoice, StandardStream, WriteColor};
use quill_diagnostic::{Config, Diagnostic, Snippet};

/// A problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Issue {
    pub message: String,
    pub span: Span,
}

impl Issue {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A sink for parse issues.
pub trait Reporter {
    fn report(&mut self, issue: Issue);

    /// All issues reported so far, in the order they were reported.
    fn issues(&self) -> &[Issue];

    fn has_issues(&self) -> bool {
        !self.issues().is_empty()
    }
}

impl Reporter for Vec<Issue> {
    fn report(&mut self, issue: Issue) {
        self.push(issue);
    }

    fn issues(&self) -> &[Issue] {
        self
    }
}

/// Keeps issues as data for later inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CollectReporter {
    issues: Vec<Issue>,
}

impl CollectReporter {
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl Reporter for CollectReporter {
    fn report(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

/// Renders every issue against its source as it is reported.
pub struct PrettyReporter<W: WriteColor = StandardStream> {
    source: Cached<NamedSource>,
    config: Config,
    stream: W,

    issues: Vec<Issue>,
}

impl PrettyReporter {
    pub fn stderr(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(name, source, StandardStream::stderr(ColorChoice::Auto))
    }
}

impl<W: WriteColor> PrettyReporter<W> {
    pub fn new(name: impl Into<String>, source: impl Into<String>, stream: W) -> Self {
        Self {
            source: Cached::new(NamedSource::new(name, source)),
            config: Config::default(),
            stream,

            issues: vec![],
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn into_stream(self) -> W {
        self.stream
    }

    fn emit(&mut self, issue: &Issue) -> io::Result<()> {
        let diagnostic: Diagnostic<Cached<NamedSource>> = Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::new(&issue.message, (), issue.span));

        diagnostic.write_to_stream(&self.source, &self.config, &mut self.stream)
    }
}

impl<W: WriteColor> Reporter for PrettyReporter<W> {
    fn report(&mut self, issue: Issue) {
        if let Err(err) = self.emit(&issue) {
            eprintln!("failed to emit diagnostic: {err}");
        }

        self.issues.push(issue);
    }

    fn issues(&self) -> &[Issue] {
        &self.issues
    }
}
