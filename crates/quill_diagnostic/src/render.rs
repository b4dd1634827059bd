use std::io;

use termcolor::WriteColor;
use unicode_width::UnicodeWidthStr;

use super::sources::{Source, Sources};
use super::{Config, Diagnostic, Snippet};

const TAB: &str = "    ";

impl<S: Sources> Diagnostic<S> {
    /// Write the diagnostic to `stream`, one block of source context per snippet.
    pub fn write_to_stream(
        &self,
        sources: &S,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            sources,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: Sources> {
    diagnostic: &'a Diagnostic<S>,
    sources: &'a S,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor, S: Sources> DiagnosticWriter<'_, 'a, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let diagnostic: &'a Diagnostic<S> = self.diagnostic;
        for snippet in &diagnostic.snippets {
            self.draw_snippet(snippet)?;
        }

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(&self.config.error_color)?;
        write!(self.stream, "Error:")?;
        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    fn draw_snippet(&mut self, snippet: &Snippet<S>) -> io::Result<()> {
        let sources: &'a S = self.sources;
        let source = sources
            .get_source(snippet.source_id)
            .ok_or_else(|| invalid("source missing"))?;

        let (line_num, col_num) = source
            .byte_to_line_col(snippet.span.start)
            .ok_or_else(|| invalid("span out of bounds"))?;

        self.stream.set_color(&self.config.subtle)?;
        writeln!(self.stream, "In {}:{line_num}:{col_num}", source.name_str())?;
        self.stream.reset()?;

        let line = line_num - 1;
        let first = line.saturating_sub(self.config.context_size);
        let last = (line_num + self.config.context_size).min(source.num_lines());
        let line_num_width = 1 + last.max(1).ilog10() as usize;

        for index in first..last {
            let line_str = source
                .line_str(index)
                .ok_or_else(|| invalid("line out of bounds"))?;

            self.draw_gutter(Some(index + 1), line_num_width)?;
            writeln!(self.stream, "{}", line_str.replace('\t', TAB))?;

            if index == line {
                self.draw_underline(snippet, line_str, col_num - 1, line_num_width)?;
            }
        }

        writeln!(self.stream)
    }

    fn draw_underline(
        &mut self,
        snippet: &Snippet<S>,
        line_str: &str,
        col: usize,
        line_num_width: usize,
    ) -> io::Result<()> {
        self.draw_gutter(None, line_num_width)?;

        // spans that run past the end of the line are cut off there
        let start = col.min(line_str.len());
        let end = (col + snippet.span.len()).min(line_str.len()).max(start);

        let offset = str_width(&line_str[..start]);
        let width = str_width(&line_str[start..end]).max(1);

        self.stream.set_color(&self.config.error_color)?;

        write!(self.stream, "{:offset$}", "")?;
        write!(self.stream, "{}", self.config.underline.repeat(width))?;
        writeln!(
            self.stream,
            "{}{}",
            self.config.underline_after, snippet.label
        )?;

        self.stream.reset()
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }

        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()
    }
}

fn invalid(message: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

// measured the way the line itself is printed, with tabs expanded
fn str_width(s: &str) -> usize {
    s.replace('\t', TAB).width()
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use crate::sources::{Cached, NamedSource, Sources};
    use crate::{Config, Diagnostic, Snippet};

    #[must_use]
    fn render<S: Sources>(diagnostic: &Diagnostic<S>, sources: &S, config: &Config) -> String {
        let mut stream = NoColor::new(vec![]);

        diagnostic
            .write_to_stream(sources, config, &mut stream)
            .unwrap();

        String::from_utf8(stream.into_inner()).unwrap()
    }

    fn single(name: &str, text: &str) -> Cached<NamedSource> {
        Cached::new(NamedSource::new(name, text))
    }

    #[test]
    fn single_line() {
        let source = single("main", "5 + #;");
        let diagnostic = Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::new("Unexpected character '#'.", (), 4..5));

        let expected = [
            "Error: syntax error",
            "In main:1:5",
            "1 │ 5 + #;",
            "  │     ^  Unexpected character '#'.",
            "",
            "",
        ]
        .join("\n");

        assert_eq!(render(&diagnostic, &source, &Config::default()), expected);
    }

    #[test]
    fn context_lines() {
        let source = single("main", "1;\n2;\n3 +;\n4;\n5;\n6;");
        let diagnostic = Diagnostic::error().with_snippet(Snippet::new("here", (), 9..10));

        let config = Config {
            context_size: 1,
            ..Config::default()
        };

        let expected = [
            "Error:",
            "In main:3:4",
            "2 │ 2;",
            "3 │ 3 +;",
            "  │    ^  here",
            "4 │ 4;",
            "",
            "",
        ]
        .join("\n");

        assert_eq!(render(&diagnostic, &source, &config), expected);
    }

    #[test]
    fn tab_indented_line() {
        let source = single("main", "\t\t#;");
        let diagnostic = Diagnostic::error().with_snippet(Snippet::new("here", (), 2..3));

        let expected = [
            "Error:",
            "In main:1:3",
            "1 │         #;",
            "  │         ^  here",
            "",
            "",
        ]
        .join("\n");

        assert_eq!(render(&diagnostic, &source, &Config::default()), expected);
    }

    #[test]
    fn span_at_end_of_input() {
        let source = single("main", "5");
        let diagnostic = Diagnostic::error().with_snippet(Snippet::new("eof", (), 1..1));

        assert_eq!(
            render(&diagnostic, &source, &Config::default()),
            "Error:\nIn main:1:2\n1 │ 5\n  │  ^  eof\n\n"
        );
    }

    #[test]
    fn missing_source() {
        struct NoSources;

        impl Sources for NoSources {
            type SourceId = ();
            type Source = NamedSource;

            fn get_source(&self, _id: ()) -> Option<&Cached<NamedSource>> {
                None
            }
        }

        let diagnostic = Diagnostic::error().with_snippet(Snippet::new("x", (), 0..1));

        let mut stream = NoColor::new(vec![]);
        assert!(diagnostic
            .write_to_stream(&NoSources, &Config::default(), &mut stream)
            .is_err());
    }
}
