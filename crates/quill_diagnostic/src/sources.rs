/// A lookup from source ids to line-cached sources.
pub trait Sources {
    type SourceId: Copy + Eq + std::hash::Hash;
    type Source: Source;

    fn get_source(&self, id: Self::SourceId) -> Option<&Cached<Self::Source>>;
}

pub trait Source {
    fn name_str(&self) -> &str;

    fn source_str(&self) -> &str;
}

/// A single source is its own source map.
impl<S: Source> Sources for Cached<S> {
    type SourceId = ();
    type Source = S;

    fn get_source(&self, _id: Self::SourceId) -> Option<&Cached<Self::Source>> {
        Some(self)
    }
}

/// Source text together with the name it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSource {
    pub name: String,
    pub text: String,
}

impl NamedSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl Source for NamedSource {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn source_str(&self) -> &str {
        &self.text
    }
}

/// A source with its line starts precomputed.
#[derive(Debug, Clone)]
pub struct Cached<S: Source> {
    source: S,
    line_breaks: Vec<usize>,
}

impl<S: Source> Cached<S> {
    pub fn new(source: S) -> Self {
        let line_breaks = source
            .source_str()
            .char_indices()
            .filter_map(|(i, ch)| (ch == '\n').then_some(i))
            .collect();

        Self {
            source,
            line_breaks,
        }
    }

    /// 1-based line and column (in bytes) of `byte`.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;
        let line_start = self.line_to_byte(line)?;

        Some((line + 1, byte - line_start + 1))
    }

    pub fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.source_str().len() {
            return None;
        }

        match self.line_breaks.binary_search(&byte) {
            Ok(line) | Err(line) => Some(line),
        }
    }

    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        match line {
            0 => Some(0),
            _ => self.line_breaks.get(line - 1).map(|&byte| byte + 1),
        }
    }

    /// The text of line `index`, without its line ending.
    pub fn line_str(&self, index: usize) -> Option<&str> {
        let start = self.line_to_byte(index)?;
        let end = self
            .line_to_byte(index + 1)
            .unwrap_or(self.source_str().len());

        let s = &self.source_str()[start..end];
        let s = s.strip_suffix('\n').unwrap_or(s);
        let s = s.strip_suffix('\r').unwrap_or(s);

        Some(s)
    }

    pub fn num_lines(&self) -> usize {
        1 + self.line_breaks.len()
    }
}

impl<S: Source> Source for Cached<S> {
    fn name_str(&self) -> &str {
        self.source.name_str()
    }

    fn source_str(&self) -> &str {
        self.source.source_str()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cached, NamedSource};

    fn cached(text: &str) -> Cached<NamedSource> {
        Cached::new(NamedSource::new("sample", text))
    }

    #[test]
    fn line_index() {
        let src = cached("");
        assert_eq!(src.byte_to_line_index(0), Some(0));
        assert_eq!(src.byte_to_line_index(1), None);

        let src = cached("x\ny");
        assert_eq!(src.byte_to_line_index(0), Some(0));
        assert_eq!(src.byte_to_line_index(1), Some(0));
        assert_eq!(src.byte_to_line_index(2), Some(1));
        assert_eq!(src.byte_to_line_index(3), Some(1));
        assert_eq!(src.byte_to_line_index(4), None);
    }

    #[test]
    fn line_col() {
        let src = cached("print 1;\n  #;");
        assert_eq!(src.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(src.byte_to_line_col(6), Some((1, 7)));
        assert_eq!(src.byte_to_line_col(11), Some((2, 3)));
        assert_eq!(src.byte_to_line_col(13), Some((2, 5)));
    }

    #[test]
    fn line_str() {
        let src = cached("a;\r\nb;\n");
        assert_eq!(src.num_lines(), 3);
        assert_eq!(src.line_str(0), Some("a;"));
        assert_eq!(src.line_str(1), Some("b;"));
        assert_eq!(src.line_str(2), Some(""));
        assert_eq!(src.line_str(3), None);
    }
}
