/// A single line of a [`Document`]
///
/// `from` and `to` are character offsets into the document text; `to` points
/// at the line break (or the end of the text) and is never past it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
    pub from: usize,
    pub to: usize,
}

impl<'a> Line<'a> {
    /// True if the line has no content besides whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Immutable snapshot of the editor text with a precomputed line table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    text: String,
    /// Byte ranges of each line, excluding the line break
    spans: Vec<(usize, usize)>,
    /// Character offset of each line start
    offsets: Vec<usize>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut spans = Vec::new();
        let mut offsets = Vec::new();

        let mut byte_start = 0;
        let mut char_start = 0;
        for segment in text.split('\n') {
            let byte_end = byte_start + segment.len();
            spans.push((byte_start, byte_end));
            offsets.push(char_start);
            byte_start = byte_end + 1;
            char_start += segment.chars().count() + 1;
        }

        Document {
            text,
            spans,
            offsets,
        }
    }

    /// Build a document from individual lines joined by `\n`
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined: Vec<&str> = lines.iter().map(|l| l.as_ref()).collect();
        Document::new(joined.join("\n"))
    }

    /// Number of lines; an empty document still has one (empty) line
    pub fn lines(&self) -> usize {
        self.spans.len()
    }

    /// Total length in characters
    pub fn len(&self) -> usize {
        let last = self.lines();
        self.line(last).map(|l| l.to).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get a line by its 1-based number
    pub fn line(&self, number: usize) -> Option<Line<'_>> {
        if number == 0 || number > self.spans.len() {
            return None;
        }

        let (start, end) = self.spans[number - 1];
        let text = &self.text[start..end];
        let from = self.offsets[number - 1];

        Some(Line {
            number,
            text,
            from,
            to: from + text.chars().count(),
        })
    }

    /// Get the line containing the given character offset
    /// Offsets past the end of the text resolve to the last line
    pub fn line_at(&self, pos: usize) -> Line<'_> {
        let index = match self.offsets.binary_search(&pos) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };

        // spans is never empty, so every index produced above is valid
        let (start, end) = self.spans[index];
        let text = &self.text[start..end];
        let from = self.offsets[index];

        Line {
            number: index + 1,
            text,
            from,
            to: from + text.chars().count(),
        }
    }

    /// Iterate over all lines in document order
    pub fn iter(&self) -> impl Iterator<Item = Line<'_>> {
        (1..=self.lines()).filter_map(|n| self.line(n))
    }
}
