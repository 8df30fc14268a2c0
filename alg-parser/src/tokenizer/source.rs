use std::ops::Range;

/// Expression text with all whitespace removed, remembering where each remaining byte came from
/// in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// The text without whitespace.
    text: String,

    /// For each byte of `text`, the position of that byte in the original input.
    origin: Vec<usize>,
}

impl Stripped {
    /// Removes all whitespace from the given input.
    pub fn new(input: &str) -> Self {
        let mut text = String::with_capacity(input.len());
        let mut origin = Vec::with_capacity(input.len());

        for (i, c) in input.char_indices().filter(|(_, c)| !c.is_whitespace()) {
            text.push(c);
            origin.extend(i..i + c.len_utf8());
        }

        Self { text, origin }
    }

    /// Returns the text without whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Converts a span over the stripped text into the corresponding span of the original input.
    ///
    /// Empty spans are mapped to an empty span at the start of the corresponding byte, or at the
    /// end of the input for spans past the end of the stripped text.
    pub fn original_span(&self, span: Range<usize>) -> Range<usize> {
        let end_of_input = self.origin.last().map_or(0, |last| last + 1);
        let start = self.origin.get(span.start).copied().unwrap_or(end_of_input);
        if span.end <= span.start {
            return start..start;
        }

        let end = self.origin
            .get(span.end - 1)
            .map_or(end_of_input, |last| last + 1);
        start..end
    }
}
