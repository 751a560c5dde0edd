use std::str::CharIndices;

use errmsgs_errors::SourceSpan;

pub mod tokenizer;
pub mod tokens;

pub struct SourceReader<'src> {
    pub source: &'src str,
    /// Calling `next()` gives the index of the character returned, but we want the index of
    /// the *next* character, so this runs one character ahead.
    iter: CharIndices<'src>,
    next_char: Option<char>,
    /// The index of the next character to be returned.
    pub index: usize,
}

impl<'src> SourceReader<'src> {
    pub fn new(source: &'src str) -> SourceReader<'src> {
        let mut iter = source.char_indices();
        let next_char = iter.next().map(|next| next.1);

        SourceReader {
            source,
            iter,
            next_char,
            index: 0,
        }
    }

    pub fn next_char(&mut self) -> Option<char> {
        let to_return = self.next_char;

        if let Some((idx, c)) = self.iter.next() {
            self.index = idx;
            self.next_char = Some(c);
        } else {
            self.index = self.source.len();
            self.next_char = None
        }

        to_return
    }

    pub fn peek(&self) -> Option<char> {
        self.next_char
    }

    /// Consume characters while `pred` holds, stopping before the first one that doesn't.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.next_char();
        }
    }

    /// Returns the slice `self.source[(index - offset)..index]`.
    pub fn slice_backward(&self, offset: usize) -> &'src str {
        &self.source[(self.index - offset)..self.index]
    }

    pub fn slice_from(&self, offset: usize) -> &'src str {
        &self.source[offset..self.index]
    }

    pub fn source_span_from(&self, offset: usize) -> SourceSpan {
        SourceSpan::from((offset, self.index - offset))
    }
}
