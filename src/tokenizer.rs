use std::ops::Range;

/// A single whitespace-delimited fragment of an expression, along with
/// where it lives in the source string.
#[derive(Debug, PartialEq, Clone)]
pub struct RawToken<'a> {
    pub text: &'a str,
    /// Byte range of `text` within the source string.
    pub range: Range<usize>,
}

/// Splits an expression into its whitespace-delimited tokens.
///
/// No attempt is made to figure out what the tokens *are*--that's
/// the evaluator's job, since an unrecognized token is an evaluation
/// error rather than something to be skipped here.
pub struct Tokenizer<'a> {
    string: &'a str,
    index: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(string: &'a str) -> Self {
        Tokenizer { string, index: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn chomp_whitespace(&mut self) {
        let remaining = self.remaining();
        let trimmed = remaining.trim_start();
        self.index += remaining.len() - trimmed.len();
    }

    /// Returns the byte range of the token at the given (zero-based) token
    /// index, if the string has that many tokens.
    pub fn token_range(string: &str, token_index: usize) -> Option<Range<usize>> {
        Tokenizer::new(string)
            .nth(token_index)
            .map(|token| token.range)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chomp_whitespace();
        let remaining = self.remaining();
        if remaining.is_empty() {
            return None;
        }

        let len = remaining
            .find(char::is_whitespace)
            .unwrap_or(remaining.len());
        let start = self.index;
        self.index += len;

        Some(RawToken {
            text: &remaining[..len],
            range: start..self.index,
        })
    }
}

/// Returns the text of every token in the given string, in order.
pub fn tokenize(string: &str) -> Vec<&str> {
    Tokenizer::new(string).map(|token| token.text).collect()
}
