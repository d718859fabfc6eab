use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unicode-aware word characters: alphabetic, marks, decimal digits, connector punctuation.
    static ref WORD: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Tokenized text. Owns the lowercased buffer and hands out `&str` slices
/// into it, so iterating allocates nothing per token.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    buffer: String,
    spans: Vec<(usize, usize)>,
}

impl Tokens {
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|&(s, e)| &self.buffer[s..e])
    }

    pub fn len(&self) -> usize { self.spans.len() }

    pub fn is_empty(&self) -> bool { self.spans.is_empty() }
}

/// Lowercase `text` and split it into maximal runs of word characters.
pub fn tokens(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let spans = WORD.find_iter(&buffer).map(|m| (m.start(), m.end())).collect();
    Tokens { buffer, spans }
}

/// Eager form of [`tokens`].
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).iter().map(str::to_owned).collect()
}

/// Absent text yields no tokens.
pub fn tokenize_opt(text: Option<&str>) -> Vec<String> {
    text.map(tokenize).unwrap_or_default()
}
