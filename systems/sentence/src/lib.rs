#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Sentence tokenization used to highlight the pronoun of a Story Solver level.

/// Contiguous slice of a sentence tagged by whether it is the highlighted pronoun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text rendered without emphasis.
    Plain(&'a str),
    /// Occurrence of the pronoun, with its original casing.
    Pronoun(&'a str),
}

impl<'a> Segment<'a> {
    /// Text covered by the segment.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Pronoun(text) => *text,
        }
    }

    /// Reports whether the segment is a pronoun occurrence.
    #[must_use]
    pub const fn is_pronoun(&self) -> bool {
        matches!(self, Self::Pronoun(_))
    }
}

/// Splits `sentence` into plain and pronoun segments.
///
/// The pronoun matches case-insensitively and only as a whole word, so `it`
/// is found in "until it got tired" but not inside "fit". Concatenating the
/// segment texts reproduces `sentence`. An empty pronoun yields the sentence
/// as one plain segment.
#[must_use]
pub fn highlight<'a>(sentence: &'a str, pronoun: &str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut plain_start = 0;

    for (start, end) in word_matches(sentence, pronoun) {
        if start > plain_start {
            segments.push(Segment::Plain(&sentence[plain_start..start]));
        }
        segments.push(Segment::Pronoun(&sentence[start..end]));
        plain_start = end;
    }

    if plain_start < sentence.len() {
        segments.push(Segment::Plain(&sentence[plain_start..]));
    }

    segments
}

/// Reports whether `pronoun` occurs in `sentence` as a whole word.
#[must_use]
pub fn contains_word(sentence: &str, pronoun: &str) -> bool {
    !word_matches(sentence, pronoun).is_empty()
}

/// Question asked beneath the sentence, with the pronoun upper-cased.
#[must_use]
pub fn question(pronoun: &str) -> String {
    format!("What does \"{}\" refer to?", pronoun.to_uppercase())
}

fn word_matches(sentence: &str, pronoun: &str) -> Vec<(usize, usize)> {
    let mut matches = Vec::new();
    if pronoun.is_empty() {
        return matches;
    }

    let mut cursor = 0;
    while cursor < sentence.len() {
        let end = cursor + pronoun.len();
        let candidate = sentence.get(cursor..end);
        let is_match = candidate
            .map_or(false, |text| text.eq_ignore_ascii_case(pronoun))
            && !previous_is_word(sentence, cursor)
            && !next_is_word(sentence, end);

        if is_match {
            matches.push((cursor, end));
            cursor = end;
        } else {
            cursor += sentence[cursor..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
    }

    matches
}

fn previous_is_word(sentence: &str, index: usize) -> bool {
    sentence[..index]
        .chars()
        .next_back()
        .map_or(false, is_word_char)
}

fn next_is_word(sentence: &str, index: usize) -> bool {
    sentence[index..].chars().next().map_or(false, is_word_char)
}

fn is_word_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}
