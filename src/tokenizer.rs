// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword extraction: normalize, lowercase, split on separators.
//!
//! The same function tokenizes records at build time and queries at search
//! time, so both sides agree on what a keyword is.
//!
//! - "foo/bar.go" → "foo", "bar", "go"
//! - "Save  As…" → "save", "as"
//! - ", _:" → nothing
//!
//! Without the `unicode-normalization` feature the NFC step is skipped and
//! input is assumed to be pre-normalized.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Call `emit` once per keyword in `text`, in order.
///
/// A keyword is a maximal run of characters that are neither whitespace nor
/// punctuation, taken from the NFC-normalized, lowercased text. The keyword
/// buffer is reused between calls, so `emit` receives a borrowed `&str`.
pub fn for_each_keyword<F>(text: &str, mut emit: F)
where
    F: FnMut(&str),
{
    let mut keyword = String::new();
    for c in normalized_chars(text) {
        if is_keyword_separator(c) {
            if !keyword.is_empty() {
                emit(&keyword);
                keyword.clear();
            }
        } else {
            keyword.extend(c.to_lowercase());
        }
    }

    if !keyword.is_empty() {
        emit(&keyword);
    }
}

/// Collecting form of [`for_each_keyword`].
pub fn keywords(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for_each_keyword(text, |kw| out.push(kw.to_string()));
    out
}

/// Canonical form used by the ranker: NFC only, case preserved.
///
/// Case is kept on purpose so that exact-case matches score higher than
/// case-insensitive ones.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_query(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_query(text: &str) -> String {
    text.to_string()
}

#[cfg(feature = "unicode-normalization")]
fn normalized_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfc()
}

#[cfg(not(feature = "unicode-normalization"))]
fn normalized_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
}

/// Whitespace or punctuation (Unicode general category P*).
///
/// Symbols are not separators: `c++`, `a=b` and `$HOME` stay whole keywords.
fn is_keyword_separator(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return matches!(c,
            '!'..='#' | '%'..='*' | ','..='/' | ':' | ';' | '?' | '@' |
            '['..=']' | '_' | '{' | '}'
        );
    }
    matches!(c,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}' |
        '\u{037E}' | '\u{0387}' |
        '\u{055A}'..='\u{055F}' | '\u{0589}' | '\u{058A}' |  // Armenian
        '\u{05BE}' | '\u{05C0}' | '\u{05C3}' | '\u{05C6}' | '\u{05F3}' | '\u{05F4}' |  // Hebrew
        '\u{0609}' | '\u{060A}' | '\u{060C}' | '\u{060D}' | '\u{061B}' |  // Arabic
        '\u{061D}'..='\u{061F}' | '\u{066A}'..='\u{066D}' | '\u{06D4}' |
        '\u{0964}' | '\u{0965}' | '\u{0970}' |  // Devanagari
        '\u{0E4F}' | '\u{0E5A}' | '\u{0E5B}' |  // Thai
        '\u{2010}'..='\u{2027}' |  // Dashes, quotes, bullets, ellipsis
        '\u{2030}'..='\u{2043}' |  // Per mille, primes, guillemets
        '\u{2045}'..='\u{2051}' |
        '\u{2053}'..='\u{205E}' |
        '\u{207D}' | '\u{207E}' | '\u{208D}' | '\u{208E}' |
        '\u{2308}'..='\u{230B}' | '\u{2329}' | '\u{232A}' |
        '\u{2768}'..='\u{2775}' | '\u{27C5}' | '\u{27C6}' | '\u{27E6}'..='\u{27EF}' |
        '\u{2983}'..='\u{2998}' | '\u{29D8}'..='\u{29DB}' | '\u{29FC}' | '\u{29FD}' |
        '\u{2E00}'..='\u{2E2E}' | '\u{2E30}'..='\u{2E4F}' |  // Supplemental punctuation
        '\u{3001}'..='\u{3003}' |  // CJK comma and full stops
        '\u{3008}'..='\u{3011}' | '\u{3014}'..='\u{301F}' |  // CJK brackets
        '\u{3030}' | '\u{303D}' | '\u{30A0}' | '\u{30FB}' |
        '\u{FD3E}' | '\u{FD3F}' |
        '\u{FE10}'..='\u{FE19}' | '\u{FE30}'..='\u{FE52}' | '\u{FE54}'..='\u{FE61}' |
        '\u{FE63}' | '\u{FE68}' | '\u{FE6A}' | '\u{FE6B}' |
        '\u{FF01}'..='\u{FF03}' | '\u{FF05}'..='\u{FF0A}' | '\u{FF0C}'..='\u{FF0F}' |  // Fullwidth
        '\u{FF1A}' | '\u{FF1B}' | '\u{FF1F}' | '\u{FF20}' |
        '\u{FF3B}'..='\u{FF3D}' | '\u{FF3F}' | '\u{FF5B}' | '\u{FF5D}' |
        '\u{FF5F}'..='\u{FF65}'
    )
}

/// Truncate to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
