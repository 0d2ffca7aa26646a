//! Approximation of national characters with the ASCII panel fonts.
//!
//! The bitmap fonts only cover printable ASCII. Letters with diacritics are
//! drawn as their base letter plus an overlay mark; letters without a good
//! overlay are spelled as ASCII digraphs.

use alloc::vec::Vec;

/// Decoration drawn over a base glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Diagonal stroke through the letter (ø).
    Slash,
    /// Small circle above the letter (å).
    Ring,
    /// Stroke rising to the right above the letter (é).
    Acute,
    /// Stroke falling to the right above the letter (è).
    Grave,
    /// Two dots above the letter (ä, ö, ü).
    Diaeresis,
}

/// One drawable cell: an ASCII base character and an optional mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphToken {
    pub base: char,
    pub mark: Option<Mark>,
}

impl GlyphToken {
    pub const fn plain(base: char) -> Self {
        Self { base, mark: None }
    }

    pub const fn marked(base: char, mark: Mark) -> Self {
        Self {
            base,
            mark: Some(mark),
        }
    }
}

/// Shape `text` into drawable tokens.
pub fn shape(text: &str) -> Vec<GlyphToken> {
    let mut tokens = Vec::with_capacity(text.len());
    for ch in text.chars() {
        push_char(&mut tokens, ch);
    }
    tokens
}

/// Number of cells `ch` occupies once shaped.
pub fn cell_count(ch: char) -> usize {
    match ch {
        'æ' | 'Æ' | 'ß' => 2,
        '…' => 3,
        '\n' | '\r' => 0,
        _ => 1,
    }
}

fn push_char(out: &mut Vec<GlyphToken>, ch: char) {
    use Mark::*;

    let token = match ch {
        ' '..='~' => GlyphToken::plain(ch),
        'ø' => GlyphToken::marked('o', Slash),
        'Ø' => GlyphToken::marked('O', Slash),
        'å' => GlyphToken::marked('a', Ring),
        'Å' => GlyphToken::marked('A', Ring),
        'é' => GlyphToken::marked('e', Acute),
        'É' => GlyphToken::marked('E', Acute),
        'á' => GlyphToken::marked('a', Acute),
        'ó' => GlyphToken::marked('o', Acute),
        'è' => GlyphToken::marked('e', Grave),
        'à' => GlyphToken::marked('a', Grave),
        'ä' => GlyphToken::marked('a', Diaeresis),
        'Ä' => GlyphToken::marked('A', Diaeresis),
        'ö' => GlyphToken::marked('o', Diaeresis),
        'Ö' => GlyphToken::marked('O', Diaeresis),
        'ü' => GlyphToken::marked('u', Diaeresis),
        'Ü' => GlyphToken::marked('U', Diaeresis),
        'ë' => GlyphToken::marked('e', Diaeresis),
        'æ' => return push_str(out, "ae"),
        'Æ' => return push_str(out, "AE"),
        'ß' => return push_str(out, "ss"),
        '…' => return push_str(out, "..."),
        '‘' | '’' | '´' => GlyphToken::plain('\''),
        '“' | '”' | '«' | '»' => GlyphToken::plain('"'),
        '–' | '—' => GlyphToken::plain('-'),
        '\u{a0}' | '\t' => GlyphToken::plain(' '),
        '°' => GlyphToken::plain('o'),
        '\n' | '\r' => return,
        _ => GlyphToken::plain('?'),
    };
    out.push(token);
}

fn push_str(out: &mut Vec<GlyphToken>, ascii: &str) {
    out.extend(ascii.chars().map(GlyphToken::plain));
}
