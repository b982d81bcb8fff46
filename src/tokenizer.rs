use bitflags::bitflags;
use deunicode::deunicode;

use crate::lexicon::{Category, Lexicon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    /// `1/2` directly after a number.
    Fraction,
    /// `123-125`, also the shape of a zip+4.
    HyphenRange,
    Comma,
    /// `&` or the word `and`.
    And,
    Hash,
    Period,
}

bitflags! {
    /// Lexicon categories a single word belongs to.
    pub struct LexFlags: u8 {
        const DIRECTIONAL = 0b0000_0001;
        const STREET_TYPE = 0b0000_0010;
        const PLURAL_STREET_TYPE = 0b0000_0100;
        const STATE = 0b0000_1000;
        const NUMBERED_UNIT = 0b0001_0000;
        const UNNUMBERED_UNIT = 0b0010_0000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Transliterated source text.
    pub text: String,
    /// Lowercased `text`, the form used for lexicon lookups.
    pub norm: String,
    pub flags: LexFlags,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, flags: LexFlags) -> Token {
        Token {
            kind,
            text: text.to_string(),
            norm: text.to_ascii_lowercase(),
            flags,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn has(&self, flags: LexFlags) -> bool {
        self.flags.intersects(flags)
    }
}

pub struct Tokenizer<'l> {
    lexicon: &'l Lexicon,
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_separator(ch: char) -> bool {
    matches!(ch, ',' | ';' | '&' | '#' | '.' | '(' | ')' | '"' | '[' | ']')
}

impl<'l> Tokenizer<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Tokenizer<'l> {
        Tokenizer { lexicon }
    }

    /// Split `string` into typed tokens. Never fails; input without anything
    /// recognizable produces an empty vector.
    pub fn tokenize(&self, string: &str) -> Vec<Token> {
        let transliterated = deunicode(string);
        let mut tokens: Vec<Token> = vec![];
        for chunk in transliterated.split_whitespace() {
            let mut word_start = None;
            for (offset, ch) in chunk.char_indices() {
                if is_separator(ch) {
                    if let Some(start) = word_start.take() {
                        self.push_word(&chunk[start..offset], &mut tokens);
                    }
                    self.push_separator(ch, &mut tokens);
                } else if word_start.is_none() {
                    word_start = Some(offset);
                }
            }
            if let Some(start) = word_start {
                self.push_word(&chunk[start..], &mut tokens);
            }
        }
        tracing::trace!(count = tokens.len(), "tokenized");
        tokens
    }

    fn push_separator(&self, ch: char, tokens: &mut Vec<Token>) {
        let kind = match ch {
            ',' | ';' => TokenKind::Comma,
            '&' => TokenKind::And,
            '#' => TokenKind::Hash,
            '.' => TokenKind::Period,
            _ => return,
        };
        tokens.push(Token::new(kind, &ch.to_string(), LexFlags::empty()));
    }

    fn push_word(&self, raw: &str, tokens: &mut Vec<Token>) {
        let word = raw.trim_matches(|ch: char| ch == '-' || ch == '\'' || ch == '/');
        if !word.chars().any(|ch| ch.is_ascii_alphanumeric()) {
            return;
        }
        if self.split_unit(word, tokens) {
            return;
        }
        let after_number = tokens
            .last()
            .map(|token| token.is(TokenKind::Number))
            .unwrap_or(false);
        let kind = if word.chars().all(is_digit) {
            TokenKind::Number
        } else if after_number && is_fraction(word) {
            TokenKind::Fraction
        } else if is_hyphen_range(word) {
            TokenKind::HyphenRange
        } else if word.eq_ignore_ascii_case("and") {
            TokenKind::And
        } else {
            TokenKind::Word
        };
        let flags = if kind == TokenKind::Word {
            self.flags_for(&word.to_ascii_lowercase())
        } else {
            LexFlags::empty()
        };
        tokens.push(Token::new(kind, word, flags));
    }

    /// `Apt4` reads as `Apt # 4`: a numbered-unit designator glued to its
    /// digits.
    fn split_unit(&self, word: &str, tokens: &mut Vec<Token>) -> bool {
        let split = match word.find(is_digit) {
            Some(split) if split > 0 => split,
            _ => return false,
        };
        let (designator, digits) = word.split_at(split);
        let norm = designator.to_ascii_lowercase();
        if !digits.chars().all(is_digit) || !self.lexicon.contains(Category::NumberedUnit, &norm) {
            return false;
        }
        tokens.push(Token::new(TokenKind::Word, designator, self.flags_for(&norm)));
        tokens.push(Token::new(TokenKind::Hash, "#", LexFlags::empty()));
        tokens.push(Token::new(TokenKind::Number, digits, LexFlags::empty()));
        true
    }

    fn flags_for(&self, norm: &str) -> LexFlags {
        let mut flags = LexFlags::empty();
        for (category, flag) in [
            (Category::Directional, LexFlags::DIRECTIONAL),
            (Category::StreetType, LexFlags::STREET_TYPE),
            (Category::PluralStreetType, LexFlags::PLURAL_STREET_TYPE),
            (Category::State, LexFlags::STATE),
            (Category::NumberedUnit, LexFlags::NUMBERED_UNIT),
            (Category::UnnumberedUnit, LexFlags::UNNUMBERED_UNIT),
        ] {
            if self.lexicon.contains(category, norm) {
                flags |= flag;
            }
        }
        flags
    }
}

fn is_fraction(word: &str) -> bool {
    match word.split_once('/') {
        Some((num, den)) => {
            !num.is_empty() && !den.is_empty() && num.chars().all(is_digit) && den.chars().all(is_digit)
        }
        None => false,
    }
}

fn is_hyphen_range(word: &str) -> bool {
    match word.split_once('-') {
        Some((low, high)) => {
            !low.is_empty() && !high.is_empty() && low.chars().all(is_digit) && high.chars().all(is_digit)
        }
        None => false,
    }
}
