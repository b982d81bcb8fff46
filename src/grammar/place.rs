use crate::lexicon::Category;
use crate::tokenizer::{LexFlags, Token, TokenKind};

use super::{norms, span_len, Matcher, Span};

/// Secondary unit: `designator [#] id`, `# id`, or a standalone designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitParts {
    pub designator: Option<Span>,
    pub hash: Option<Span>,
    pub id: Option<Span>,
}

/// Trailing `city`, `state` and `zip`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceParts {
    pub city: Option<Span>,
    pub state: Option<Span>,
    pub zip: Option<Span>,
}

impl PlaceParts {
    pub fn filled(&self) -> usize {
        [self.city, self.state, self.zip]
            .iter()
            .filter(|part| part.is_some())
            .count()
    }

    pub(crate) fn rank(&self) -> (usize, usize) {
        (self.filled(), span_len(self.state))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaceRule {
    /// A city must be followed by a state.
    Formal,
    /// City, state and zip are independent.
    Informal,
    /// A city without a state must be set off from the street by a comma.
    Delimited,
}

/// Everything after the street segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tail {
    pub unit: Option<UnitParts>,
    pub place: PlaceParts,
}

impl Tail {
    pub(crate) fn rank(&self) -> (usize, usize, bool) {
        let (filled, state_len) = self.place.rank();
        (filled, state_len, self.unit.is_some())
    }
}

fn trim_commas(tokens: &[Token], span: Span) -> Span {
    let mut start = span.start;
    let mut end = span.end;
    while start < end && tokens[start].is(TokenKind::Comma) {
        start += 1;
    }
    while end > start && tokens[end - 1].is(TokenKind::Comma) {
        end -= 1;
    }
    Span::new(start, end)
}

fn is_zip_shaped(token: &Token) -> bool {
    match token.kind {
        TokenKind::Number => token.text.len() >= 5,
        TokenKind::HyphenRange => token
            .text
            .split_once('-')
            .map(|(low, _)| low.len() == 5)
            .unwrap_or(false),
        _ => false,
    }
}

/// Any number closing a place once a state precedes it. The builder drops
/// the malformed ones.
fn is_loose_zip(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Number | TokenKind::HyphenRange)
}

fn is_unit_id(token: &Token) -> bool {
    match token.kind {
        TokenKind::Number | TokenKind::HyphenRange => true,
        TokenKind::Word => {
            token.text.chars().any(|ch| ch.is_ascii_digit())
                || (token.text.len() <= 2 && token.text.chars().all(|ch| ch.is_ascii_alphabetic()))
        }
        _ => false,
    }
}

impl<'l> Matcher<'l> {
    /// Secondary unit starting at `span.start` (after any commas), with the
    /// index of the first token after it.
    pub(crate) fn unit(&self, tokens: &[Token], span: Span) -> Option<(UnitParts, usize)> {
        let span = trim_commas(tokens, span);
        let at = |index: usize| tokens[..span.end].get(index);
        let first = at(span.start)?;
        if first.is(TokenKind::Hash) {
            at(span.start + 1).filter(|token| is_unit_id(token))?;
            return Some((
                UnitParts {
                    designator: None,
                    hash: Some(Span::new(span.start, span.start + 1)),
                    id: Some(Span::new(span.start + 1, span.start + 2)),
                },
                span.start + 2,
            ));
        }
        if !first.is(TokenKind::Word) {
            return None;
        }
        let designator = Some(Span::new(span.start, span.start + 1));
        if first.has(LexFlags::NUMBERED_UNIT) {
            let mut next = span.start + 1;
            let hash = match at(next) {
                Some(token) if token.is(TokenKind::Hash) => {
                    next += 1;
                    Some(Span::new(next - 1, next))
                }
                _ => None,
            };
            if at(next).map(is_unit_id).unwrap_or(false) {
                return Some((
                    UnitParts {
                        designator,
                        hash,
                        id: Some(Span::new(next, next + 1)),
                    },
                    next + 1,
                ));
            }
        }
        if first.has(LexFlags::UNNUMBERED_UNIT) {
            return Some((
                UnitParts {
                    designator,
                    hash: None,
                    id: None,
                },
                span.start + 1,
            ));
        }
        None
    }

    /// `[city] [state] [zip]` covering all of `span`, commas allowed between
    /// the parts. Under [`PlaceRule::Formal`] a city needs a state. A number
    /// that is not zip-shaped is only read as a zip right after a state.
    pub(crate) fn place(&self, tokens: &[Token], span: Span, rule: PlaceRule) -> Option<PlaceParts> {
        let set_off = tokens
            .get(span.start)
            .map(|token| token.is(TokenKind::Comma))
            .unwrap_or(false);
        let span = trim_commas(tokens, span);
        if span.is_empty() {
            return Some(PlaceParts::default());
        }
        let mut body = span;
        let mut zip = None;
        let last = &tokens[span.end - 1];
        let loose_zip = !is_zip_shaped(last) && is_loose_zip(last);
        if is_zip_shaped(last) || loose_zip {
            zip = Some(Span::new(span.end - 1, span.end));
            body = trim_commas(tokens, Span::new(span.start, span.end - 1));
        }

        let segment = body.tokens(tokens);
        let words = norms(segment);
        let mut state_lengths: Vec<usize> = (1..=words.len())
            .rev()
            .filter(|len| {
                segment[words.len() - len..]
                    .iter()
                    .all(|token| token.is(TokenKind::Word))
                    && self
                        .lexicon
                        .matches_exactly(Category::State, &words[words.len() - len..])
                        .is_some()
            })
            .collect();
        state_lengths.push(0);

        let mut best: Option<PlaceParts> = None;
        for state_len in state_lengths {
            let state = (state_len > 0).then(|| Span::new(body.end - state_len, body.end));
            let city_span = trim_commas(tokens, Span::new(body.start, body.end - state_len));
            let city = if city_span.is_empty() {
                None
            } else if city_span
                .tokens(tokens)
                .iter()
                .all(|token| token.is(TokenKind::Word))
            {
                Some(city_span)
            } else {
                continue;
            };
            if loose_zip && (state.is_none() || body.end != span.end - 1) {
                continue;
            }
            let city_needs_state = match rule {
                PlaceRule::Formal => true,
                PlaceRule::Informal => false,
                PlaceRule::Delimited => !set_off,
            };
            if city_needs_state && city.is_some() && state.is_none() {
                continue;
            }
            let parts = PlaceParts { city, state, zip };
            if best.map_or(true, |current| parts.rank() > current.rank()) {
                best = Some(parts);
            }
        }
        best
    }

    /// Optional unit followed by a place, covering all of `span`. When both
    /// readings work the one filling more place slots wins; ties keep the
    /// unit.
    pub(crate) fn tail(&self, tokens: &[Token], span: Span, rule: PlaceRule) -> Option<Tail> {
        let with_unit = self.unit(tokens, span).and_then(|(unit, next)| {
            self.place(tokens, Span::new(next, span.end), rule)
                .map(|place| Tail {
                    unit: Some(unit),
                    place,
                })
        });
        let without_unit = self
            .place(tokens, span, rule)
            .map(|place| Tail { unit: None, place });
        match (with_unit, without_unit) {
            (Some(unit), Some(bare)) if bare.place.rank() > unit.place.rank() => Some(bare),
            (Some(unit), _) => Some(unit),
            (None, bare) => bare,
        }
    }
}
