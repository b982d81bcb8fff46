use crate::lexicon::Category;
use crate::tokenizer::{LexFlags, Token, TokenKind};

use super::{norms, span_len, Matcher, Span};

/// `[prefix] name [type] [suffix]` over one street segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreetParts {
    pub prefix: Option<Span>,
    pub name: Span,
    pub street_type: Option<Span>,
    pub suffix: Option<Span>,
    /// `street_type` was read from the plural table.
    pub plural_type: bool,
}

impl StreetParts {
    /// Ordering used to pick between readings: a type beats none, longer
    /// types and suffixes beat shorter ones.
    pub(crate) fn rank(&self) -> (bool, usize, usize) {
        (
            self.street_type.is_some(),
            span_len(self.street_type),
            span_len(self.suffix),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StreetRules {
    /// `&`/`and` may join words inside the name.
    pub and_inside: bool,
    /// Plural types ("Aves") are accepted and flagged.
    pub plural_type: bool,
}

impl<'l> Matcher<'l> {
    /// Best reading of `span` as a single street, or `None` if the tokens
    /// cannot form one.
    pub(crate) fn street(&self, tokens: &[Token], span: Span, rules: StreetRules) -> Option<StreetParts> {
        if span.is_empty() {
            return None;
        }
        let segment = span.tokens(tokens);
        let allowed = segment.iter().all(|token| match token.kind {
            TokenKind::Word | TokenKind::Number => true,
            TokenKind::And => rules.and_inside,
            _ => false,
        });
        if !allowed {
            return None;
        }

        let mut best: Option<StreetParts> = None;
        for suffix_len in self.directional_tails(segment) {
            let body_end = span.end - suffix_len;
            let body = Span::new(span.start, body_end);
            for (type_len, plural) in self.type_tails(tokens, body, rules) {
                let name_end = body_end - type_len;
                if name_end <= span.start {
                    continue;
                }
                let prefix_len = self.prefix_len(tokens, Span::new(span.start, name_end));
                let name = Span::new(span.start + prefix_len, name_end);
                if !valid_name(tokens, name, type_len > 0) {
                    continue;
                }
                let parts = StreetParts {
                    prefix: (prefix_len > 0).then(|| Span::new(span.start, span.start + prefix_len)),
                    name,
                    street_type: (type_len > 0).then(|| Span::new(name_end, body_end)),
                    suffix: (suffix_len > 0).then(|| Span::new(body_end, span.end)),
                    plural_type: plural,
                };
                if best.map_or(true, |current| parts.rank() > current.rank()) {
                    best = Some(parts);
                }
            }
        }
        best
    }

    /// Lengths of directional phrases ending the segment, longest first,
    /// always followed by zero.
    fn directional_tails(&self, segment: &[Token]) -> Vec<usize> {
        let words = norms(segment);
        let mut lengths: Vec<usize> = (1..words.len())
            .rev()
            .filter(|len| {
                segment[words.len() - len..]
                    .iter()
                    .all(|token| token.is(TokenKind::Word))
                    && self
                        .lexicon
                        .matches_exactly(Category::Directional, &words[words.len() - len..])
                        .is_some()
            })
            .collect();
        lengths.push(0);
        lengths
    }

    /// `(length, plural)` for each street type ending `body`, longest first,
    /// always followed by `(0, false)`.
    fn type_tails(&self, tokens: &[Token], body: Span, rules: StreetRules) -> Vec<(usize, bool)> {
        let segment = body.tokens(tokens);
        let words = norms(segment);
        let mut tails = vec![];
        for len in (1..words.len()).rev() {
            let tail = &words[words.len() - len..];
            if !segment[words.len() - len..]
                .iter()
                .all(|token| token.is(TokenKind::Word))
            {
                continue;
            }
            if rules.plural_type
                && len == 1
                && self
                    .lexicon
                    .matches_exactly(Category::PluralStreetType, tail)
                    .is_some()
            {
                tails.push((len, true));
            } else if self
                .lexicon
                .matches_exactly(Category::StreetType, tail)
                .is_some()
            {
                tails.push((len, false));
            }
        }
        tails.push((0, false));
        tails
    }

    /// Longest directional prefix of `span` that still leaves a name token.
    fn prefix_len(&self, tokens: &[Token], span: Span) -> usize {
        let words = norms(span.tokens(tokens));
        match words.split_last() {
            Some((_, head)) => self
                .lexicon
                .longest_prefix(Category::Directional, head)
                .map(|(len, _)| len)
                .unwrap_or(0),
            None => 0,
        }
    }
}

/// A name starts with a word and never starts or ends on a conjunction.
/// Without a type, a street-type word may only lead the name ("Avenue of the
/// Americas") or come right before a route number ("County Road 5");
/// anywhere else it means the type was left behind.
fn valid_name(tokens: &[Token], name: Span, has_type: bool) -> bool {
    let words = name.tokens(tokens);
    let (first, last) = match (words.first(), words.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };
    if !first.is(TokenKind::Word) || last.is(TokenKind::And) {
        return false;
    }
    if has_type {
        return true;
    }
    let numbered = words
        .iter()
        .rev()
        .take_while(|token| token.is(TokenKind::Number))
        .count();
    let core = words.len() - numbered;
    let inner_end = if numbered > 0 { core - 1 } else { core };
    !words
        .get(1..inner_end)
        .unwrap_or(&[])
        .iter()
        .any(|token| token.has(LexFlags::STREET_TYPE))
}
