//! Grammar families matched against a token sequence.
//!
//! Each family is matched on its own and yields at most one candidate: the
//! best-ranked way of covering the tokens. Candidates hold token spans only;
//! turning them into text is the builder's job.

mod address;
mod intersection;
mod place;
mod street;

use std::fmt;

use crate::lexicon::Lexicon;
use crate::tokenizer::{Token, TokenKind};

pub use place::{PlaceParts, UnitParts};
pub use street::StreetParts;

/// Half-open range of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tokens<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        &tokens[self.start..self.end]
    }
}

fn span_len(span: Option<Span>) -> usize {
    span.map(|span| span.len()).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Address,
    Intersection,
    InformalAddress,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Address => write!(f, "address"),
            Family::Intersection => write!(f, "intersection"),
            Family::InformalAddress => write!(f, "informal address"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCandidate {
    /// `Address` or `InformalAddress`.
    pub family: Family,
    pub number: Option<Span>,
    pub street: StreetParts,
    pub unit: Option<UnitParts>,
    pub place: PlaceParts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionCandidate {
    pub first: StreetParts,
    /// The `&`/`and` token joining the two streets.
    pub join: Span,
    pub second: StreetParts,
    /// The second street's plural type ("Sts") applies to both streets.
    pub shared_type: bool,
    pub place: PlaceParts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Address(AddressCandidate),
    Intersection(IntersectionCandidate),
}

impl Candidate {
    pub fn family(&self) -> Family {
        match self {
            Candidate::Address(address) => address.family,
            Candidate::Intersection(_) => Family::Intersection,
        }
    }
}

/// Drop tokens that carry no structure. Periods only ever decorate
/// abbreviations, so spans are computed over what remains.
pub fn significant_tokens(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !token.is(TokenKind::Period))
        .collect()
}

pub struct Matcher<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Matcher<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Matcher<'l> {
        Matcher { lexicon }
    }

    /// Best candidate of one family, or `None` if the family does not match.
    pub fn match_family(&self, family: Family, tokens: &[Token]) -> Option<Candidate> {
        let candidate = match family {
            Family::Address => self.address(tokens).map(Candidate::Address),
            Family::InformalAddress => self.informal_address(tokens).map(Candidate::Address),
            Family::Intersection => self.intersection(tokens).map(Candidate::Intersection),
        };
        tracing::trace!(%family, matched = candidate.is_some(), "family evaluated");
        candidate
    }

    /// One candidate per family in `families` that matched, in the same order.
    pub fn match_all(&self, families: &[Family], tokens: &[Token]) -> Vec<Candidate> {
        families
            .iter()
            .filter_map(|family| self.match_family(*family, tokens))
            .collect()
    }
}

fn norms(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.norm.as_str()).collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::lexicon::lexicon;
    use crate::tokenizer::{Token, Tokenizer};

    use super::significant_tokens;

    pub(crate) fn tokens(input: &str) -> Vec<Token> {
        significant_tokens(Tokenizer::new(lexicon()).tokenize(input))
    }

    pub(crate) fn text(tokens: &[Token], span: Option<super::Span>) -> Option<String> {
        span.map(|span| {
            span.tokens(tokens)
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<&str>>()
                .join(" ")
        })
    }
}
