use crate::tokenizer::{Token, TokenKind};

use super::place::PlaceRule;
use super::street::StreetRules;
use super::{IntersectionCandidate, Matcher, Span};

impl<'l> Matcher<'l> {
    /// `street (and|&) street [place]` covering every token. Each `&`/`and`
    /// is tried as the join.
    pub(crate) fn intersection(&self, tokens: &[Token]) -> Option<IntersectionCandidate> {
        let rules = StreetRules {
            and_inside: false,
            plural_type: true,
        };
        let mut best: Option<(Rank, IntersectionCandidate)> = None;
        for (join, _) in tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is(TokenKind::And))
        {
            let first = match self.street(tokens, Span::new(0, join), rules) {
                Some(first) => first,
                None => continue,
            };
            for end in join + 2..=tokens.len() {
                let second = match self.street(tokens, Span::new(join + 1, end), rules) {
                    Some(second) => second,
                    // The second street only grows by street tokens, so once
                    // the segment holds anything else no longer end can work.
                    None if !street_tokens(&tokens[join + 1..end]) => break,
                    None => continue,
                };
                let place = match self.place(tokens, Span::new(end, tokens.len()), PlaceRule::Delimited) {
                    Some(place) => place,
                    None => continue,
                };
                let shared_type = second.plural_type && first.street_type.is_none();
                let candidate = IntersectionCandidate {
                    first,
                    join: Span::new(join, join + 1),
                    second,
                    shared_type,
                    place,
                };
                let rank = Rank::new(&candidate, tokens.len() - end);
                if best.as_ref().map_or(true, |(current, _)| rank > *current) {
                    best = Some((rank, candidate));
                }
            }
        }
        best.map(|(_, candidate)| candidate)
    }
}

fn street_tokens(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .all(|token| token.is(TokenKind::Word) || token.is(TokenKind::Number))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    types: usize,
    streets: (usize, usize),
    trailing: usize,
    place: (usize, usize),
}

impl Rank {
    fn new(candidate: &IntersectionCandidate, trailing: usize) -> Rank {
        let (first_typed, first_type, first_suffix) = candidate.first.rank();
        let (second_typed, second_type, second_suffix) = candidate.second.rank();
        Rank {
            types: first_typed as usize + second_typed as usize,
            streets: (first_type + second_type, first_suffix + second_suffix),
            trailing,
            place: candidate.place.rank(),
        }
    }
}
