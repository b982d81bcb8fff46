use crate::tokenizer::{Token, TokenKind};

use super::place::{PlaceRule, Tail};
use super::street::StreetRules;
use super::{AddressCandidate, Family, Matcher, Span, StreetParts};

/// `number [fraction]` or a hyphenated range at the start of the input.
fn number(tokens: &[Token]) -> Option<Span> {
    match tokens.first().map(|token| token.kind) {
        Some(TokenKind::Number) => {
            let fraction = tokens
                .get(1)
                .map(|token| token.is(TokenKind::Fraction))
                .unwrap_or(false);
            Some(Span::new(0, if fraction { 2 } else { 1 }))
        }
        Some(TokenKind::HyphenRange) => Some(Span::new(0, 1)),
        _ => None,
    }
}

fn street_token(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Word | TokenKind::Number | TokenKind::And
    )
}

impl<'l> Matcher<'l> {
    /// `[number] street [unit] [place]` covering every token.
    pub(crate) fn address(&self, tokens: &[Token]) -> Option<AddressCandidate> {
        self.address_with(tokens, Family::Address, PlaceRule::Formal)
    }

    /// `number street [unit] [city] [state] [zip]` over the longest prefix of
    /// the tokens that parses; whatever trails it is ignored.
    pub(crate) fn informal_address(&self, tokens: &[Token]) -> Option<AddressCandidate> {
        let number = number(tokens)?;
        (number.end + 1..=tokens.len())
            .rev()
            .find_map(|end| {
                self.address_with(&tokens[..end], Family::InformalAddress, PlaceRule::Informal)
            })
    }

    fn address_with(&self, tokens: &[Token], family: Family, rule: PlaceRule) -> Option<AddressCandidate> {
        let number = number(tokens);
        let start = number.map(|span| span.end).unwrap_or(0);
        let rules = StreetRules {
            and_inside: true,
            plural_type: false,
        };

        let mut best: Option<(Rank, AddressCandidate)> = None;
        for end in start + 1..=tokens.len() {
            if !street_token(&tokens[end - 1]) {
                break;
            }
            let street = match self.street(tokens, Span::new(start, end), rules) {
                Some(street) => street,
                None => continue,
            };
            let tail = match self.tail(tokens, Span::new(end, tokens.len()), rule) {
                Some(tail) => tail,
                None => continue,
            };
            let rank = Rank::new(&street, tokens.len() - end, &tail);
            if best.as_ref().map_or(true, |(current, _)| rank > *current) {
                best = Some((
                    rank,
                    AddressCandidate {
                        family,
                        number,
                        street,
                        unit: tail.unit,
                        place: tail.place,
                    },
                ));
            }
        }
        best.map(|(_, candidate)| candidate)
    }
}

/// Street reading first, then how much of the input moved past the street,
/// then how well that remainder parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    street: (bool, usize, usize),
    trailing: usize,
    tail: (usize, usize, bool),
}

impl Rank {
    fn new(street: &StreetParts, trailing: usize, tail: &Tail) -> Rank {
        Rank {
            street: street.rank(),
            trailing,
            tail: tail.rank(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Matcher;
    use crate::grammar::test_support::{text, tokens};
    use crate::grammar::{AddressCandidate, Family};
    use crate::lexicon::lexicon;

    fn fields(input: &str, family: Family) -> Option<Vec<Option<String>>> {
        let toks = tokens(input);
        let matcher = Matcher::new(lexicon());
        let candidate: AddressCandidate = match family {
            Family::Address => matcher.address(&toks)?,
            _ => matcher.informal_address(&toks)?,
        };
        let unit = candidate.unit;
        Some(vec![
            text(&toks, candidate.number),
            text(&toks, candidate.street.prefix),
            text(&toks, Some(candidate.street.name)),
            text(&toks, candidate.street.street_type),
            text(&toks, candidate.street.suffix),
            text(&toks, unit.and_then(|unit| unit.designator)),
            text(&toks, unit.and_then(|unit| unit.id)),
            text(&toks, candidate.place.city),
            text(&toks, candidate.place.state),
            text(&toks, candidate.place.zip),
        ])
    }

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn address_white_house() {
        assert_eq!(
            fields("1600 Pennsylvania Ave NW, Washington, DC 20500", Family::Address),
            Some(vec![
                s("1600"),
                None,
                s("Pennsylvania"),
                s("Ave"),
                s("NW"),
                None,
                None,
                s("Washington"),
                s("DC"),
                s("20500")
            ])
        );
    }

    #[test]
    fn address_without_commas() {
        assert_eq!(
            fields("1600 Pennsylvania Ave NW Washington DC 20500", Family::Address),
            fields("1600 Pennsylvania Ave NW, Washington, DC 20500", Family::Address),
        );
    }

    #[test]
    fn address_street_named_like_type() {
        let parsed = fields("1 Infinite Loop, Cupertino, CA 95014", Family::Address).unwrap();
        assert_eq!(parsed[2], s("Infinite"));
        assert_eq!(parsed[3], s("Loop"));
        assert_eq!(parsed[7], s("Cupertino"));
    }

    #[test]
    fn address_with_unit() {
        let parsed = fields("123 Main St Apt 4B, Springfield, IL 62701", Family::Address).unwrap();
        assert_eq!(parsed[5], s("Apt"));
        assert_eq!(parsed[6], s("4B"));
        assert_eq!(parsed[7], s("Springfield"));
    }

    #[test]
    fn address_fraction_number() {
        let parsed = fields("12 1/2 Main St", Family::Address).unwrap();
        assert_eq!(parsed[0], s("12 1/2"));
        assert_eq!(parsed[2], s("Main"));
    }

    #[test]
    fn address_without_place() {
        let parsed = fields("123 Main St", Family::Address).unwrap();
        assert_eq!(parsed[..5].to_vec(), vec![s("123"), None, s("Main"), s("St"), None]);
        assert!(parsed[5..].iter().all(Option::is_none));
    }

    #[test]
    fn address_city_without_state_is_informal_only() {
        assert_eq!(fields("123 Main St, Springfield", Family::Address), None);
        let parsed = fields("123 Main St, Springfield", Family::InformalAddress).unwrap();
        assert_eq!(parsed[7], s("Springfield"));
        assert_eq!(parsed[8], None);
    }

    #[test]
    fn address_prefers_unit_over_long_street() {
        let parsed = fields("123 Main Apt 4", Family::Address).unwrap();
        assert_eq!(parsed[2], s("Main"));
        assert_eq!(parsed[6], s("4"));
    }

    #[test]
    fn informal_needs_number() {
        assert_eq!(fields("Main St, Springfield", Family::InformalAddress), None);
        assert!(fields("Main St", Family::Address).is_some());
    }

    #[test]
    fn informal_ignores_trailing_tokens() {
        let parsed = fields("123 Main St, Springfield, IL 62701, USA #", Family::InformalAddress).unwrap();
        assert_eq!(parsed[8], s("IL"));
        assert_eq!(parsed[9], s("62701"));
        assert_eq!(fields("123 Main St, Springfield, IL 62701, USA #", Family::Address), None);
    }
}
