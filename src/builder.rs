//! Turns a matched candidate into a normalized specifier.

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::grammar::{AddressCandidate, Candidate, IntersectionCandidate, PlaceParts, Span, StreetParts};
use crate::lexicon::{Category, Lexicon};
use crate::parser::Operation;
use crate::specifier::{AddressSpecifier, IntersectionSpecifier, Specifier};
use crate::tokenizer::Token;

pub struct SpecifierBuilder<'a> {
    lexicon: &'a Lexicon,
    config: &'a ParserConfig,
    tokens: &'a [Token],
    operation: Operation,
}

struct Street {
    prefix: Option<String>,
    name: String,
    street_type: Option<String>,
    suffix: Option<String>,
}

struct Place {
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
}

impl<'a> SpecifierBuilder<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        config: &'a ParserConfig,
        tokens: &'a [Token],
        operation: Operation,
    ) -> SpecifierBuilder<'a> {
        SpecifierBuilder {
            lexicon,
            config,
            tokens,
            operation,
        }
    }

    pub fn build(&self, candidate: &Candidate) -> Result<Specifier> {
        match candidate {
            Candidate::Address(address) => self.address(address).map(Specifier::Address),
            Candidate::Intersection(intersection) => {
                self.intersection(intersection).map(Specifier::Intersection)
            }
        }
    }

    fn address(&self, candidate: &AddressCandidate) -> Result<AddressSpecifier> {
        let street = self.street(&candidate.street, "street", None)?;
        let place = self.place(&candidate.place);
        let (sec_unit_type, sec_unit_num) = match candidate.unit {
            Some(unit) => {
                let designator = match unit.designator {
                    Some(span) => self
                        .canonical(Category::NumberedUnit, span)
                        .or_else(|| self.canonical(Category::UnnumberedUnit, span)),
                    None => unit.hash.map(|_| "#".to_string()),
                };
                (designator, unit.id.map(|span| self.raw(span)))
            }
            None => (None, None),
        };
        Ok(AddressSpecifier {
            number: candidate.number.map(|span| self.raw(span)),
            prefix: street.prefix,
            street: Some(street.name),
            r#type: street.street_type,
            suffix: street.suffix,
            city: place.city,
            state: place.state,
            zip: place.zip,
            sec_unit_type,
            sec_unit_num,
        })
    }

    fn intersection(&self, candidate: &IntersectionCandidate) -> Result<IntersectionSpecifier> {
        let shared = if candidate.shared_type {
            candidate
                .second
                .street_type
                .and_then(|span| self.canonical(Category::PluralStreetType, span))
        } else {
            None
        };
        let first = self.street(&candidate.first, "street1", shared)?;
        let second = self.street(&candidate.second, "street2", None)?;
        let place = self.place(&candidate.place);
        Ok(IntersectionSpecifier {
            prefix1: first.prefix,
            street1: Some(first.name),
            type1: first.street_type,
            suffix1: first.suffix,
            prefix2: second.prefix,
            street2: Some(second.name),
            type2: second.street_type,
            suffix2: second.suffix,
            city: place.city,
            state: place.state,
            zip: place.zip,
        })
    }

    fn street(&self, parts: &StreetParts, field: &'static str, shared_type: Option<String>) -> Result<Street> {
        let name = self.cased(parts.name);
        if name.trim().is_empty() {
            return Err(Error::Validation {
                operation: self.operation,
                field,
            });
        }
        let type_category = if parts.plural_type {
            Category::PluralStreetType
        } else {
            Category::StreetType
        };
        Ok(Street {
            prefix: parts
                .prefix
                .and_then(|span| self.canonical(Category::Directional, span)),
            name,
            street_type: parts
                .street_type
                .and_then(|span| self.canonical(type_category, span))
                .or(shared_type),
            suffix: parts
                .suffix
                .and_then(|span| self.canonical(Category::Directional, span)),
        })
    }

    fn place(&self, parts: &PlaceParts) -> Place {
        Place {
            city: parts.city.map(|span| self.cased(span)),
            state: parts
                .state
                .and_then(|span| self.canonical(Category::State, span)),
            zip: parts.zip.and_then(|span| self.zip(span)),
        }
    }

    /// `NNNNN` or `NNNNN-NNNN`; a run of nine digits is read as zip+4.
    /// Anything else is dropped.
    fn zip(&self, span: Span) -> Option<String> {
        let text = self.raw(span);
        let digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
        let (zip5, plus4) = match text.len() {
            5 if digits(&text) => (&text[..5], None),
            9 if digits(&text) => (&text[..5], Some(&text[5..])),
            10 if text.as_bytes()[5] == b'-' && digits(&text[..5]) && digits(&text[6..]) => {
                (&text[..5], Some(&text[6..]))
            }
            _ => {
                tracing::debug!(zip = %text, "dropping malformed zip code");
                return None;
            }
        };
        match plus4 {
            Some(plus4) if self.config.keep_zip4 => Some(format!("{}-{}", zip5, plus4)),
            _ => Some(zip5.to_string()),
        }
    }

    fn canonical(&self, category: Category, span: Span) -> Option<String> {
        let words: Vec<&str> = span
            .tokens(self.tokens)
            .iter()
            .map(|token| token.norm.as_str())
            .collect();
        self.lexicon
            .matches_exactly(category, &words)
            .map(str::to_string)
    }

    fn raw(&self, span: Span) -> String {
        span.tokens(self.tokens)
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<&str>>()
            .join(" ")
    }

    fn cased(&self, span: Span) -> String {
        let words: Vec<String> = span
            .tokens(self.tokens)
            .iter()
            .filter(|token| !token.text.is_empty())
            .map(|token| {
                if self.config.normalize_case {
                    title_case(&token.text)
                } else {
                    token.text.clone()
                }
            })
            .collect();
        words.join(" ")
    }
}

/// Words written in mixed case ("McDonald") are kept; anything else gets
/// an initial capital after every non-alphanumeric boundary.
pub fn title_case(word: &str) -> String {
    let has_lower = word.chars().any(|ch| ch.is_lowercase());
    let inner_upper = word
        .chars()
        .zip(word.chars().skip(1))
        .any(|(before, ch)| before.is_alphanumeric() && ch.is_uppercase());
    if has_lower && inner_upper {
        return word.to_string();
    }
    let mut cased = String::with_capacity(word.len());
    let mut boundary = true;
    for ch in word.chars() {
        if boundary {
            cased.extend(ch.to_uppercase());
        } else {
            cased.extend(ch.to_lowercase());
        }
        boundary = !ch.is_alphanumeric();
    }
    cased
}
