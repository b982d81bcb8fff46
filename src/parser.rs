use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builder::SpecifierBuilder;
use crate::config::ParserConfig;
use crate::disambiguator;
use crate::error::{Error, Result};
use crate::grammar::{significant_tokens, Matcher};
use crate::lexicon::{lexicon, Lexicon};
use crate::specifier::{AddressSpecifier, IntersectionSpecifier, Specifier};
use crate::tokenizer::Tokenizer;

/// The public parse operations, carried by errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ParseLocation,
    ParseAddress,
    ParseInformalAddress,
    ParseIntersection,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ParseLocation => "parse_location",
            Operation::ParseAddress => "parse_address",
            Operation::ParseInformalAddress => "parse_informal_address",
            Operation::ParseIntersection => "parse_intersection",
        };
        f.write_str(name)
    }
}

pub struct Parser {
    config: ParserConfig,
    lexicon: &'static Lexicon,
}

impl Default for Parser {
    fn default() -> Self {
        Parser {
            config: ParserConfig::default(),
            lexicon: lexicon(),
        }
    }
}

impl Parser {
    pub fn new(config: ParserConfig) -> Result<Parser> {
        config.validate()?;
        Ok(Parser {
            config,
            lexicon: lexicon(),
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an address or an intersection, whichever the text looks like.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse_location(&self, text: &str) -> Result<Specifier> {
        self.run(Operation::ParseLocation, text)
    }

    /// Parse a formal address: a street, optionally numbered, followed by an
    /// optional unit and `[city] state [zip]`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse_address(&self, text: &str) -> Result<AddressSpecifier> {
        self.address(Operation::ParseAddress, text)
    }

    /// Parse a numbered street address, reading as much of the text as fits
    /// and ignoring the rest.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse_informal_address(&self, text: &str) -> Result<AddressSpecifier> {
        self.address(Operation::ParseInformalAddress, text)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse_intersection(&self, text: &str) -> Result<IntersectionSpecifier> {
        match self.run(Operation::ParseIntersection, text)? {
            Specifier::Intersection(intersection) => Ok(intersection),
            Specifier::Address(_) => Err(Error::NoMatch {
                operation: Operation::ParseIntersection,
            }),
        }
    }

    /// [`Parser::parse_location`] over a batch, results in input order.
    #[tracing::instrument(level = "debug", skip_all, fields(count = texts.len()))]
    pub fn parse_locations<S>(&self, texts: &[S]) -> Vec<Result<Specifier>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            texts
                .par_iter()
                .map(|text| self.parse_location(text.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            texts
                .iter()
                .map(|text| self.parse_location(text.as_ref()))
                .collect()
        }
    }

    fn address(&self, operation: Operation, text: &str) -> Result<AddressSpecifier> {
        match self.run(operation, text)? {
            Specifier::Address(address) => Ok(address),
            Specifier::Intersection(_) => Err(Error::NoMatch { operation }),
        }
    }

    fn run(&self, operation: Operation, text: &str) -> Result<Specifier> {
        if text.trim().is_empty() {
            return Err(Error::Input { operation });
        }
        let tokens = significant_tokens(Tokenizer::new(self.lexicon).tokenize(text));
        if tokens.len() > self.config.max_tokens {
            tracing::debug!(
                count = tokens.len(),
                max_tokens = self.config.max_tokens,
                "input exceeds token limit"
            );
            return Err(Error::NoMatch { operation });
        }
        let candidates = Matcher::new(self.lexicon).match_all(disambiguator::families(operation), &tokens);
        let candidate =
            disambiguator::select(operation, candidates, &tokens).ok_or(Error::NoMatch { operation })?;
        SpecifierBuilder::new(self.lexicon, &self.config, &tokens, operation).build(&candidate)
    }
}
