//! Parse free-form US street addresses and street intersections into
//! normalized records.
//!
//! ```
//! let address = streetaddr::parse_address("1600 Pennsylvania Ave NW, Washington, DC 20500").unwrap();
//! assert_eq!(address.street.as_deref(), Some("Pennsylvania"));
//! assert_eq!(address.suffix.as_deref(), Some("NW"));
//! assert_eq!(address.zip.as_deref(), Some("20500"));
//! ```

mod builder;
pub mod config;
mod disambiguator;
pub mod error;
mod grammar;
pub mod lexicon;
mod parser;
pub mod specifier;
mod tokenizer;

use once_cell::sync::Lazy;

pub use config::{ParserConfig, ParserConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use parser::{Operation, Parser};
pub use specifier::{AddressSpecifier, IntersectionSpecifier, Specifier};

static PARSER: Lazy<Parser> = Lazy::new(Parser::default);

/// Parse an address or an intersection with the default configuration.
pub fn parse_location(text: &str) -> Result<Specifier> {
    PARSER.parse_location(text)
}

pub fn parse_address(text: &str) -> Result<AddressSpecifier> {
    PARSER.parse_address(text)
}

pub fn parse_informal_address(text: &str) -> Result<AddressSpecifier> {
    PARSER.parse_informal_address(text)
}

pub fn parse_intersection(text: &str) -> Result<IntersectionSpecifier> {
    PARSER.parse_intersection(text)
}

pub fn parse_locations<S>(texts: &[S]) -> Vec<Result<Specifier>>
where
    S: AsRef<str> + Sync,
{
    PARSER.parse_locations(texts)
}
