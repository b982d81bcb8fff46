//! Parsed, normalized location records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::lexicon;

/// A street address. Every field is optional; absent fields are skipped
/// when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressSpecifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Designator such as `Apt`, or `#` when only a hash was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_unit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_unit_num: Option<String>,
}

/// Two streets meeting, with an optional shared place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntersectionSpecifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Specifier {
    Address(AddressSpecifier),
    Intersection(IntersectionSpecifier),
}

impl Specifier {
    pub fn as_address(&self) -> Option<&AddressSpecifier> {
        match self {
            Specifier::Address(address) => Some(address),
            Specifier::Intersection(_) => None,
        }
    }

    pub fn as_intersection(&self) -> Option<&IntersectionSpecifier> {
        match self {
            Specifier::Intersection(intersection) => Some(intersection),
            Specifier::Address(_) => None,
        }
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, Specifier::Intersection(_))
    }
}

impl AddressSpecifier {
    /// Two-digit FIPS code of `state`, when it has one.
    pub fn state_fips(&self) -> Option<&'static str> {
        self.state.as_deref().and_then(|code| lexicon().state_fips(code))
    }

    fn unit_text(&self) -> Option<String> {
        match (self.sec_unit_type.as_deref(), self.sec_unit_num.as_deref()) {
            (Some("#"), Some(num)) | (None, Some(num)) => Some(format!("#{}", num)),
            (Some(kind), Some(num)) => Some(format!("{} {}", kind, num)),
            (Some(kind), None) => Some(kind.to_string()),
            (None, None) => None,
        }
    }
}

impl IntersectionSpecifier {
    pub fn state_fips(&self) -> Option<&'static str> {
        self.state.as_deref().and_then(|code| lexicon().state_fips(code))
    }
}

fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts.into_iter().flatten().collect::<Vec<&str>>().join(" ")
}

/// Appends `, city, state zip` for whichever parts are present.
fn write_place(
    f: &mut fmt::Formatter<'_>,
    city: Option<&str>,
    state: Option<&str>,
    zip: Option<&str>,
) -> fmt::Result {
    if let Some(city) = city {
        write!(f, ", {}", city)?;
    }
    let region = join_present([state, zip]);
    if !region.is_empty() {
        write!(f, ", {}", region)?;
    }
    Ok(())
}

impl fmt::Display for AddressSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit_text();
        let line = join_present([
            self.number.as_deref(),
            self.prefix.as_deref(),
            self.street.as_deref(),
            self.r#type.as_deref(),
            self.suffix.as_deref(),
            unit.as_deref(),
        ]);
        f.write_str(&line)?;
        write_place(f, self.city.as_deref(), self.state.as_deref(), self.zip.as_deref())
    }
}

impl fmt::Display for IntersectionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = join_present([
            self.prefix1.as_deref(),
            self.street1.as_deref(),
            self.type1.as_deref(),
            self.suffix1.as_deref(),
        ]);
        let second = join_present([
            self.prefix2.as_deref(),
            self.street2.as_deref(),
            self.type2.as_deref(),
            self.suffix2.as_deref(),
        ]);
        write!(f, "{} & {}", first, second)?;
        write_place(f, self.city.as_deref(), self.state.as_deref(), self.zip.as_deref())
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::Address(address) => address.fmt(f),
            Specifier::Intersection(intersection) => intersection.fmt(f),
        }
    }
}
