//! Normalization tables for directionals, street types, states and
//! secondary-unit designators.
//!
//! Every table is compiled once into an [`fst::Map`] whose values index the
//! canonical spelling. The tables are built on first use and are read-only
//! afterwards, so lookups from any number of threads need no locking.

mod tables;

use std::collections::{BTreeMap, HashMap};

use deunicode::deunicode;
use fst::Map;
use once_cell::sync::Lazy;

use tables::Row;

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

/// The process-wide lexicon.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Directional,
    StreetType,
    /// Plural street types such as "Sts", shared by both streets of an
    /// intersection.
    PluralStreetType,
    State,
    /// Designators followed by an identifier ("Apt 4").
    NumberedUnit,
    /// Designators that stand alone ("Rear").
    UnnumberedUnit,
}

struct Table {
    index: Map<Vec<u8>>,
    canonical: Vec<&'static str>,
    max_words: usize,
}

impl Table {
    /// `canonical_keys` also indexes each canonical spelling under itself.
    fn from_rows<'r>(
        rows: impl Iterator<Item = (&'static str, &'r [&'static str])>,
        canonical_keys: bool,
    ) -> Table {
        let mut entries: BTreeMap<String, u64> = BTreeMap::new();
        let mut canonical = vec![];
        for (canon, variants) in rows {
            let id = canonical.len() as u64;
            canonical.push(canon);
            if canonical_keys {
                entries.insert(normalize_key(canon), id);
            }
            for variant in variants {
                entries.insert(normalize_key(variant), id);
            }
        }
        let max_words = entries
            .keys()
            .map(|key| key.split(' ').count())
            .max()
            .unwrap_or(1);
        // BTreeMap iteration is sorted and duplicate-free.
        let index = Map::from_iter(entries).expect("lexicon keys are sorted and unique");
        Table {
            index,
            canonical,
            max_words,
        }
    }

    fn get(&self, key: &str) -> Option<&'static str> {
        self.index
            .get(key)
            .and_then(|id| self.canonical.get(id as usize).copied())
    }
}

pub struct Lexicon {
    directionals: Table,
    street_types: Table,
    plural_street_types: Table,
    states: Table,
    numbered_units: Table,
    unnumbered_units: Table,
    fips: HashMap<&'static str, &'static str>,
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("street_types", &self.street_types.canonical.len())
            .field("states", &self.states.canonical.len())
            .finish()
    }
}

impl Lexicon {
    fn build() -> Lexicon {
        let rows = |rows: &'static [Row]| rows.iter().map(|(canon, variants)| (*canon, *variants));
        let lexicon = Lexicon {
            directionals: Table::from_rows(rows(tables::DIRECTIONALS), true),
            street_types: Table::from_rows(rows(tables::STREET_TYPES), true),
            plural_street_types: Table::from_rows(rows(tables::PLURAL_STREET_TYPES), false),
            states: Table::from_rows(
                tables::STATES
                    .iter()
                    .map(|(code, _fips, names)| (*code, *names)),
                true,
            ),
            numbered_units: Table::from_rows(rows(tables::NUMBERED_UNITS), true),
            unnumbered_units: Table::from_rows(rows(tables::UNNUMBERED_UNITS), true),
            fips: tables::STATES
                .iter()
                .filter(|(_, fips, _)| !fips.is_empty())
                .map(|(code, fips, _)| (*code, *fips))
                .collect(),
        };
        tracing::debug!(
            street_types = lexicon.street_types.index.len(),
            states = lexicon.states.index.len(),
            "lexicon built"
        );
        lexicon
    }

    fn table(&self, category: Category) -> &Table {
        match category {
            Category::Directional => &self.directionals,
            Category::StreetType => &self.street_types,
            Category::PluralStreetType => &self.plural_street_types,
            Category::State => &self.states,
            Category::NumberedUnit => &self.numbered_units,
            Category::UnnumberedUnit => &self.unnumbered_units,
        }
    }

    /// Canonical form of `phrase` in `category`, ignoring case, periods and
    /// runs of whitespace. Unknown phrases return `None`.
    pub fn lookup(&self, category: Category, phrase: &str) -> Option<&'static str> {
        self.table(category).get(&normalize_key(phrase))
    }

    /// Longest phrase at the start of `words` (already normalized) that is in
    /// `category`, as `(word count, canonical form)`.
    pub fn longest_prefix(&self, category: Category, words: &[&str]) -> Option<(usize, &'static str)> {
        let table = self.table(category);
        (1..=table.max_words.min(words.len()))
            .rev()
            .find_map(|len| table.get(&words[..len].join(" ")).map(|canon| (len, canon)))
    }

    /// Canonical form when the whole of `words` is one phrase in `category`.
    pub fn matches_exactly(&self, category: Category, words: &[&str]) -> Option<&'static str> {
        if words.is_empty() || words.len() > self.table(category).max_words {
            return None;
        }
        self.table(category).get(&words.join(" "))
    }

    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.table(category).index.contains_key(word)
    }

    /// Two-digit FIPS code for a two-letter state code.
    pub fn state_fips(&self, code: &str) -> Option<&'static str> {
        self.fips.get(code.to_ascii_uppercase().as_str()).copied()
    }
}

/// Lowercase, ASCII-transliterate, drop periods and collapse whitespace.
pub fn normalize_key(phrase: &str) -> String {
    let ascii = deunicode(phrase).to_ascii_lowercase().replace('.', " ");
    ascii.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod test {
    use super::{lexicon, normalize_key, Category};

    #[test]
    fn directional_full_and_abbreviated() {
        let lex = lexicon();
        assert_eq!(lex.lookup(Category::Directional, "Northwest"), Some("NW"));
        assert_eq!(lex.lookup(Category::Directional, "nw"), Some("NW"));
        assert_eq!(lex.lookup(Category::Directional, "N."), Some("N"));
        assert_eq!(lex.lookup(Category::Directional, "north east"), Some("NE"));
    }

    #[test]
    fn street_type_variants() {
        let lex = lexicon();
        assert_eq!(lex.lookup(Category::StreetType, "Avenue"), Some("Ave"));
        assert_eq!(lex.lookup(Category::StreetType, "AVE."), Some("Ave"));
        assert_eq!(lex.lookup(Category::StreetType, "boulevard"), Some("Blvd"));
        assert_eq!(lex.lookup(Category::StreetType, "loop"), Some("Loop"));
        assert_eq!(lex.lookup(Category::StreetType, "Park Way"), Some("Pkwy"));
    }

    #[test]
    fn plural_types_map_to_singular() {
        let lex = lexicon();
        assert_eq!(lex.lookup(Category::PluralStreetType, "Sts"), Some("St"));
        assert_eq!(lex.lookup(Category::PluralStreetType, "avenues"), Some("Ave"));
        assert_eq!(lex.lookup(Category::PluralStreetType, "St"), None);
    }

    #[test]
    fn states_by_name_and_code() {
        let lex = lexicon();
        assert_eq!(lex.lookup(Category::State, "California"), Some("CA"));
        assert_eq!(lex.lookup(Category::State, "ca"), Some("CA"));
        assert_eq!(lex.lookup(Category::State, "District of Columbia"), Some("DC"));
        assert_eq!(lex.lookup(Category::State, "D.C."), Some("DC"));
        assert_eq!(lex.lookup(Category::State, "Puerto Rico"), Some("PR"));
    }

    #[test]
    fn unit_designators() {
        let lex = lexicon();
        assert_eq!(lex.lookup(Category::NumberedUnit, "Suite"), Some("Ste"));
        assert_eq!(lex.lookup(Category::NumberedUnit, "apartment"), Some("Apt"));
        assert_eq!(lex.lookup(Category::UnnumberedUnit, "Penthouse"), Some("Ph"));
        assert_eq!(lex.lookup(Category::NumberedUnit, "Penthouse"), None);
    }

    #[test]
    fn unknown_words_are_not_found() {
        let lex = lexicon();
        assert_eq!(lex.lookup(Category::StreetType, "Pennsylvania"), None);
        assert_eq!(lex.lookup(Category::State, ""), None);
    }

    #[test]
    fn longest_prefix_prefers_multi_word() {
        let lex = lexicon();
        assert_eq!(
            lex.longest_prefix(Category::StreetType, &["park", "way", "main"]),
            Some((2, "Pkwy"))
        );
        assert_eq!(
            lex.longest_prefix(Category::Directional, &["north", "west", "main"]),
            Some((2, "NW"))
        );
    }

    #[test]
    fn fips_codes() {
        assert_eq!(lexicon().state_fips("ca"), Some("06"));
        assert_eq!(lexicon().state_fips("DC"), Some("11"));
        assert_eq!(lexicon().state_fips("AE"), None);
    }

    #[test]
    fn key_normalization() {
        assert_eq!(normalize_key("  N.  W. "), "n w");
        assert_eq!(normalize_key("Suite"), "suite");
    }
}
