use proptest::prelude::*;
use streetaddr::{parse_address, parse_location};

const NAMES: &[&str] = &["Main", "Oak", "Maple", "Cedar", "Lincoln", "Elm", "Pine", "Washington"];
const TYPES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Dr", "Ln", "Ct"];
const SUFFIXES: &[&str] = &["", " N", " SW", " E"];
const CITIES: &[&str] = &["Springfield", "Portland", "Madison", "Franklin", "Salem", "Fort Worth"];
const STATES: &[&str] = &["IL", "OR", "WI", "MA", "TX"];

fn address() -> impl Strategy<Value = String> {
    (
        1u32..99_999,
        prop::sample::select(NAMES),
        prop::sample::select(TYPES),
        prop::sample::select(SUFFIXES),
        prop::sample::select(CITIES),
        prop::sample::select(STATES),
        0u32..99_999,
    )
        .prop_map(|(number, name, street_type, suffix, city, state, zip)| {
            format!(
                "{} {} {}{}, {}, {} {:05}",
                number, name, street_type, suffix, city, state, zip
            )
        })
}

proptest! {
    #[test]
    fn display_is_idempotent(input in address()) {
        let parsed = parse_address(&input).unwrap();
        prop_assert_eq!(parse_address(&parsed.to_string()).unwrap(), parsed);
    }

    #[test]
    fn generated_addresses_print_back_verbatim(input in address()) {
        prop_assert_eq!(parse_address(&input).unwrap().to_string(), input);
    }

    #[test]
    fn extra_whitespace_is_ignored(input in address(), pad in 1usize..4) {
        let padded = input.replace(' ', &" ".repeat(pad));
        prop_assert_eq!(parse_address(&padded).unwrap(), parse_address(&input).unwrap());
    }

    #[test]
    fn canonical_fields_ignore_case(input in address(), upper in any::<bool>()) {
        let recased = if upper { input.to_uppercase() } else { input.to_lowercase() };
        let expected = parse_address(&input).unwrap();
        let parsed = parse_address(&recased).unwrap();
        prop_assert_eq!(&parsed.number, &expected.number);
        prop_assert_eq!(&parsed.r#type, &expected.r#type);
        prop_assert_eq!(&parsed.suffix, &expected.suffix);
        prop_assert_eq!(&parsed.state, &expected.state);
        prop_assert_eq!(&parsed.zip, &expected.zip);
        prop_assert_eq!(&parsed.street, &expected.street);
        prop_assert_eq!(&parsed.city, &expected.city);
    }

    #[test]
    fn location_never_panics(input in "\\PC{0,40}") {
        let _ = parse_location(&input);
    }
}
