use pretty_assertions::assert_eq;
use streetaddr::{
    parse_address, parse_informal_address, parse_intersection, parse_location, AddressSpecifier,
    ErrorKind, IntersectionSpecifier, Operation, Parser, ParserConfig, Specifier,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn white_house() -> AddressSpecifier {
    AddressSpecifier {
        number: s("1600"),
        street: s("Pennsylvania"),
        r#type: s("Ave"),
        suffix: s("NW"),
        city: s("Washington"),
        state: s("DC"),
        zip: s("20500"),
        ..AddressSpecifier::default()
    }
}

#[test]
fn full_address() {
    init_tracing();
    assert_eq!(
        parse_address("1600 Pennsylvania Ave NW, Washington, DC 20500").unwrap(),
        white_house()
    );
}

#[test]
fn full_address_ignores_case_and_punctuation() {
    for input in [
        "1600 PENNSYLVANIA AVE. N.W., WASHINGTON, D.C. 20500",
        "1600 pennsylvania avenue northwest washington dc 20500",
        "1600  Pennsylvania Ave NW ,Washington ,DC   20500",
    ] {
        assert_eq!(parse_address(input).unwrap(), white_house(), "{}", input);
    }
}

#[test]
fn street_named_like_a_type() {
    let address = parse_address("1 Infinite Loop, Cupertino, CA 95014").unwrap();
    assert_eq!(address.street, s("Infinite"));
    assert_eq!(address.r#type, s("Loop"));
    assert_eq!(address.city, s("Cupertino"));
    assert_eq!(address.zip, s("95014"));
}

#[test]
fn street_named_like_a_directional() {
    let address = parse_address("1200 N Street NW, Washington, DC").unwrap();
    assert_eq!(address.prefix, None);
    assert_eq!(address.street, s("N"));
    assert_eq!(address.r#type, s("St"));
    assert_eq!(address.suffix, s("NW"));
}

#[test]
fn address_without_place_is_the_same_for_both_operations() {
    let expected = AddressSpecifier {
        number: s("123"),
        street: s("Main"),
        r#type: s("St"),
        ..AddressSpecifier::default()
    };
    assert_eq!(parse_informal_address("123 Main St").unwrap(), expected);
    assert_eq!(parse_address("123 Main St").unwrap(), expected);
}

#[test]
fn secondary_units() {
    let address = parse_address("123 Main St Apt 4B, Springfield, IL 62701").unwrap();
    assert_eq!(address.sec_unit_type, s("Apt"));
    assert_eq!(address.sec_unit_num, s("4B"));

    let address = parse_address("123 Main St #12, Springfield, IL").unwrap();
    assert_eq!(address.sec_unit_type, s("#"));
    assert_eq!(address.sec_unit_num, s("12"));

    let address = parse_address("123 Main St Rear, Springfield, IL").unwrap();
    assert_eq!(address.sec_unit_type, s("Rear"));
    assert_eq!(address.sec_unit_num, None);
}

#[test]
fn six_digit_zip_is_dropped() {
    let address = parse_address("123 Main St, Springfield, IL 627011").unwrap();
    assert_eq!(address.zip, None);
    assert_eq!(address.state, s("IL"));
}

#[test]
fn malformed_zip_is_dropped() {
    for input in [
        "123 Main St, Springfield, IL 6270",
        "123 Main St, Springfield, IL 1234-5678",
        "123 Main St, Springfield, IL 62701-12",
    ] {
        let address = parse_address(input).unwrap();
        assert_eq!(address.zip, None, "{}", input);
        assert_eq!(address.city, s("Springfield"), "{}", input);
        assert_eq!(address.state, s("IL"), "{}", input);
    }
}

#[test]
fn unit_number_glued_to_designator() {
    let address = parse_address("123 Main St Apt4, Springfield, IL").unwrap();
    assert_eq!(address.sec_unit_type, s("Apt"));
    assert_eq!(address.sec_unit_num, s("4"));

    let address = parse_address("123 Main St Ste200, Springfield, IL").unwrap();
    assert_eq!(address.sec_unit_type, s("Ste"));
    assert_eq!(address.sec_unit_num, s("200"));
    assert_eq!(address.to_string(), "123 Main St Ste 200, Springfield, IL");
}

#[test]
fn numbered_route() {
    let address = parse_address("123 County Road 5, Springfield, IL").unwrap();
    assert_eq!(address.number, s("123"));
    assert_eq!(address.street, s("County Road 5"));
    assert_eq!(address.r#type, None);
    assert_eq!(address.city, s("Springfield"));
}

#[test]
fn intersection() {
    init_tracing();
    let parsed = parse_location("Hollywood & Vine, Los Angeles, CA").unwrap();
    assert_eq!(
        parsed,
        Specifier::Intersection(IntersectionSpecifier {
            street1: s("Hollywood"),
            street2: s("Vine"),
            city: s("Los Angeles"),
            state: s("CA"),
            ..IntersectionSpecifier::default()
        })
    );
    assert_eq!(parsed.to_string(), "Hollywood & Vine, Los Angeles, CA");
}

#[test]
fn intersection_city_without_state() {
    let parsed = parse_location("Hollywood & Vine, Los Angeles").unwrap();
    assert_eq!(
        parsed,
        Specifier::Intersection(IntersectionSpecifier {
            street1: s("Hollywood"),
            street2: s("Vine"),
            city: s("Los Angeles"),
            ..IntersectionSpecifier::default()
        })
    );
    assert_eq!(parse_location(&parsed.to_string()).unwrap(), parsed);
}

#[test]
fn intersection_with_and() {
    let intersection =
        parse_intersection("N Main St and E 5th Ave, Springfield, IL 62701").unwrap();
    assert_eq!(
        intersection,
        IntersectionSpecifier {
            prefix1: s("N"),
            street1: s("Main"),
            type1: s("St"),
            prefix2: s("E"),
            street2: s("5th"),
            type2: s("Ave"),
            city: s("Springfield"),
            state: s("IL"),
            zip: s("62701"),
            ..IntersectionSpecifier::default()
        }
    );
}

#[test]
fn location_falls_back_to_informal() {
    assert_eq!(
        parse_address("123 Main St, Springfield").unwrap_err().kind(),
        ErrorKind::NoMatch
    );
    let parsed = parse_location("123 Main St, Springfield").unwrap();
    let address = parsed.as_address().unwrap();
    assert_eq!(address.city, s("Springfield"));
    assert_eq!(address.state, None);
}

#[test]
fn full_address_wins_when_it_covers_everything() {
    let parsed = parse_location("1600 Pennsylvania Ave NW, Washington, DC 20500").unwrap();
    assert_eq!(parsed, Specifier::Address(white_house()));
}

#[test]
fn blank_input_is_an_input_error_everywhere() {
    for input in ["", "   ", "\t\n"] {
        assert_eq!(parse_location(input).unwrap_err().kind(), ErrorKind::Input);
        assert_eq!(parse_address(input).unwrap_err().kind(), ErrorKind::Input);
        assert_eq!(
            parse_informal_address(input).unwrap_err().kind(),
            ErrorKind::Input
        );
        assert_eq!(parse_intersection(input).unwrap_err().kind(), ErrorKind::Input);
    }
}

#[test]
fn unparseable_input_is_no_match() {
    let err = parse_location("!!! ???").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoMatch);
    assert_eq!(err.operation(), Some(Operation::ParseLocation));
    assert_eq!(
        parse_informal_address("Main St").unwrap_err().kind(),
        ErrorKind::NoMatch
    );
}

#[test]
fn display_round_trips() {
    for input in [
        "1600 Pennsylvania Ave NW, Washington, DC 20500",
        "123 Main St Apt 4B, Springfield, IL 62701-1234",
        "12 1/2 N Elm Street",
        "350 fifth avenue, new york, ny 10118",
        "9 Elm Rd #7, Salem, OR",
    ] {
        let address = parse_address(input).unwrap();
        assert_eq!(parse_address(&address.to_string()).unwrap(), address, "{}", input);
    }
}

#[test]
fn state_fips() {
    assert_eq!(parse_address("1 Main St, Springfield, IL").unwrap().state_fips(), Some("17"));
    assert_eq!(
        parse_intersection("Hollywood & Vine, Los Angeles, CA")
            .unwrap()
            .state_fips(),
        Some("06")
    );
}

#[test]
fn json_omits_absent_fields() {
    let json = serde_json::to_string(&parse_address("123 Main St").unwrap()).unwrap();
    assert_eq!(json, r#"{"number":"123","street":"Main","type":"St"}"#);
    let back: AddressSpecifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parse_address("123 Main St").unwrap());
}

#[test]
fn configured_parser() {
    let config = ParserConfig::from_toml_str("normalize_case = false\nkeep_zip4 = false").unwrap();
    let parser = Parser::new(config).unwrap();
    let address = parser
        .parse_address("123 main st, springfield, il 62701-1234")
        .unwrap();
    assert_eq!(address.street, s("main"));
    assert_eq!(address.r#type, s("St"));
    assert_eq!(address.zip, s("62701"));
}

#[test]
fn batch_parse() {
    let inputs = vec![
        "1600 Pennsylvania Ave NW, Washington, DC 20500".to_string(),
        "Hollywood & Vine".to_string(),
        String::new(),
    ];
    let results = streetaddr::parse_locations(&inputs);
    assert_eq!(results[0].as_ref().unwrap(), &Specifier::Address(white_house()));
    assert!(results[1].as_ref().unwrap().is_intersection());
    assert_eq!(results[2].as_ref().unwrap_err().kind(), ErrorKind::Input);
}
