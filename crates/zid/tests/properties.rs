use proptest::prelude::*;
use zid::{is_valid, is_valid_with, parse, parse_with, to_hex, CaseMode, Zid};

proptest! {
    #[test]
    fn hex_text_parses_back_to_same_bytes(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let zid = Zid::from_bytes(bytes.clone()).unwrap();
        let hex = to_hex(&zid);

        prop_assert_eq!(hex.len(), bytes.len() * 2);
        prop_assert!(is_valid(&hex, Some(zid.bit_len())));

        let parsed = parse(&hex, Some(zid.bit_len())).unwrap();
        prop_assert_eq!(parsed.as_bytes(), &bytes[..]);
    }

    #[test]
    fn uppercased_text_needs_relaxed_mode(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let zid = Zid::from_bytes(bytes).unwrap();
        let upper = zid.to_hex().to_uppercase();
        let has_letters = upper.chars().any(|c| c.is_ascii_alphabetic());

        prop_assert_eq!(is_valid(&upper, None), !has_letters);
        prop_assert!(is_valid_with(&upper, None, CaseMode::Relaxed));
        prop_assert_eq!(parse_with(&upper, None, CaseMode::Relaxed).unwrap(), zid);
    }

    #[test]
    fn validator_agrees_with_parser(text in "\\PC{0,40}") {
        prop_assert_eq!(is_valid(&text, None), parse(&text, None).is_ok());
        prop_assert_eq!(
            is_valid_with(&text, None, CaseMode::Relaxed),
            parse_with(&text, None, CaseMode::Relaxed).is_ok()
        );
    }

    #[test]
    fn generated_ids_round_trip(bytes in 1usize..=64) {
        let zid = zid::create(bytes * 8).unwrap();
        let parsed: Zid = zid.to_string().parse().unwrap();

        prop_assert_eq!(parsed, zid);
    }
}
