//! Validation and parsing of ZID text.

use crate::generator::check_bit_length;
use crate::{Violation, Zid, ZidError, ZidResult};

/// Which hex alphabet validation accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// `0-9a-f` only. This is the canonical form.
    #[default]
    Strict,
    /// `0-9a-fA-F`. For case-insensitive input sources; output stays lowercase.
    Relaxed,
}

/// Returns true if `text` is canonical ZID text.
///
/// When `expected_bits` is given the text must be exactly `expected_bits / 4` characters. An
/// `expected_bits` that is not a positive multiple of 8 can never match, so the answer is `false`.
pub fn is_valid(text: &str, expected_bits: Option<usize>) -> bool {
    is_valid_with(text, expected_bits, CaseMode::Strict)
}

/// [`is_valid`] with an explicit [`CaseMode`].
pub fn is_valid_with(text: &str, expected_bits: Option<usize>, mode: CaseMode) -> bool {
    validate(text, expected_bits, mode).is_ok()
}

/// Checks `text` and reports the first rule it breaks.
///
/// Rules are checked in order: non-empty, even length, expected length, alphabet.
///
/// # Errors
///
/// - [`ZidError::InvalidLength`] if `expected_bits` itself is not a positive multiple of 8.
/// - [`ZidError::MalformedIdentifier`] naming the [`Violation`] otherwise.
pub fn validate(text: &str, expected_bits: Option<usize>, mode: CaseMode) -> ZidResult<()> {
    if let Some(bits) = expected_bits {
        check_bit_length(bits)?;
    }

    let malformed = |violation| ZidError::MalformedIdentifier {
        text: text.to_string(),
        violation,
    };

    let len = text.chars().count();
    if len == 0 {
        return Err(malformed(Violation::Empty));
    }
    if len % 2 != 0 {
        return Err(malformed(Violation::OddLength { len }));
    }
    if let Some(bits) = expected_bits {
        if len != bits / 4 {
            return Err(malformed(Violation::LengthMismatch {
                expected: bits / 4,
                actual: len,
            }));
        }
    }

    for (index, character) in text.chars().enumerate() {
        match character {
            '0'..='9' | 'a'..='f' => {}
            'A'..='F' if mode == CaseMode::Relaxed => {}
            'A'..='F' => {
                return Err(malformed(Violation::UppercaseCharacter { character, index }));
            }
            _ => return Err(malformed(Violation::InvalidCharacter { character, index })),
        }
    }

    Ok(())
}

/// Parses canonical ZID text back into an identifier.
///
/// The resulting bit length is the character count times 4.
///
/// # Errors
///
/// See [`validate`].
pub fn parse(text: &str, expected_bits: Option<usize>) -> ZidResult<Zid> {
    parse_with(text, expected_bits, CaseMode::Strict)
}

/// [`parse`] with an explicit [`CaseMode`].
pub fn parse_with(text: &str, expected_bits: Option<usize>, mode: CaseMode) -> ZidResult<Zid> {
    validate(text, expected_bits, mode)?;

    let bytes = hex::decode(text).map_err(|e| ZidError::MalformedIdentifier {
        text: text.to_string(),
        violation: match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => Violation::InvalidCharacter {
                character: c,
                index,
            },
            _ => Violation::OddLength { len: text.len() },
        },
    })?;

    Zid::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation_of(result: ZidResult<Zid>) -> Violation {
        match result {
            Err(ZidError::MalformedIdentifier { violation, .. }) => violation,
            other => panic!("Expected MalformedIdentifier error, got {:?}", other),
        }
    }

    #[test]
    fn test_is_valid_canonical() {
        assert!(is_valid("90f44e35a062479289ff75ab2abc0ed3", None));
        assert!(is_valid("90f44e35a062479289ff75ab2abc0ed3", Some(128)));
        assert!(is_valid("00", Some(8)));
        assert!(is_valid("ffffffff", None));
    }

    #[test]
    fn test_is_valid_rejects() {
        // Empty
        assert!(!is_valid("", None));

        // Odd length
        assert!(!is_valid("abc", None));

        // Outside alphabet
        assert!(!is_valid("14ffe13g", None));

        // Separators
        assert!(!is_valid("14ffe137-2db2", None));
        assert!(!is_valid("14ff e137", None));

        // Uppercase in strict mode
        assert!(!is_valid("14FFE137", None));

        // Wrong expected length
        assert!(!is_valid("14ffe137", Some(64)));
    }

    #[test]
    fn test_is_valid_unusable_expected_bits() {
        assert!(!is_valid("14ffe137", Some(0)));
        assert!(!is_valid("14ffe137", Some(33)));
    }

    #[test]
    fn test_relaxed_accepts_uppercase() {
        assert!(is_valid_with("14FFE137", None, CaseMode::Relaxed));
        assert!(is_valid_with("14fFE137", Some(32), CaseMode::Relaxed));
        assert!(!is_valid_with("14FFE13G", None, CaseMode::Relaxed));
    }

    #[test]
    fn test_case_mode_default_is_strict() {
        assert_eq!(CaseMode::default(), CaseMode::Strict);
    }

    #[test]
    fn test_parse_valid() {
        let zid = parse("00ff0ab1", None).unwrap();

        assert_eq!(zid.as_bytes(), &[0x00, 0xff, 0x0a, 0xb1]);
        assert_eq!(zid.bit_len(), 32);
    }

    #[test]
    fn test_parse_relaxed_normalises_output() {
        let zid = parse_with("14FFE137", None, CaseMode::Relaxed).unwrap();

        assert_eq!(zid.to_hex(), "14ffe137");
    }

    #[test]
    fn test_parse_reports_empty() {
        assert_eq!(violation_of(parse("", None)), Violation::Empty);
    }

    #[test]
    fn test_parse_reports_odd_length() {
        assert_eq!(
            violation_of(parse("abc", None)),
            Violation::OddLength { len: 3 }
        );
    }

    #[test]
    fn test_parse_reports_length_mismatch() {
        assert_eq!(
            violation_of(parse("14ffe137", Some(128))),
            Violation::LengthMismatch {
                expected: 32,
                actual: 8
            }
        );
    }

    #[test]
    fn test_parse_reports_invalid_character() {
        assert_eq!(
            violation_of(parse("14ffe13g", None)),
            Violation::InvalidCharacter {
                character: 'g',
                index: 7
            }
        );
        assert_eq!(
            violation_of(parse("14-fe137", None)),
            Violation::InvalidCharacter {
                character: '-',
                index: 2
            }
        );
    }

    #[test]
    fn test_parse_reports_uppercase() {
        assert_eq!(
            violation_of(parse("14fFe137", None)),
            Violation::UppercaseCharacter {
                character: 'F',
                index: 3
            }
        );
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert_eq!(
            violation_of(parse("éé", None)),
            Violation::InvalidCharacter {
                character: 'é',
                index: 0
            }
        );
    }

    #[test]
    fn test_parse_error_carries_text() {
        let err = parse("nope", None).unwrap_err();

        match &err {
            ZidError::MalformedIdentifier { text, .. } => assert_eq!(text, "nope"),
            _ => panic!("Expected MalformedIdentifier error"),
        }
        assert!(err.to_string().contains("'nope'"));
        assert!(err.violation().is_some());
    }

    #[test]
    fn test_parse_rejects_bad_expected_bits() {
        match parse("14ffe137", Some(12)) {
            Err(ZidError::InvalidLength { bits, .. }) => assert_eq!(bits, 12),
            other => panic!("Expected InvalidLength error, got {:?}", other),
        }
    }
}
