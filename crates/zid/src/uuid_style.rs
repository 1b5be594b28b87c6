//! Dashed UUID-style text for 128-bit identifiers.
//!
//! Layout is 8-4-4-16: `90f44e35-a062-4792-89ff75ab2abc0ed3`. Only the text changes; the bits are
//! not checked against, or adjusted to, UUID version/variant rules.

use crate::{ZidError, ZidResult};

/// Bit length of identifiers that have a UUID-style form.
pub const UUID_BITS: usize = 128;

const HEX_LEN: usize = UUID_BITS / 4;
const GROUPS: [usize; 4] = [8, 4, 4, 16];

/// Inserts dashes into 32-character hex text, grouping it 8-4-4-16.
///
/// The characters themselves are copied unchanged.
///
/// # Errors
///
/// Returns [`ZidError::WrongLength`] if `hex32` is not exactly 32 characters.
pub fn to_uuid_style(hex32: &str) -> ZidResult<String> {
    let chars: Vec<char> = hex32.chars().collect();
    if chars.len() != HEX_LEN {
        return Err(ZidError::WrongLength {
            actual: chars.len(),
        });
    }

    let mut out = String::with_capacity(HEX_LEN + GROUPS.len() - 1);
    let mut start = 0;
    for (i, width) in GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.extend(&chars[start..start + width]);
        start += width;
    }
    Ok(out)
}

/// Strips dashes from UUID-style text and lowercases `A-Z`.
///
/// Any dash placement is accepted, so standard 8-4-4-4-12 UUID text converts as well.
/// Other characters pass through unchanged, one for one.
///
/// The returned `String` is **not** guaranteed to be hex: `"zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"`
/// converts to 32 `z`s. Pass the result through [`crate::parse`] before treating it as an
/// identifier.
///
/// # Errors
///
/// Returns [`ZidError::WrongLength`] if 32 characters do not remain after removing dashes.
pub fn from_uuid_style(dashed: &str) -> ZidResult<String> {
    let hex: String = dashed
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let actual = hex.chars().count();
    if actual != HEX_LEN {
        return Err(ZidError::WrongLength { actual });
    }
    Ok(hex)
}
