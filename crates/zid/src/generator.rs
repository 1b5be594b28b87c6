//! The [`Zid`] type, generation from secure entropy and canonical hex encoding.

use crate::{ZidError, ZidResult};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Bit length used when the caller has no particular preference.
pub const DEFAULT_BITS: usize = 128;

/// A Zen Identifier: an immutable, whole-byte sequence of random bits.
///
/// Once constructed a `Zid` always holds at least one byte, so `bit_len()` is a positive multiple
/// of 8. There is no way to mutate it in place.
///
/// # Construction
/// - [`Zid::new`] / [`create`] draw fresh bytes from the OS CSPRNG.
/// - [`crate::parse`] and [`Zid::from_bytes`] rebuild an identifier from text or raw bytes.
///
/// # Display format
/// `Display` always yields the canonical lowercase hex text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Zid(Vec<u8>);

impl Zid {
    /// Generates a new identifier of `bits` bits from the operating system's secure RNG.
    ///
    /// # Errors
    ///
    /// - [`ZidError::InvalidLength`] if `bits` is zero or not a multiple of 8.
    /// - [`ZidError::EntropyUnavailable`] if the OS cannot supply the bytes.
    pub fn new(bits: usize) -> ZidResult<Self> {
        create(bits)
    }

    /// Wraps raw bytes, e.g. read back from a fixed-width binary column.
    ///
    /// # Errors
    ///
    /// Returns [`ZidError::InvalidLength`] if `bytes` is empty.
    pub fn from_bytes(bytes: Vec<u8>) -> ZidResult<Self> {
        if bytes.is_empty() {
            return Err(ZidError::InvalidLength {
                bits: 0,
                reason: "an identifier holds at least one byte",
            });
        }
        Ok(Self(bytes))
    }

    /// Returns the length of this identifier in bits.
    ///
    /// # Returns
    ///
    /// Always a positive multiple of 8, equal to `byte_len() * 8`.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// Returns the length of this identifier in bytes.
    ///
    /// # Returns
    ///
    /// The number of raw bytes, at least 1. The canonical text is twice this many characters.
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }

    /// Returns the raw bytes of this identifier.
    ///
    /// Use this when storing the identifier in a fixed-width binary column.
    ///
    /// # Returns
    ///
    /// A borrowed slice of exactly `byte_len()` bytes, in the same order as the hex text.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the identifier and returns its raw bytes.
    ///
    /// # Returns
    ///
    /// The owned byte vector. [`Zid::from_bytes`] turns it back into an identifier.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Canonical lowercase hex text, `bit_len() / 4` characters long.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Dashed 8-4-4-16 text for a 128-bit identifier. See [`crate::to_uuid_style`].
    ///
    /// # Errors
    ///
    /// Returns [`ZidError::WrongLength`] unless this identifier is 128 bits.
    pub fn to_uuid_style(&self) -> ZidResult<String> {
        crate::to_uuid_style(&self.to_hex())
    }

    /// Copies a 128-bit identifier into a [`Uuid`] for UUID-typed storage columns.
    ///
    /// The bits are copied as they are. The result will usually not carry a valid RFC 4122
    /// version or variant.
    ///
    /// # Errors
    ///
    /// Returns [`ZidError::InvalidLength`] unless this identifier is 128 bits.
    pub fn to_uuid(&self) -> ZidResult<Uuid> {
        let bytes: [u8; 16] =
            self.0
                .as_slice()
                .try_into()
                .map_err(|_| ZidError::InvalidLength {
                    bits: self.bit_len(),
                    reason: "only 128-bit identifiers convert to a UUID",
                })?;
        Ok(Uuid::from_bytes(bytes))
    }
}

/// Generates a new identifier of `bits` bits from [`OsRng`].
///
/// # Errors
///
/// - [`ZidError::InvalidLength`] if `bits` is zero or not a multiple of 8.
/// - [`ZidError::EntropyUnavailable`] if the OS cannot supply the bytes.
pub fn create(bits: usize) -> ZidResult<Zid> {
    create_with(bits, &mut OsRng)
}

/// Generates a new identifier of `bits` bits from the given cryptographic RNG.
///
/// The `CryptoRng` bound keeps non-cryptographic generators out. Nothing is retried: an RNG
/// failure is returned to the caller and no partially filled identifier escapes.
pub fn create_with<R>(bits: usize, rng: &mut R) -> ZidResult<Zid>
where
    R: RngCore + CryptoRng + ?Sized,
{
    check_bit_length(bits)?;

    let mut bytes = vec![0u8; bits / 8];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        tracing::warn!(bits, error = %e, "secure entropy source failed");
        return Err(ZidError::EntropyUnavailable(e));
    }

    tracing::debug!(bits, "generated identifier");
    Ok(Zid(bytes))
}

/// Canonical lowercase hex text for `zid`.
pub fn to_hex(zid: &Zid) -> String {
    zid.to_hex()
}

/// Fails with [`ZidError::InvalidLength`] unless `bits` is a positive multiple of 8.
pub fn check_bit_length(bits: usize) -> ZidResult<()> {
    if bits == 0 {
        return Err(ZidError::InvalidLength {
            bits,
            reason: "bit length must be positive",
        });
    }
    if bits % 8 != 0 {
        return Err(ZidError::InvalidLength {
            bits,
            reason: "bit length must be a multiple of 8",
        });
    }
    Ok(())
}

impl fmt::Display for Zid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Zid {
    type Err = ZidError;

    /// Strict parse of canonical text of any valid length. Equivalent to `parse(s, None)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s, None)
    }
}

impl AsRef<[u8]> for Zid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Uuid> for Zid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.as_bytes().to_vec())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Zid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Zid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::parse(&s, None).map_err(serde::de::Error::custom)
    }
}
