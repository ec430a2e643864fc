//! Hash providers that reduce text to a 64-bit integer.
//!
//! A provider only has to spread inputs evenly across `u64`; none of them is
//! meant to offer any security guarantee. The built-in providers digest the
//! UTF-8 bytes of the text and fold the digest down to 64 bits by XOR-ing its
//! little-endian 8-byte words.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::error::TextColorError;

/// Reduces a text string to a 64-bit unsigned integer.
///
/// Implementations must be pure: the same text always yields the same value.
/// The built-in providers return `0` for empty text, and custom providers are
/// expected to do the same.
///
/// Any `Fn(&str) -> u64 + Send + Sync` closure is a provider:
///
/// ```
/// use textcolor_core::HashProvider;
///
/// let fixed = |_: &str| 157_894u64;
/// assert_eq!(fixed.hash("anything"), 157_894);
/// assert_eq!(fixed.name(), "custom");
/// ```
pub trait HashProvider: Send + Sync {
    /// Hash `text` to a `u64`.
    fn hash(&self, text: &str) -> u64;

    /// A short name identifying the provider.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> HashProvider for F
where
    F: Fn(&str) -> u64 + Send + Sync,
{
    fn hash(&self, text: &str) -> u64 {
        self(text)
    }
}

/// XOR together the little-endian 8-byte words of `digest`.
fn fold_le(digest: &[u8]) -> u64 {
    digest.chunks_exact(8).fold(0, |acc, chunk| {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        acc ^ u64::from_le_bytes(word)
    })
}

/// MD5-based provider: the 128-bit digest folded to 64 bits.
///
/// # Examples
///
/// ```
/// use textcolor_core::{HashProvider, Md5HashProvider};
///
/// assert_eq!(Md5HashProvider.hash(""), 0);
/// assert_eq!(Md5HashProvider.hash("A"), Md5HashProvider.hash("A"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Md5HashProvider;

impl HashProvider for Md5HashProvider {
    fn hash(&self, text: &str) -> u64 {
        if text.is_empty() {
            return 0;
        }
        let digest = md5::compute(text.as_bytes());
        fold_le(&digest.0)
    }

    fn name(&self) -> &str {
        HashAlgorithm::Md5.as_str()
    }
}

/// SHA-256-based provider: the 256-bit digest folded to 64 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256HashProvider;

impl HashProvider for Sha256HashProvider {
    fn hash(&self, text: &str) -> u64 {
        if text.is_empty() {
            return 0;
        }
        let digest = Sha256::digest(text.as_bytes());
        fold_le(digest.as_slice())
    }

    fn name(&self) -> &str {
        HashAlgorithm::Sha256.as_str()
    }
}

/// The built-in hash algorithms, selectable by name.
///
/// # Examples
///
/// ```
/// use textcolor_core::HashAlgorithm;
///
/// assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
/// assert!("crc32".parse::<HashAlgorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    /// [`Md5HashProvider`].
    #[default]
    Md5,
    /// [`Sha256HashProvider`].
    Sha256,
}

impl HashAlgorithm {
    /// The canonical lowercase name, also returned by the provider's
    /// [`HashProvider::name`].
    pub const fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = TextColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            _ => Err(TextColorError::UnknownHashAlgorithm(s.to_owned())),
        }
    }
}
