//! Core data types shared by the fingerprinting and merge layers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Length in bytes of a content digest (BLAKE3, 256 bits)
pub const DIGEST_LEN: usize = 32;

/// Content digest of a single file
///
/// Rendered as 64 lowercase hex characters. Absence of a file is modelled
/// as `Option<Digest>::None`, never as a sentinel digest value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Mapping from a forward-slash relative path to the digest of that file's content
///
/// One map per tree. Keys are ordered, so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerprintMap {
    entries: BTreeMap<String, Digest>,
}

impl FingerprintMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: String, digest: Digest) -> Option<Digest> {
        self.entries.insert(path, digest)
    }

    pub fn get(&self, path: &str) -> Option<&Digest> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(path, digest)` pairs in path order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Digest)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl FromIterator<(String, Digest)> for FingerprintMap {
    fn from_iter<I: IntoIterator<Item = (String, Digest)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The three fingerprint maps a merge works from
#[derive(Debug, Clone, Default)]
pub struct TreeFingerprints {
    pub base: FingerprintMap,
    pub a: FingerprintMap,
    pub b: FingerprintMap,
}

impl TreeFingerprints {
    pub fn new(base: FingerprintMap, a: FingerprintMap, b: FingerprintMap) -> Self {
        Self { base, a, b }
    }

    /// Digests for one path across Base, A and B
    pub fn lookup(&self, path: &str) -> (Option<&Digest>, Option<&Digest>, Option<&Digest>) {
        (self.base.get(path), self.a.get(path), self.b.get(path))
    }
}
