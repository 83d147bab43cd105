//! Registered names and their deterministic hashes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{TrackingError, TrackingResult};
use crate::id::NameHash;

const MAX_LABEL_LEN: usize = 64;

/// Dotted, lowercase name: `label.root` or `sub.label.root`.
///
/// The rightmost two labels form the registered parent name; an optional third
/// label on the left is a sub-name resolved under that parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(text: impl Into<String>) -> TrackingResult<Self> {
        let text = text.into();
        let labels: Vec<&str> = text.split('.').collect();
        if !(2..=3).contains(&labels.len()) {
            return Err(TrackingError::invalid_name(format!(
                "`{text}` must have 2 or 3 labels"
            )));
        }
        for label in &labels {
            let valid = !label.is_empty()
                && label.len() <= MAX_LABEL_LEN
                && label
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
                && !label.starts_with('-')
                && !label.ends_with('-');
            if !valid {
                return Err(TrackingError::invalid_name(format!(
                    "`{text}` has an invalid label `{label}`"
                )));
            }
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Labels, leftmost first.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.0.split('.')
    }

    /// Returns `(name_hash, child_hash)`.
    ///
    /// `name_hash` folds the two rightmost labels ENS-style:
    /// `node = sha256(node || sha256(label))`, starting from 32 zero bytes.
    /// `child_hash` is `sha256(sub_label)`, or all zeroes for a top-level name.
    pub fn name_hash(&self) -> (NameHash, NameHash) {
        let labels: Vec<&str> = self.labels().collect();
        let (children, parent) = labels.split_at(labels.len().saturating_sub(2));

        let mut node = [0u8; 32];
        for label in parent.iter().rev() {
            let label_hash = Sha256::digest(label.as_bytes());
            let mut hasher = Sha256::new();
            hasher.update(node);
            hasher.update(label_hash);
            node = hasher.finalize().into();
        }

        let child = match children.first() {
            Some(label) => NameHash::new(Sha256::digest(label.as_bytes()).into()),
            None => NameHash::ZERO,
        };

        (NameHash::new(node), child)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Name {
    type Error = TrackingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
