//! Strongly-typed identifier newtypes
//!
//! Folder and prompt ids are opaque strings minted by the storage
//! collaborator; the core never generates them. Variant ids are small
//! integers bounded to `[1, 255]`.

use crate::error::StashError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a folder record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

/// Identifier of a prompt record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(FolderId);
string_id!(PromptId);

/// Identifier of a variant record, restricted to `[1, 255]`.
///
/// The bound is a color-palette and storage-compactness constraint: ids fit
/// one byte and index a fixed display palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct VariantId(u8);

impl VariantId {
    /// Create a variant id, rejecting the reserved value 0
    pub fn new(id: u8) -> Result<Self, StashError> {
        if id == 0 {
            return Err(StashError::invalid_value(
                "variant id",
                "must be in the range [1, 255]",
            ));
        }
        Ok(Self(id))
    }

    /// The raw one-byte value
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for VariantId {
    type Error = StashError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<VariantId> for u8 {
    fn from(id: VariantId) -> u8 {
        id.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_ids_round_trip() {
        let id = FolderId::from_string("f-01");
        assert_eq!(id.as_str(), "f-01");
        assert_eq!(id.to_string(), "f-01");
        assert_eq!(FolderId::from("f-01"), id);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"f-01\"");
        let back: FolderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_variant_id_bounds() {
        assert!(VariantId::new(1).is_ok());
        assert!(VariantId::new(255).is_ok());
        assert!(VariantId::new(0).is_err());
    }

    #[test]
    fn test_variant_id_serde_rejects_zero() {
        let ok: VariantId = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<VariantId>("0").is_err());
        assert!(serde_json::from_str::<VariantId>("256").is_err());
    }
}
