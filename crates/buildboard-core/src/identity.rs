// Rust guideline compliant 2026-10-18

//! Hash-based document IDs.
//!
//! IDs have the form `<prefix>-<hex>` where the hex part is the first six
//! characters of a SHA-256 over the seed, timestamp and a nonce.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Prefix of build IDs.
pub const BUILD_PREFIX: &str = "bld";

/// Prefix of resource IDs.
pub const RESOURCE_PREFIX: &str = "res";

/// Generates a document ID.
///
/// # Arguments
///
/// * `prefix` - ID prefix such as [`BUILD_PREFIX`]
/// * `seed` - Content that distinguishes the document
/// * `timestamp` - Creation time
/// * `nonce` - Bumped by callers to resolve collisions
pub fn generate_id(prefix: &str, seed: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{prefix}-{}", &hex[..6])
}

/// Generates an ID not already in `taken`.
pub fn generate_unique_id<F>(prefix: &str, seed: &str, timestamp: i64, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(prefix, seed, timestamp, nonce);
        if !taken(&id) {
            return id;
        }
        nonce = nonce.wrapping_add(1);
    }
}

/// Validates the format of a generated ID.
///
/// # Errors
///
/// Returns an error if the ID does not have the given prefix followed by at
/// least six lowercase hex characters.
pub fn validate_id_format(prefix: &str, id: &str) -> Result<()> {
    let hex = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(|| Error::InvalidDocument(format!("ID {id} must start with {prefix}-")))?;

    if hex.len() < 6 || !hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)) {
        return Err(Error::InvalidDocument(format!(
            "ID {id} must end in at least six lowercase hex characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_well_formed() {
        let id = generate_id(BUILD_PREFIX, "Tornado Shot", 1_700_000_000, 0);
        assert!(id.starts_with("bld-"));
        assert_eq!(id.len(), 10);
        assert!(validate_id_format(BUILD_PREFIX, &id).is_ok());
        assert!(validate_id_format(RESOURCE_PREFIX, &id).is_err());
    }

    #[test]
    fn test_unique_id_skips_taken() {
        let first = generate_id(RESOURCE_PREFIX, "seed", 1, 0);
        let unique = generate_unique_id(RESOURCE_PREFIX, "seed", 1, |id| id == first);
        assert_ne!(unique, first);
        assert_eq!(unique, generate_id(RESOURCE_PREFIX, "seed", 1, 1));
    }

    #[test]
    fn test_rejects_malformed_ids() {
        assert!(validate_id_format(BUILD_PREFIX, "bld-12").is_err());
        assert!(validate_id_format(BUILD_PREFIX, "bld-ZZZZZZ").is_err());
        assert!(validate_id_format(BUILD_PREFIX, "bldabcdef").is_err());
    }
}
