use crate::error::{StateError, StateResult};

/// First byte reserved for composite keys. Simple keys may not start with it.
pub const COMPOSITE_KEY_NAMESPACE: char = '\u{0000}';

/// Check a simple state key against the ledger's key rules.
pub fn validate_key(key: &str) -> StateResult<()> {
    if key.is_empty() {
        return Err(StateError::InvalidKey {
            key: key.to_string(),
            reason: "key must not be an empty string",
        });
    }
    if key.starts_with(COMPOSITE_KEY_NAMESPACE) {
        return Err(StateError::InvalidKey {
            key: key.to_string(),
            reason: "key must not start with the composite key namespace byte 0x00",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_key_is_rejected() {
        let err = validate_key("").unwrap_err();
        assert!(matches!(err, StateError::InvalidKey { .. }));
    }

    #[test]
    fn composite_namespace_is_rejected() {
        let err = validate_key("\u{0000}student\u{0000}s-1\u{0000}").unwrap_err();
        assert!(err.to_string().contains("composite key"));
    }

    #[test]
    fn embedded_nul_is_allowed() {
        assert!(validate_key("s\u{0000}1").is_ok());
    }

    proptest! {
        #[test]
        fn printable_keys_are_accepted(key in "[[:print:]]{1,64}") {
            prop_assert!(validate_key(&key).is_ok());
        }
    }
}
