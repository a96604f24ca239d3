//! Identifier format checks.

use uuid::Uuid;

/// Length of the hyphenated UUID form, e.g. `6f1c2a7e-3b4d-4c5e-9f60-718293a4b5c6`.
pub const HYPHENATED_UUID_LEN: usize = 36;

/// Returns true if `id` is a UUID in the hyphenated 8-4-4-4-12 form.
///
/// Any version and either letter case are accepted. The simple, braced and
/// URN encodings that [`Uuid::try_parse`] also understands are rejected.
pub fn is_uuid(id: &str) -> bool {
    id.len() == HYPHENATED_UUID_LEN && Uuid::try_parse(id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_v4() {
        let id = Uuid::new_v4().to_string();
        assert!(is_uuid(&id));
    }

    #[test]
    fn test_uppercase_and_nil() {
        assert!(is_uuid("6F1C2A7E-3B4D-4C5E-9F60-718293A4B5C6"));
        assert!(is_uuid("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn test_invalid_strings() {
        assert!(!is_uuid("abc"));
        assert!(!is_uuid(""));
        assert!(!is_uuid("6f1c2a7e-3b4d-4c5e-9f60-718293a4b5cz"));
        assert!(!is_uuid("6f1c2a7e-3b4d-4c5e-9f60-718293a4b5c"));
        assert!(!is_uuid("6f1c2a7e3b4d4c5e9f60718293a4b5c6ab12"));
    }

    #[test]
    fn test_other_encodings_rejected() {
        assert!(!is_uuid("6f1c2a7e3b4d4c5e9f60718293a4b5c6"));
        assert!(!is_uuid("{6f1c2a7e-3b4d-4c5e-9f60-718293a4b5c6}"));
        assert!(!is_uuid("urn:uuid:6f1c2a7e-3b4d-4c5e-9f60-718293a4b5c6"));
    }
}
