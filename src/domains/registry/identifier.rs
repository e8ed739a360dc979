//! Stable catalog identifiers for registered LOVD instances.
//!
//! Catalog URLs never expose the registry's internal id. Instead each id is
//! mapped through a name-based (SHA-1, version 5) UUID under a fixed
//! namespace, which is deterministic across restarts and cannot be reversed
//! without the registration table.

use uuid::Uuid;

/// Namespace for all catalog identifiers. Changing this changes every
/// published catalog URL.
const CATALOG_NAMESPACE: Uuid = Uuid::from_u128(0x6c6f_7664_2d66_4470_8000_6361_7461_6c6f);

/// Derive the public catalog identifier for a registry id.
///
/// Pure and total: the same input always yields the same lowercase,
/// hyphenated UUID string.
pub fn derive(registry_id: &str) -> String {
    Uuid::new_v5(&CATALOG_NAMESPACE, registry_id.as_bytes())
        .hyphenated()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(derive("00042"), derive("00042"));
        assert_eq!(derive(""), derive(""));
    }

    #[test]
    fn test_derive_is_uuid_shaped() {
        let id = derive("00042");
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 5);
        assert_eq!(id, id.to_lowercase());
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_derive_distinct_over_registry_sized_set() {
        let ids: HashSet<_> = (0..500).map(|n| derive(&format!("{:05}", n))).collect();
        assert_eq!(ids.len(), 500);
    }
}
