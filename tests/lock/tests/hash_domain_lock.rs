//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. The domain set has the expected count
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow the `CRAFTPLAN::*::V1\0` naming convention
//! 4. `canonical_hash` is SHA-256 over `prefix || data`

use std::collections::BTreeSet;

use craftplan_kernel::proof::hash::{canonical_hash, HashDomain};
use sha2::{Digest, Sha256};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_and_null_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(seen.insert(bytes), "duplicate domain bytes: {domain:?}");
        assert!(bytes.ends_with(&[0]), "{domain:?} is not null-terminated");
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let text = std::str::from_utf8(domain.as_bytes()).unwrap();
        assert!(text.starts_with("CRAFTPLAN::"), "{domain:?}: {text}");
        assert!(text.ends_with("::V1\0"), "{domain:?}: {text}");
    }
}

#[test]
fn canonical_hash_is_prefixed_sha256() {
    let data = b"{\"steps\":[]}";
    for &domain in HashDomain::ALL {
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(data);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
        assert_eq!(canonical_hash(domain, data).as_str(), expected);
    }
}
