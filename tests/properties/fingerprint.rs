//! Property tests for artifact fingerprints.

use proptest::prelude::*;

use mono_meta::domain::ports::Fingerprinter;
use mono_meta::infrastructure::Sha256Fingerprinter;
use mono_meta::Checksum;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: equal bytes give equal checksums, whatever the file path.
    #[test]
    fn property_checksum_depends_only_on_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..4096),
        a in "[a-z]{1,8}",
        b in "[a-z]{1,8}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join(format!("{}-1", a));
        let second = dir.path().join(format!("{}-2", b));
        std::fs::write(&first, &bytes).unwrap();
        std::fs::write(&second, &bytes).unwrap();

        let fp = Sha256Fingerprinter::new();
        let c1 = fp.fingerprint(&first).unwrap();
        let c2 = fp.fingerprint(&second).unwrap();

        prop_assert_eq!(&c1, &c2);
        prop_assert_eq!(c1, Checksum::of_bytes(&bytes));
    }

    /// PROPERTY: checksums are 64 lowercase hex characters.
    #[test]
    fn property_checksum_is_hex_sha256(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let checksum = Checksum::of_bytes(&bytes);

        prop_assert_eq!(checksum.as_str().len(), 64);
        prop_assert!(checksum
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
