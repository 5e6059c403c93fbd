use super::kdf_tree_gostr3411_2012_256;
use gostec_api::Error;

#[test]
fn output_length_tracks_block_count() {
    let key = [0x42u8; 32];
    for blocks in [1u8, 2, 3] {
        let out = kdf_tree_gostr3411_2012_256(&key, b"kdf tree", &[0u8; 8], blocks).unwrap();
        assert_eq!(out.len(), blocks as usize * 32);
    }
}

#[test]
fn derivation_is_deterministic() {
    let key = [0x42u8; 32];
    let a = kdf_tree_gostr3411_2012_256(&key, b"kdf tree", &[1u8; 8], 2).unwrap();
    let b = kdf_tree_gostr3411_2012_256(&key, b"kdf tree", &[1u8; 8], 2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn blocks_are_pairwise_distinct() {
    let key = [0x42u8; 32];
    let out = kdf_tree_gostr3411_2012_256(&key, b"kdf tree", &[1u8; 8], 2).unwrap();
    assert_ne!(out[..32], out[32..]);
}

#[test]
fn label_seed_and_key_are_all_bound() {
    let key = [0x42u8; 32];
    let base = kdf_tree_gostr3411_2012_256(&key, b"kdf tree", &[1u8; 8], 1).unwrap();
    let other_label = kdf_tree_gostr3411_2012_256(&key, b"kdf    x", &[1u8; 8], 1).unwrap();
    let other_seed = kdf_tree_gostr3411_2012_256(&key, b"kdf tree", &[2u8; 8], 1).unwrap();
    let other_key = kdf_tree_gostr3411_2012_256(&[0x43u8; 32], b"kdf tree", &[1u8; 8], 1).unwrap();
    assert_ne!(base, other_label);
    assert_ne!(base, other_seed);
    assert_ne!(base, other_key);
}

#[test]
fn zero_blocks_is_rejected() {
    assert!(matches!(
        kdf_tree_gostr3411_2012_256(&[0u8; 32], b"kdf tree", &[0u8; 8], 0),
        Err(Error::Domain { .. })
    ));
}
