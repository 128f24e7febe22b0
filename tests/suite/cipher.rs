//! XOR cipher tests

use stratum_cipher::{CipherDemo, DEMO_KEY, DEMO_PLAINTEXT, format_byte_codes, xor_cipher};

#[test]
fn single_byte_key_scenario() {
    let data = [0x00, 0x41];
    let encrypted = xor_cipher(&data, b"A");
    assert_eq!(encrypted, vec![0x41, 0x00]);
    assert_eq!(xor_cipher(&encrypted, b"A"), data.to_vec());
}

#[test]
fn empty_key_leaves_data_unchanged() {
    let data = b"no key, no change";
    assert_eq!(xor_cipher(data, b""), data.to_vec());
}

#[test]
fn round_trip_for_assorted_lengths() {
    let key = b"SECRETKEY";
    for len in [0usize, 1, 8, 9, 10, 64, 1000] {
        let data: Vec<u8> = (0..len).map(|i| (i * 31 % 256) as u8).collect();
        assert_eq!(xor_cipher(&xor_cipher(&data, key), key), data);
    }
}

#[test]
fn key_equal_to_data_yields_zeros() {
    let data = b"SECRETKEY";
    assert!(xor_cipher(data, data).iter().all(|&b| b == 0));
}

#[test]
fn demo_ciphertext_codes() {
    let demo = CipherDemo::run(DEMO_PLAINTEXT.as_bytes(), DEMO_KEY.as_bytes());
    // "The" ^ "SEC" = [0x54^0x53, 0x68^0x45, 0x65^0x43]
    assert!(format_byte_codes(&demo.ciphertext).starts_with("007 045 038"));
    assert_eq!(demo.decrypted, DEMO_PLAINTEXT.as_bytes());
    assert!(demo.verified());
}
