//! Repeating-key XOR cipher.
//!
//! `out[i] = data[i] ^ key[i % key.len()]`. Applying the cipher twice with the
//! same key restores the input. An empty key is the identity transform.
//!
//! This is a demonstration, not encryption: a repeating XOR key falls to
//! frequency analysis.

use std::fmt::Write as _;

/// Default demo plaintext.
pub const DEMO_PLAINTEXT: &str = "The quick brown fox jumps over the lazy dog.";
/// Default demo key.
pub const DEMO_KEY: &str = "SECRETKEY";

/// XOR `data` with `key`, cycling the key. Returns `data` unchanged for an empty key.
#[must_use]
pub fn xor_cipher(data: &[u8], key: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    xor_in_place(&mut out, key);
    out
}

/// In-place variant of [`xor_cipher`].
pub fn xor_in_place(data: &mut [u8], key: &[u8]) {
    if key.is_empty() {
        return;
    }
    for (byte, k) in data.iter_mut().zip(key.iter().cycle()) {
        *byte ^= k;
    }
}

/// Each byte as a zero-padded three-digit decimal, space separated.
///
/// Ciphertext is rarely printable, so the demo shows codes instead of text.
#[must_use]
pub fn format_byte_codes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:03}");
    }
    out
}

/// Result of encrypting and then decrypting a plaintext with one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherDemo {
    pub plaintext: Vec<u8>,
    pub key: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub decrypted: Vec<u8>,
}

impl CipherDemo {
    #[must_use]
    pub fn run(plaintext: &[u8], key: &[u8]) -> Self {
        let ciphertext = xor_cipher(plaintext, key);
        let decrypted = xor_cipher(&ciphertext, key);
        Self {
            plaintext: plaintext.to_vec(),
            key: key.to_vec(),
            ciphertext,
            decrypted,
        }
    }

    /// Decryption reproduced the plaintext.
    #[must_use]
    pub fn verified(&self) -> bool {
        self.plaintext == self.decrypted
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("--- Symmetric Cipher (XOR) Demonstration ---\n");
        let _ = writeln!(out, "Original Text: {}", String::from_utf8_lossy(&self.plaintext));
        let _ = writeln!(out, "Key:           {}", String::from_utf8_lossy(&self.key));
        let _ = writeln!(
            out,
            "\nCiphertext (Raw Bytes): {}",
            format_byte_codes(&self.ciphertext)
        );
        let _ = writeln!(
            out,
            "\nDecrypted Text: {}",
            String::from_utf8_lossy(&self.decrypted)
        );
        if self.verified() {
            out.push_str("\n[SUCCESS] Encryption and decryption verified.\n");
        } else {
            out.push_str("\n[FAIL] Decryption mismatch.\n");
        }
        out
    }
}
