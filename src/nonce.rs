//! CSP nonce generation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;

/// Generate a base64-encoded 128-bit nonce for CSP `'nonce-...'` sources
///
/// Fresh per call; a nonce must never be reused across responses.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes[..]);
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_decodes_to_16_bytes() {
        let nonce = generate_nonce();
        let decoded = STANDARD.decode(&nonce).unwrap();
        assert_eq!(decoded.len(), 16);
    }

    #[test]
    fn test_nonces_are_unique() {
        let a = generate_nonce();
        let b = generate_nonce();
        assert_ne!(a, b);
    }
}
