//! Password encryption keyed by callsign.
//!
//! The key is derived from the upper-cased callsign with PBKDF2, so a stored
//! password can only be read back under the callsign it was stored for.
//! Ciphertext layout before base64: `nonce (12 bytes) || sealed password || tag`.

use std::num::NonZeroU32;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ring::aead::{AES_256_GCM, Aad, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};

use crate::error::StoreError;

const SALT: &[u8] = b"qrz-rs/password/v1";

const ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};

/// AES-256-GCM cipher for the stored password.
pub struct PasswordCipher {
    key: LessSafeKey,
    rng: SystemRandom,
}

impl PasswordCipher {
    /// Derives the cipher for a callsign.
    pub fn for_callsign(callsign: &str) -> Result<Self, StoreError> {
        let mut key_bytes = [0u8; 32];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            ITERATIONS,
            SALT,
            callsign.trim().to_uppercase().as_bytes(),
            &mut key_bytes,
        );

        let key = UnboundKey::new(&AES_256_GCM, &key_bytes)
            .map_err(|_| StoreError::Crypto("Invalid key length".to_string()))?;

        Ok(Self {
            key: LessSafeKey::new(key),
            rng: SystemRandom::new(),
        })
    }

    /// Encrypts a password and returns it base64-encoded.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, StoreError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| StoreError::Crypto("Could not generate nonce".to_string()))?;

        let mut in_out = plaintext.as_bytes().to_vec();
        self.key
            .seal_in_place_append_tag(
                Nonce::assume_unique_for_key(nonce_bytes),
                Aad::empty(),
                &mut in_out,
            )
            .map_err(|_| StoreError::Crypto("Encryption failed".to_string()))?;

        let mut sealed = nonce_bytes.to_vec();
        sealed.extend_from_slice(&in_out);
        Ok(STANDARD.encode(sealed))
    }

    /// Decrypts a base64-encoded password.
    ///
    /// Fails if the text was encrypted under another callsign.
    pub fn decrypt(&self, encoded: &str) -> Result<String, StoreError> {
        let sealed = STANDARD
            .decode(encoded.trim())
            .map_err(|e| StoreError::Crypto(format!("Invalid base64: {e}")))?;

        if sealed.len() < NONCE_LEN {
            return Err(StoreError::Crypto("Ciphertext too short".to_string()));
        }
        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes)
            .map_err(|_| StoreError::Crypto("Invalid nonce".to_string()))?;

        let mut in_out = ciphertext.to_vec();
        let plaintext = self
            .key
            .open_in_place(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| StoreError::Crypto("Decryption failed".to_string()))?;

        String::from_utf8(plaintext.to_vec())
            .map_err(|e| StoreError::Crypto(format!("UTF-8 error: {e}")))
    }
}

impl std::fmt::Debug for PasswordCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCipher").finish_non_exhaustive()
    }
}
