use crate::error::{BlobpackError, Result};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-CBC IV (16 bytes = one 128-bit block).
pub const IV_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Generate a fresh AES-256 key from the OS CSPRNG
pub fn generate_key() -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);
    key
}

/// Generate a fresh IV from the OS CSPRNG
pub fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Encrypt with AES-256-CBC, PKCS7-padding the final block
///
/// Output length is always a multiple of the 16-byte block size; an input
/// that is already block-aligned gains one full padding block.
pub fn encrypt(plaintext: &[u8], key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> Vec<u8> {
    Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt with AES-256-CBC, removing PKCS7 padding during finalization
///
/// Key and IV lengths are validated before the cipher is constructed. A
/// padding failure means a wrong key/IV or tampered ciphertext, but the
/// converse does not hold: CBC carries no authentication tag, so a decrypt
/// that unpads cleanly can still yield wrong plaintext. The decompression
/// stage downstream is the last implicit integrity check.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let key: &[u8; KEY_LEN] = key
        .try_into()
        .map_err(|_| BlobpackError::InvalidKeyLength(key.len()))?;
    let iv: &[u8; IV_LEN] = iv
        .try_into()
        .map_err(|_| BlobpackError::InvalidIvLength(iv.len()))?;

    Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            BlobpackError::CryptographicError("bad padding or corrupt ciphertext".into())
        })
}
