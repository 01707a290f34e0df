use crate::bundle::PackedResult;
use crate::error::{BlobpackError, Result};
use crate::pipeline::{
    compress, decode, decompress, decrypt, encode, encrypt, generate_iv, generate_key,
};

/// Pack arbitrary bytes into a printable blob
/// Pipeline: Compress → Encrypt → Encode
///
/// Total over any input, including empty. The key and IV are drawn fresh
/// from the OS CSPRNG on every call and returned base64-encoded alongside
/// the blob; they are never derived from the input.
pub fn pack(data: &[u8]) -> Result<PackedResult> {
    // Step 1: Compress (encoder fully finished before the cipher sees it)
    let compressed = compress(data)?;

    // Step 2: Generate fresh key material
    let key = generate_key();
    let iv = generate_iv();

    // Step 3: Encrypt, padding the final block
    let ciphertext = encrypt(&compressed, &key, &iv);

    // Step 4: Encode ciphertext, key, and IV independently
    Ok(PackedResult::new(
        encode(&ciphertext),
        encode(&key),
        encode(&iv),
    ))
}

/// Unpack a previously packed blob back to the original bytes
/// Pipeline: Decode → Decrypt → Decompress
///
/// Partial: fails with a distinct error kind for each failure mode (empty
/// field, malformed base64, wrong key/IV length, bad padding, corrupt gzip
/// stream). A wrong key or IV is usually caught at the padding or gzip stage,
/// but that is incidental integrity, not authentication.
pub fn unpack(packed: &PackedResult) -> Result<Vec<u8>> {
    // Step 1: Reject empty fields before any decoding
    if packed.blob.is_empty() {
        return Err(BlobpackError::EmptyField("blob"));
    }
    if packed.key.is_empty() {
        return Err(BlobpackError::EmptyField("key"));
    }
    if packed.iv.is_empty() {
        return Err(BlobpackError::EmptyField("iv"));
    }

    // Step 2: Decode all three fields
    let ciphertext = decode(&packed.blob, "blob")?;
    let key = decode(&packed.key, "key")?;
    let iv = decode(&packed.iv, "iv")?;

    // Step 3: Decrypt (validates key/IV lengths, removes padding)
    let compressed = decrypt(&ciphertext, &key, &iv)?;

    // Step 4: Decompress to end-of-stream
    decompress(&compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{IV_LEN, KEY_LEN};

    fn roundtrip(data: &[u8]) {
        let packed = pack(data).unwrap();
        let restored = unpack(&packed).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn test_hello_world_scenario() {
        let packed = pack(b"Hello, World!").unwrap();

        assert!(!packed.blob.is_empty());
        assert_eq!(decode(&packed.key, "key").unwrap().len(), KEY_LEN);
        assert_eq!(decode(&packed.iv, "iv").unwrap().len(), IV_LEN);

        let restored = unpack(&packed).unwrap();
        assert_eq!(restored, b"Hello, World!");
        assert_eq!(restored.len(), 13);
    }

    #[test]
    fn test_roundtrip_empty_input() {
        roundtrip(b"");
    }

    #[test]
    fn test_roundtrip_block_boundaries() {
        // One cipher block pre-padding, and one byte over
        roundtrip(&[0x42; 16]);
        roundtrip(&[0x42; 17]);
    }

    #[test]
    fn test_roundtrip_large_input() {
        let data: Vec<u8> = (0..100_000).map(|i| ((i * 7 + 13) % 256) as u8).collect();
        roundtrip(&data);
    }

    #[test]
    fn test_key_material_is_fresh_per_call() {
        let first = pack(b"identical input").unwrap();
        let second = pack(b"identical input").unwrap();

        assert_ne!(first.key, second.key);
        assert_ne!(first.iv, second.iv);
        assert_ne!(first.blob, second.blob);
    }

    #[test]
    fn test_unpack_rejects_empty_fields() {
        let packed = pack(b"payload").unwrap();

        let empty_blob = PackedResult::new(String::new(), packed.key.clone(), packed.iv.clone());
        assert!(matches!(
            unpack(&empty_blob),
            Err(BlobpackError::EmptyField("blob"))
        ));

        let empty_key = PackedResult::new(packed.blob.clone(), String::new(), packed.iv.clone());
        assert!(matches!(
            unpack(&empty_key),
            Err(BlobpackError::EmptyField("key"))
        ));

        let empty_iv = PackedResult::new(packed.blob.clone(), packed.key.clone(), String::new());
        assert!(matches!(
            unpack(&empty_iv),
            Err(BlobpackError::EmptyField("iv"))
        ));
    }

    #[test]
    fn test_unpack_rejects_malformed_base64() {
        let packed = pack(b"payload").unwrap();
        let bad = PackedResult::new("!!!not base64!!!".into(), packed.key, packed.iv);
        assert!(matches!(
            unpack(&bad),
            Err(BlobpackError::Encoding { field: "blob", .. })
        ));
    }

    #[test]
    fn test_unpack_rejects_short_key() {
        let packed = pack(b"payload").unwrap();
        let short = PackedResult::new(packed.blob, encode(&[0u8; 16]), packed.iv);
        assert!(matches!(
            unpack(&short),
            Err(BlobpackError::InvalidKeyLength(16))
        ));
    }

    #[test]
    fn test_unpack_rejects_short_iv() {
        let packed = pack(b"payload").unwrap();
        let short = PackedResult::new(packed.blob, packed.key, encode(&[0u8; 8]));
        assert!(matches!(
            unpack(&short),
            Err(BlobpackError::InvalidIvLength(8))
        ));
    }

    #[test]
    fn test_tampered_blob_is_detected() {
        let packed = pack(b"payload that must not survive tampering").unwrap();

        // Flip one byte of the decoded ciphertext and re-encode. Garbling
        // the first block destroys the gzip magic header if the padding
        // check doesn't catch it first.
        let mut ciphertext = decode(&packed.blob, "blob").unwrap();
        ciphertext[0] ^= 0x01;
        let tampered = PackedResult::new(encode(&ciphertext), packed.key, packed.iv);

        match unpack(&tampered) {
            Err(BlobpackError::CryptographicError(_))
            | Err(BlobpackError::DecompressionError(_)) => {}
            Ok(_) => panic!("tampered blob unpacked successfully"),
            Err(other) => panic!("unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_iv_is_detected() {
        let original = b"cross-field mismatch must fail";
        let packed = pack(original).unwrap();

        // Valid-length but different IV: CBC garbles the first plaintext
        // block, which holds the gzip magic header
        let wrong_iv = PackedResult::new(packed.blob, packed.key, encode(&generate_iv()));

        match unpack(&wrong_iv) {
            Err(BlobpackError::CryptographicError(_))
            | Err(BlobpackError::DecompressionError(_)) => {}
            Ok(bytes) => panic!(
                "mismatched IV produced {} bytes instead of failing",
                bytes.len()
            ),
            Err(other) => panic!("unexpected error type: {other:?}"),
        }
    }
}
