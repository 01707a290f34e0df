//! Blobpack - GZip/AES/Base64 Payload Packer
//!
//! Packs arbitrary bytes into a self-contained printable blob that resists
//! casual or signature-based inspection, and restores it bit-for-bit. The
//! AES key and IV are randomly generated on every pack call and returned
//! base64-encoded in the result; there is no key derivation, no embedded
//! version tag, and no authentication tag. This is obfuscation, not
//! cryptographic protection of data at rest.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Input → Compress (gzip) → Encrypt (AES-256-CBC/PKCS7) → Encode (base64) → Blob
//! ```
//!
//! Unpacking runs the exact inverse. The two operations satisfy
//! `unpack(pack(x)) == x` for every byte sequence `x`, given the key/IV
//! produced by that same pack call.
//!
//! ## Example
//!
//! ```
//! use blobpack::packer::{pack, unpack};
//!
//! let packed = pack(b"some payload").unwrap();
//!
//! let blob = &packed.blob; // printable blob
//! let key = &packed.key;   // base64 AES-256 key
//! let iv = &packed.iv;     // base64 AES IV
//!
//! let restored = unpack(&packed).unwrap();
//! assert_eq!(restored, b"some payload");
//! ```

pub mod bundle;
pub mod cli;
pub mod error;
pub mod packer;
pub mod pipeline;

pub use bundle::PackedResult;
pub use error::{BlobpackError, Result};
pub use packer::{pack, unpack};
