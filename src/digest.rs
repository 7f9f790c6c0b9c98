//! Content digests for frame integrity checking
//!
//! Frame headers declare a checksum over the content region, encoded as
//! unpadded base64url. The digest function itself is injected into the
//! frame decoder so tests can substitute a trivial one; this module holds
//! the production implementation.

use base64ct::{Base64UrlUnpadded, Encoding};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of arbitrary bytes
pub fn sha256(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

/// Encode a digest in the textual form frame headers use (base64url, no padding)
pub fn encode_checksum(digest: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(digest)
}

/// Digest-and-encode in one step, the form in which checksums are compared
pub fn content_checksum(data: &[u8]) -> String {
    encode_checksum(&sha256(data))
}
