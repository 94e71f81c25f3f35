use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// CRC32C (Castagnoli) of `data`, big-endian, base64-encoded.
///
/// This is the form the `crc32c` attribute takes on the wire.
pub fn crc32c_base64(data: &[u8]) -> String {
    STANDARD.encode(crc32c::crc32c(data).to_be_bytes())
}

/// MD5 digest of `data`, base64-encoded.
pub fn md5_base64(data: &[u8]) -> String {
    STANDARD.encode(md5::compute(data).0)
}
