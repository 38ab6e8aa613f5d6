//! Base64 transform, standard alphabet with padding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode base64 text. Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn decode(input: &str) -> Result<String, base64::DecodeError> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hi() {
        assert_eq!(encode("hi"), "aGk=");
    }

    #[test]
    fn test_decode_hi() {
        assert_eq!(decode("aGk=").unwrap(), "hi");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not base64!").is_err());
        assert!(decode("aGk").is_err());
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(""), "");
    }
}
