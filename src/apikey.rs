//! API key format checking
//!
//! API keys are opaque, sortable, globally-unique identifiers: a 160-bit
//! value encoded as a fixed-width base62 string. The check here is purely
//! syntactic; no decoding or Unicode-safety logic is involved.

use crate::errors::{ExtractError, ExtractResult};
use crate::API_KEY_LENGTH;

/// Width of the decoded identifier in bytes
const DECODED_LENGTH: usize = 20;

/// Check that a string is a well-formed API key: exactly 27 base62
/// characters encoding a value that fits in 160 bits.
pub fn check_api_key(api_key: &str) -> ExtractResult<()> {
    if api_key.len() != API_KEY_LENGTH {
        return Err(invalid());
    }

    // Fixed-width big-endian accumulator: value = value * 62 + digit
    let mut value = [0u8; DECODED_LENGTH];
    for byte in api_key.bytes() {
        let digit = match byte {
            b'0'..=b'9' => byte - b'0',
            b'A'..=b'Z' => byte - b'A' + 10,
            b'a'..=b'z' => byte - b'a' + 36,
            _ => return Err(invalid()),
        };

        let mut carry = u32::from(digit);
        for slot in value.iter_mut().rev() {
            let v = u32::from(*slot) * 62 + carry;
            *slot = (v & 0xff) as u8;
            carry = v >> 8;
        }
        if carry != 0 {
            // Encodes more than 160 bits
            return Err(invalid());
        }
    }

    Ok(())
}

fn invalid() -> ExtractError {
    ExtractError::InvalidFormat("invalid API key format".to_string())
}
