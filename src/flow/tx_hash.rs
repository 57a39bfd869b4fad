//! Transaction hash generation

use crate::errors::Result;

/// Number of hex digits after the `0x` prefix
pub const TX_HASH_DIGITS: usize = 10;

/// Random `0x`-prefixed hash with ten upper-case hex digits
pub fn generate_tx_hash() -> Result<String> {
    let mut buf = [0u8; TX_HASH_DIGITS / 2];
    getrandom::getrandom(&mut buf)?;

    let mut hash = String::with_capacity(2 + TX_HASH_DIGITS);
    hash.push_str("0x");
    for byte in buf {
        hash.push_str(&format!("{:02X}", byte));
    }
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let hash = generate_tx_hash().unwrap();
        assert_eq!(hash.len(), 12);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}
