use crate::blockchain::models::{GatewayError, GatewayResult};
use ethers::{types::Address, utils::to_checksum};
use std::str::FromStr;

/// Parses a textual address in any casing, with or without the `0x` prefix.
///
/// Mixed-case input is not checked against its EIP-55 checksum; it is
/// lowered and re-checksummed like any other input.
pub fn normalize_address(input: &str) -> GatewayResult<Address> {
    let hex_part = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if hex_part.len() != 40 {
        return Err(GatewayError::InvalidAddress(format!(
            "'{}' must be 20 bytes (40 hex characters)",
            input
        )));
    }
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GatewayError::InvalidAddress(format!(
            "'{}' contains non-hex characters",
            input
        )));
    }

    Address::from_str(&hex_part.to_ascii_lowercase())
        .map_err(|e| GatewayError::InvalidAddress(format!("'{}': {}", input, e)))
}

/// Canonical EIP-55 form of an address.
pub fn checksum_address(input: &str) -> GatewayResult<String> {
    normalize_address(input).map(|address| to_checksum(&address, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn casing_does_not_matter() {
        let lower = CHECKSUMMED.to_lowercase();
        let upper = format!("0x{}", CHECKSUMMED[2..].to_uppercase());

        let expected = normalize_address(CHECKSUMMED).unwrap();
        assert_eq!(normalize_address(&lower).unwrap(), expected);
        assert_eq!(normalize_address(&upper).unwrap(), expected);
        assert_eq!(checksum_address(&lower).unwrap(), CHECKSUMMED);
    }

    #[test]
    fn prefix_is_optional() {
        assert_eq!(
            checksum_address(&CHECKSUMMED[2..]).unwrap(),
            CHECKSUMMED
        );
        assert_eq!(
            checksum_address(&format!("0X{}", &CHECKSUMMED[2..])).unwrap(),
            CHECKSUMMED
        );
    }

    #[test]
    fn rejects_wrong_length() {
        let too_long = format!("{}00", CHECKSUMMED);
        for bad in ["", "0x", "0x1234", &CHECKSUMMED[..41], too_long.as_str()] {
            assert!(
                matches!(normalize_address(bad), Err(GatewayError::InvalidAddress(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn rejects_non_hex() {
        let bad = format!("0x{}", "g".repeat(40));
        assert!(matches!(
            normalize_address(&bad),
            Err(GatewayError::InvalidAddress(_))
        ));
        assert!(normalize_address("vitalik.eth").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        let padded = format!(" {} ", CHECKSUMMED);
        let newline = format!("{}\n", CHECKSUMMED);
        for bad in [padded.as_str(), newline.as_str()] {
            assert!(
                matches!(normalize_address(bad), Err(GatewayError::InvalidAddress(_))),
                "accepted {:?}",
                bad
            );
        }
    }
}
