//! Formatting helpers for the API's vault and dashboard views.

use serde::{Deserialize, Serialize};

/// Microunits per whole STX.
pub const MICRO_PER_STX: u64 = 1_000_000;

/// Average block time on the settlement chain, in milliseconds.
pub const BLOCK_TIME_MS: u64 = 10 * 60 * 1000;

/// `2_500_000` → `"2.50 STX"`.
pub fn format_stx(micro: u64) -> String {
    let stx = micro as f64 / MICRO_PER_STX as f64;
    format!("{:.2} STX", stx)
}

/// Shorten an address to its first six and last four characters.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Parse a decimal STX amount into microunits, truncating past six places.
///
/// Returns `None` for anything that is not a plain non-negative decimal.
pub fn parse_stx_amount(input: &str) -> Option<u64> {
    let input = input.trim();
    let (whole, frac) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_digits: String = frac.chars().chain(std::iter::repeat('0')).take(6).collect();
    let frac: u64 = frac_digits.parse().ok()?;

    whole.checked_mul(MICRO_PER_STX)?.checked_add(frac)
}

/// Time left before a delay measured in blocks runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub expired: bool,
}

pub fn time_remaining(creation_ms: u64, delay_blocks: u64, now_ms: u64) -> TimeRemaining {
    let expiry = creation_ms.saturating_add(delay_blocks.saturating_mul(BLOCK_TIME_MS));
    if expiry <= now_ms {
        return TimeRemaining {
            days: 0,
            hours: 0,
            minutes: 0,
            expired: true,
        };
    }

    let remaining = expiry - now_ms;
    TimeRemaining {
        days: remaining / 86_400_000,
        hours: (remaining % 86_400_000) / 3_600_000,
        minutes: (remaining % 3_600_000) / 60_000,
        expired: false,
    }
}

/// Vault health bucket derived from a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Healthy,
    Warning,
    Critical,
}

impl HealthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => HealthTier::Healthy,
            50..=79 => HealthTier::Warning,
            _ => HealthTier::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stx() {
        assert_eq!(format_stx(2_500_000), "2.50 STX");
        assert_eq!(format_stx(0), "0.00 STX");
        assert_eq!(format_stx(1_234_567), "1.23 STX");
    }

    #[test]
    fn test_format_address() {
        assert_eq!(
            format_address("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"),
            "ST1PQH...GZGM"
        );
        assert_eq!(format_address(""), "");
        assert_eq!(format_address("abc"), "abc...abc");
    }

    #[test]
    fn test_parse_stx_amount() {
        assert_eq!(parse_stx_amount("2.5"), Some(2_500_000));
        assert_eq!(parse_stx_amount("1"), Some(1_000_000));
        assert_eq!(parse_stx_amount(".25"), Some(250_000));
        assert_eq!(parse_stx_amount("0.0000019"), Some(1));
        assert_eq!(parse_stx_amount(" 3.000001 "), Some(3_000_001));
        assert_eq!(parse_stx_amount(""), None);
        assert_eq!(parse_stx_amount("."), None);
        assert_eq!(parse_stx_amount("-1"), None);
        assert_eq!(parse_stx_amount("1e6"), None);
        assert_eq!(parse_stx_amount("1.2.3"), None);
    }

    #[test]
    fn test_time_remaining() {
        let day = 86_400_000;
        // 144 blocks = one day.
        let left = time_remaining(0, 144, day / 2);
        assert_eq!(left, TimeRemaining { days: 0, hours: 12, minutes: 0, expired: false });

        let left = time_remaining(0, 4320, 0);
        assert_eq!(left.days, 30);

        assert!(time_remaining(0, 1, BLOCK_TIME_MS).expired);
    }

    #[test]
    fn test_health_tier() {
        assert_eq!(HealthTier::from_score(95), HealthTier::Healthy);
        assert_eq!(HealthTier::from_score(80), HealthTier::Healthy);
        assert_eq!(HealthTier::from_score(50), HealthTier::Warning);
        assert_eq!(HealthTier::from_score(15), HealthTier::Critical);
    }
}
