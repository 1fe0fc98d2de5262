//! Display formatting for on-chain quantities and timestamps

use alloy_primitives::utils::format_units;
use alloy_primitives::U256;
use chrono::{DateTime, FixedOffset, Utc};
use locker_core::constants::DISPLAY_DECIMALS;
use locker_core::ProtocolError;

/// Day-first, 24-hour layout
const UNLOCK_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Value layout of a `datetime-local` input
const LOCK_TIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Render an 18-decimal fixed-point quantity with trailing zeros trimmed,
/// keeping at least one fraction digit: `1.5`, `5.0`, `0.0`
pub fn format_amount(value: U256) -> Result<String, ProtocolError> {
    let padded =
        format_units(value, DISPLAY_DECIMALS).map_err(|e| ProtocolError::StateUnavailable {
            reason: format!("Failed to format amount {}: {}", value, e),
        })?;

    Ok(match padded.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            let fraction = if fraction.is_empty() { "0" } else { fraction };
            format!("{}.{}", whole, fraction)
        }
        None => format!("{}.0", padded),
    })
}

/// Render epoch seconds as a day-first date-time at `offset`
pub fn format_unlock_time(epoch_secs: U256, offset: FixedOffset) -> Result<String, ProtocolError> {
    let out_of_range = || ProtocolError::StateUnavailable {
        reason: format!("Unlock time out of range: {}", epoch_secs),
    };

    let secs = u64::try_from(epoch_secs).map_err(|_| out_of_range())?;
    let secs = i64::try_from(secs).map_err(|_| out_of_range())?;
    let utc = DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(out_of_range)?;

    Ok(utc
        .with_timezone(&offset)
        .format(UNLOCK_TIME_FORMAT)
        .to_string())
}

/// Initial lock-time picker value: `now` at `offset`, to the minute
pub fn format_lock_time_default(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset)
        .format(LOCK_TIME_INPUT_FORMAT)
        .to_string()
}

/// Build the display offset from a minute count
pub fn display_offset(utc_offset_minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(utc_offset_minutes.checked_mul(60)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_trims_trailing_zeros() {
        let one_and_half = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_amount(one_and_half).unwrap(), "1.5");

        let five = U256::from(5_000_000_000_000_000_000u64);
        assert_eq!(format_amount(five).unwrap(), "5.0");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_amount(U256::ZERO).unwrap(), "0.0");
    }

    #[test]
    fn test_format_keeps_all_significant_digits() {
        assert_eq!(format_amount(U256::from(1u64)).unwrap(), "0.000000000000000001");
        assert_eq!(
            format_amount(U256::from(10_000_000_000_000_000u64)).unwrap(),
            "0.01"
        );
    }

    #[test]
    fn test_format_large_amount() {
        let value = U256::from(123_456u64) * U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_amount(value).unwrap(), "123456.0");
    }

    #[test]
    fn test_lock_time_default() {
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(
            format_lock_time_default(now, display_offset(0).unwrap()),
            "2023-11-14T22:13"
        );
        assert_eq!(
            format_lock_time_default(now, display_offset(120).unwrap()),
            "2023-11-15T00:13"
        );
    }

    #[test]
    fn test_unlock_time_epoch() {
        let utc = display_offset(0).unwrap();
        assert_eq!(
            format_unlock_time(U256::ZERO, utc).unwrap(),
            "01/01/1970, 00:00:00"
        );
        assert_eq!(
            format_unlock_time(U256::from(1_700_000_000u64), utc).unwrap(),
            "14/11/2023, 22:13:20"
        );
    }

    #[test]
    fn test_unlock_time_respects_offset() {
        let cet = display_offset(60).unwrap();
        assert_eq!(
            format_unlock_time(U256::from(1_700_000_000u64), cet).unwrap(),
            "14/11/2023, 23:13:20"
        );

        let west = display_offset(-300).unwrap();
        assert_eq!(
            format_unlock_time(U256::from(1_700_000_000u64), west).unwrap(),
            "14/11/2023, 17:13:20"
        );
    }

    #[test]
    fn test_unlock_time_out_of_range() {
        let utc = display_offset(0).unwrap();
        let err = format_unlock_time(U256::MAX, utc).unwrap_err();
        assert_eq!(err.error_code(), "state_unavailable");
    }

    #[test]
    fn test_display_offset_bounds() {
        assert!(display_offset(24 * 60).is_none());
        assert!(display_offset(-(23 * 60 + 59)).is_some());
    }
}
