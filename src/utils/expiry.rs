//! Expiration policy for short links.
//!
//! Pure time arithmetic with no storage dependency. Expiry is re-evaluated
//! against the current clock on every resolution; nothing is cached and
//! expired records are never reaped.

use chrono::{DateTime, Duration, Utc};

/// Smallest accepted `expires_in_minutes` value.
pub const MIN_EXPIRES_IN_MINUTES: i64 = 1;

/// Largest accepted `expires_in_minutes` value (one year).
pub const MAX_EXPIRES_IN_MINUTES: i64 = 525_600;

/// Computes the expiry instant for a link created at `created_at`.
///
/// Returns `None` when `expires_in_minutes` is absent, meaning the link
/// never expires. The caller guarantees the minutes value is within
/// [`MIN_EXPIRES_IN_MINUTES`]..=[`MAX_EXPIRES_IN_MINUTES`].
pub fn compute_expiry(
    created_at: DateTime<Utc>,
    expires_in_minutes: Option<i64>,
) -> Option<DateTime<Utc>> {
    expires_in_minutes.map(|minutes| created_at + Duration::minutes(minutes))
}

/// Returns true iff `expires_at` is set and `now` is strictly after it.
///
/// The boundary instant itself is still valid: a link queried exactly at
/// `expires_at` resolves normally.
pub fn is_expired(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    expires_at.is_some_and(|e| now > e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_expiry_absent_means_never() {
        assert_eq!(compute_expiry(Utc::now(), None), None);
    }

    #[test]
    fn test_compute_expiry_adds_minutes_to_creation() {
        let created_at = Utc::now();

        let expires_at = compute_expiry(created_at, Some(30)).unwrap();
        assert_eq!(expires_at, created_at + Duration::minutes(30));

        let max = compute_expiry(created_at, Some(MAX_EXPIRES_IN_MINUTES)).unwrap();
        assert_eq!(max, created_at + Duration::days(365));
    }

    #[test]
    fn test_compute_expiry_is_strictly_after_creation() {
        let created_at = Utc::now();
        let expires_at = compute_expiry(created_at, Some(MIN_EXPIRES_IN_MINUTES)).unwrap();
        assert!(expires_at > created_at);
    }

    #[test]
    fn test_is_expired_without_expiry_never_expires() {
        assert!(!is_expired(None, Utc::now() + Duration::days(10_000)));
    }

    #[test]
    fn test_is_expired_before_deadline() {
        let now = Utc::now();
        assert!(!is_expired(Some(now + Duration::minutes(1)), now));
    }

    #[test]
    fn test_is_expired_exactly_at_deadline_is_still_valid() {
        let now = Utc::now();
        assert!(!is_expired(Some(now), now));
    }

    #[test]
    fn test_is_expired_one_millisecond_past_deadline() {
        let now = Utc::now();
        assert!(is_expired(Some(now - Duration::milliseconds(1)), now));
    }

    #[test]
    fn test_is_expired_well_past_deadline() {
        let now = Utc::now();
        assert!(is_expired(Some(now - Duration::minutes(2)), now));
    }
}
