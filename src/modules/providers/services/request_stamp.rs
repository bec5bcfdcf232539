use chrono::Utc;

/// Source of the timestamp embedded in synthesized gateway identifiers
/// and client emails (`checkout-{stamp}-{user_id}` and friends).
///
/// Behind a trait so tests can pin the stamp.
pub trait RequestStamper: Send + Sync {
    fn stamp(&self) -> String;
}

/// Wall-clock stamper used in production wiring
pub struct SystemClock;

impl RequestStamper for SystemClock {
    fn stamp(&self) -> String {
        Utc::now().format("%Y%m%d%H%M%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_shape() {
        let stamp = SystemClock.stamp();
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
