//! Small shared utilities

use chrono::{DateTime, Utc};

/// Generate a display order number: `ORD-<YYYYMMDD>-<4 random digits>`.
///
/// This is a display label, not a primary key. The suffix is drawn from
/// 1000..10000, so two orders created on the same day collide with
/// probability 1/9000 per pair; the persistence layer treats a collision as
/// a data-quality issue, not an integrity violation.
pub fn order_number(now: DateTime<Utc>) -> String {
    use rand::Rng;
    let suffix: u32 = rand::thread_rng().gen_range(1000..10000);
    format!("ORD-{}-{}", now.format("%Y%m%d"), suffix)
}

/// Generate a fresh order id
pub fn new_order_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_number_format() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let number = order_number(now);
        assert!(number.starts_with("ORD-20260314-"));
        let suffix = number.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 4);
        let suffix: u32 = suffix.parse().unwrap();
        assert!((1000..10000).contains(&suffix));
    }

    #[test]
    fn test_new_order_id_is_unique() {
        assert_ne!(new_order_id(), new_order_id());
    }
}
