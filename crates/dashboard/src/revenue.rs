//! Bucketing order revenue into a trailing-days series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vendash_core::Order;

/// One day of the revenue series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBucket {
    pub date: NaiveDate,
    pub amount: f64,
}

impl RevenueBucket {
    /// Short weekday label ("Mon", "Tue", ...) for chart axes.
    pub fn weekday_label(&self) -> String {
        self.date.format("%a").to_string()
    }
}

/// Bucket revenue by calendar day over the trailing `window_days` days ending
/// `today` (inclusive), oldest first.
///
/// Every day in the window is present, seeded at 0. Cancelled and rejected
/// orders contribute nothing regardless of date; orders without a usable
/// creation date, or outside the window, are skipped (not an error).
pub fn bucket_revenue_by_day(
    orders: &[Order],
    window_days: u32,
    today: NaiveDate,
) -> Vec<RevenueBucket> {
    let window_days = window_days.max(1);
    let start = today - chrono::Days::new(u64::from(window_days - 1));

    let mut buckets: Vec<RevenueBucket> = (0..window_days)
        .map(|offset| RevenueBucket {
            date: start + chrono::Days::new(u64::from(offset)),
            amount: 0.0,
        })
        .collect();

    for order in orders {
        if !order.status.counts_toward_revenue() {
            continue;
        }
        let Some(created_at) = order.created_at else {
            continue;
        };
        let day = created_at.date_naive();
        let Ok(offset) = usize::try_from((day - start).num_days()) else {
            continue;
        };
        if let Some(bucket) = buckets.get_mut(offset) {
            bucket.amount += order.total_amount;
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use vendash_core::OrderStatus;

    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn order(status: &str, amount: f64, created_at: Option<&str>) -> Order {
        let created = match created_at {
            Some(ts) => format!(r#", "createdAt": "{ts}""#),
            None => String::new(),
        };
        serde_json::from_str(&format!(
            r#"{{"id": 1, "ondcOrderId": "X", "status": "{status}", "totalAmount": {amount}{created}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn window_covers_trailing_days_oldest_first() {
        let buckets = bucket_revenue_by_day(&[], 7, day("2026-08-23"));
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].date, day("2026-08-17"));
        assert_eq!(buckets[6].date, day("2026-08-23"));
        assert!(buckets.iter().all(|b| b.amount == 0.0));
    }

    #[test]
    fn adds_amount_to_the_creation_day_bucket() {
        let orders = vec![
            order("PENDING", 100.0, Some("2026-08-20T09:00:00")),
            order("FULFILLED", 50.0, Some("2026-08-20T18:30:00")),
            order("ACCEPTED", 25.0, Some("2026-08-23T08:00:00")),
        ];
        let buckets = bucket_revenue_by_day(&orders, 7, day("2026-08-23"));
        assert_eq!(buckets[3].date, day("2026-08-20"));
        assert_eq!(buckets[3].amount, 150.0);
        assert_eq!(buckets[6].amount, 25.0);
    }

    #[test]
    fn cancelled_and_rejected_orders_contribute_nothing() {
        let orders = vec![
            order("CANCELLED", 100.0, Some("2026-08-22T09:00:00")),
            order("REJECTED", 40.0, Some("2026-08-22T10:00:00")),
        ];
        let buckets = bucket_revenue_by_day(&orders, 7, day("2026-08-23"));
        assert!(buckets.iter().all(|b| b.amount == 0.0));
    }

    #[test]
    fn orders_outside_the_window_are_skipped() {
        let orders = vec![
            order("PENDING", 10.0, Some("2026-08-16T09:00:00")),
            order("PENDING", 20.0, Some("2026-08-24T09:00:00")),
        ];
        let buckets = bucket_revenue_by_day(&orders, 7, day("2026-08-23"));
        assert!(buckets.iter().all(|b| b.amount == 0.0));
    }

    #[test]
    fn orders_without_a_usable_date_are_skipped() {
        let orders = vec![
            order("PENDING", 10.0, None),
            order("PENDING", 20.0, Some("not-a-date")),
        ];
        let buckets = bucket_revenue_by_day(&orders, 7, day("2026-08-23"));
        assert!(buckets.iter().all(|b| b.amount == 0.0));
    }

    #[test]
    fn unknown_statuses_still_count_toward_revenue() {
        let orders = vec![order("ON_HOLD", 75.0, Some("2026-08-23T12:00:00"))];
        let buckets = bucket_revenue_by_day(&orders, 7, day("2026-08-23"));
        assert_eq!(buckets[6].amount, 75.0);
        assert_eq!(orders[0].status, OrderStatus::Other("ON_HOLD".into()));
    }

    #[test]
    fn weekday_labels_follow_the_calendar() {
        let buckets = bucket_revenue_by_day(&[], 2, day("2026-08-23"));
        // 2026-08-22 is a Saturday, 2026-08-23 a Sunday.
        assert_eq!(buckets[0].weekday_label(), "Sat");
        assert_eq!(buckets[1].weekday_label(), "Sun");
    }
}
