//! Dashboard service - the canned recent-activity ledger
//!
//! Demo data only; nothing the user does feeds back into it.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Buy,
    Sell,
    Exchange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityStatus {
    Completed,
    Pending,
    Failed,
}

/// One row of the recent-activity table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub kind: ActivityKind,
    pub asset: String,
    pub amount: String,
    pub price: String,
    pub status: ActivityStatus,
    pub date: NaiveDate,
}

#[derive(Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// The recent-activity rows, newest first.
    pub fn recent_activity(&self) -> Vec<Activity> {
        fn date(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
        }

        vec![
            Activity {
                kind: ActivityKind::Buy,
                asset: "BTC".to_string(),
                amount: "0.5".to_string(),
                price: "$45,000".to_string(),
                status: ActivityStatus::Completed,
                date: date(2024, 1, 15),
            },
            Activity {
                kind: ActivityKind::Sell,
                asset: "ETH".to_string(),
                amount: "2.0".to_string(),
                price: "$3,200".to_string(),
                status: ActivityStatus::Completed,
                date: date(2024, 1, 14),
            },
            Activity {
                kind: ActivityKind::Exchange,
                asset: "BTC to ETH".to_string(),
                amount: "0.1".to_string(),
                price: "Market".to_string(),
                status: ActivityStatus::Pending,
                date: date(2024, 1, 14),
            },
            Activity {
                kind: ActivityKind::Buy,
                asset: "ADA".to_string(),
                amount: "100".to_string(),
                price: "$1.20".to_string(),
                status: ActivityStatus::Completed,
                date: date(2024, 1, 13),
            },
            Activity {
                kind: ActivityKind::Sell,
                asset: "SOL".to_string(),
                amount: "5.0".to_string(),
                price: "$120".to_string(),
                status: ActivityStatus::Failed,
                date: date(2024, 1, 12),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_is_newest_first() {
        let rows = DashboardService::new().recent_activity();
        assert_eq!(rows.len(), 5);
        for pair in rows.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_activity_rows_are_stable() {
        let svc = DashboardService::new();
        assert_eq!(svc.recent_activity(), svc.recent_activity());
        assert_eq!(svc.recent_activity()[0].asset, "BTC");
        assert_eq!(svc.recent_activity()[4].status, ActivityStatus::Failed);
    }
}
