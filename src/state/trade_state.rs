//! Trade offers and history shown in the trades view.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of trade offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeKind {
    /// Instant trade against a bot.
    Quick,
    /// Trade with another player.
    PeerToPeer,
}

/// A way to trade, shown as a card with an inert action button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeOffer {
    pub kind: TradeKind,
    pub title: String,
    pub description: String,
}

/// Outcome of a recorded trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    #[default]
    Completed,
}

impl TradeStatus {
    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Завершено",
        }
    }
}

/// A finished trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: Uuid,
    pub item_name: String,
    pub icon: String,
    pub completed_at: DateTime<Utc>,
    pub status: TradeStatus,
}

impl TradeRecord {
    pub fn new(
        item_name: impl Into<String>,
        icon: impl Into<String>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_name: item_name.into(),
            icon: icon.into(),
            completed_at,
            status: TradeStatus::Completed,
        }
    }
}

/// Trades view state.
#[derive(Debug, Default)]
pub struct TradeState {
    pub offers: Vec<TradeOffer>,
    pub history: Vec<TradeRecord>,
}

impl TradeState {
    /// Demo offers and history relative to `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            offers: vec![
                TradeOffer {
                    kind: TradeKind::Quick,
                    title: "Быстрый обмен".to_string(),
                    description: "Обменяй свои предметы на боты".to_string(),
                },
                TradeOffer {
                    kind: TradeKind::PeerToPeer,
                    title: "P2P обмен".to_string(),
                    description: "Обменивайся с другими игроками".to_string(),
                },
            ],
            history: vec![
                TradeRecord::new("AWP | Dragon Lore", "🎯", now - Duration::minutes(5)),
                TradeRecord::new("Karambit | Fade", "🔪", now - Duration::hours(3)),
                TradeRecord::new("AK-47 | Redline", "⚡", now - Duration::days(2)),
            ],
        }
    }
}

/// Russian "time ago" label, e.g. "5 минут назад".
pub fn format_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        return "только что".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} {} назад", plural(minutes, "минуту", "минуты", "минут"));
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours} {} назад", plural(hours, "час", "часа", "часов"));
    }

    let days = elapsed.num_days();
    format!("{days} {} назад", plural(days, "день", "дня", "дней"))
}

fn plural<'a>(n: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n = n.abs();
    match (n % 10, n % 100) {
        (1, r) if r != 11 => one,
        (2..=4, r) if !(12..=14).contains(&r) => few,
        _ => many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ago(minutes: i64) -> String {
        let now = Utc::now();
        format_ago(now, now - Duration::minutes(minutes))
    }

    #[test]
    fn test_format_ago_minutes() {
        assert_eq!(ago(0), "только что");
        assert_eq!(ago(1), "1 минуту назад");
        assert_eq!(ago(2), "2 минуты назад");
        assert_eq!(ago(5), "5 минут назад");
        assert_eq!(ago(11), "11 минут назад");
        assert_eq!(ago(21), "21 минуту назад");
        assert_eq!(ago(44), "44 минуты назад");
    }

    #[test]
    fn test_format_ago_hours_and_days() {
        assert_eq!(ago(60), "1 час назад");
        assert_eq!(ago(3 * 60), "3 часа назад");
        assert_eq!(ago(5 * 60), "5 часов назад");
        assert_eq!(ago(24 * 60), "1 день назад");
        assert_eq!(ago(2 * 24 * 60), "2 дня назад");
        assert_eq!(ago(12 * 24 * 60), "12 дней назад");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = Utc::now();
        assert_eq!(format_ago(now, now + Duration::minutes(3)), "только что");
    }

    #[test]
    fn test_demo_history_is_newest_first() {
        let state = TradeState::demo(Utc::now());
        assert_eq!(state.offers.len(), 2);
        assert!(
            state
                .history
                .windows(2)
                .all(|w| w[0].completed_at >= w[1].completed_at)
        );
        assert_ne!(state.history[0].id, state.history[1].id);
    }

    #[test]
    fn test_history_records_are_completed() {
        let state = TradeState::demo(Utc::now());
        for record in &state.history {
            assert_eq!(record.status, TradeStatus::Completed);
            assert_eq!(record.status.label(), "Завершено");
        }
        assert_eq!(
            serde_json::to_string(&TradeStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
