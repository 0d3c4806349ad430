//! Trader profile shown in the profile view.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Profile of the (demo) signed-in trader.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub display_name: String,
    /// Reputation badge next to the name.
    pub badge: String,
    pub steam_id: String,
    pub trade_count: u32,
    /// Total traded value in dollars.
    pub turnover: Decimal,
    /// Positive feedback, percent.
    pub rating: Decimal,
    pub achievements: Vec<String>,
    /// Settings entries; display only.
    pub settings: Vec<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            display_name: "ProTrader2024".to_string(),
            badge: "Легенда".to_string(),
            steam_id: "76561198000000000".to_string(),
            trade_count: 248,
            turnover: dec!(12450),
            rating: dec!(98.5),
            achievements: vec![
                "Первый обмен".to_string(),
                "Коллекционер".to_string(),
                "Торговец года".to_string(),
            ],
            settings: vec![
                "Ссылка на обмен Steam".to_string(),
                "Уведомления".to_string(),
                "Безопасность".to_string(),
            ],
        }
    }
}

/// Format a dollar amount with thousands separators, e.g. `$12,450`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(0).abs().to_string();
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, c) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount.is_sign_negative() && !amount.round_dp(0).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}")
}
