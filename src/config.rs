use serde::Deserialize;

/// Board settings shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Days shown in the date selector before today.
    pub days_before: u32,
    /// Days shown in the date selector after today.
    pub days_after: u32,
}

impl BoardConfig {
    pub fn with_days_before(mut self, days: u32) -> Self {
        self.days_before = days;
        self
    }

    pub fn with_days_after(mut self, days: u32) -> Self {
        self.days_after = days;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            days_before: 3,
            days_after: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_a_week_centered_on_today() {
        let config = BoardConfig::default();
        assert_eq!(config.days_before, 3);
        assert_eq!(config.days_after, 3);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: BoardConfig = serde_json::from_str(r#"{ "daysAfter": 6 }"#).unwrap();
        assert_eq!(config, BoardConfig::default().with_days_after(6));

        let empty: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BoardConfig::default());
    }
}
