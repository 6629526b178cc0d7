use serde::{Deserialize, Serialize};

/// Results kept across page loads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    /// Fastest find, in milliseconds.
    pub best_ms: Option<f64>,
    pub rounds_won: u32,
}

impl SessionStats {
    pub fn record_win(&mut self, elapsed_ms: f64) {
        self.best_ms = Some(match self.best_ms {
            Some(best) => best.min(elapsed_ms),
            None => elapsed_ms,
        });
        self.rounds_won = self.rounds_won.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_keeps_the_minimum() {
        let mut stats = SessionStats::default();
        stats.record_win(4200.0);
        stats.record_win(5100.0);
        stats.record_win(3900.0);
        assert_eq!(stats.best_ms, Some(3900.0));
        assert_eq!(stats.rounds_won, 3);
    }

    #[test]
    fn stored_json_tolerates_missing_fields() {
        let stats: SessionStats = serde_json::from_str(r#"{"best_ms": 1234.5}"#).unwrap();
        assert_eq!(stats.best_ms, Some(1234.5));
        assert_eq!(stats.rounds_won, 0);
        let raw = serde_json::to_string(&stats).unwrap();
        assert_eq!(serde_json::from_str::<SessionStats>(&raw).unwrap(), stats);
    }
}
