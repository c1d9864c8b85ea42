use crate::metrics::Metric;
use hashbrown::HashMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Error of the model series before and after a correction, for one metric.
///
/// Serializes as a two key map, `"<metric>_before"` and `"<metric>_after"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    pub metric: Metric,
    pub before: f64,
    pub after: f64,
}

impl ScoreReport {
    pub fn new(metric: Metric, before: f64, after: f64) -> Self {
        ScoreReport { metric, before, after }
    }

    pub fn key_before(&self) -> String {
        format!("{}_before", self.metric.name())
    }

    pub fn key_after(&self) -> String {
        format!("{}_after", self.metric.name())
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        let mut map = HashMap::with_capacity(2);
        map.insert(self.key_before(), self.before);
        map.insert(self.key_after(), self.after);
        map
    }

    /// How much the correction reduced the error. Negative when it made things worse.
    pub fn improvement(&self) -> f64 {
        self.before - self.after
    }

    pub fn improved(&self) -> bool {
        self.after <= self.before
    }
}

impl Serialize for ScoreReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.4}, {}: {:.4}",
            self.key_before(),
            self.before,
            self.key_after(),
            self.after
        )
    }
}
