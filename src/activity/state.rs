use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of rows in the top-keys ranking.
pub const TOP_KEYS_LIMIT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Snapshot of every counter the tracker keeps.
///
/// Transitions never mutate a snapshot in place: `with_pointer_down` and
/// `with_key_down` return the next snapshot and leave `self` untouched.
/// The key total is not stored separately; it is always the sum of
/// `key_presses`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ActivityRecord", into = "ActivityRecord")]
pub struct ActivityState {
    pub left_clicks: u64,
    pub right_clicks: u64,
    pub key_presses: BTreeMap<String, u64>,
}

/// On-disk shape of a snapshot.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityRecord {
    #[serde(default)]
    left_clicks: u64,
    #[serde(default)]
    right_clicks: u64,
    #[serde(default)]
    total_keys: u64,
    #[serde(default)]
    key_presses: BTreeMap<String, u64>,
}

impl From<ActivityRecord> for ActivityState {
    fn from(record: ActivityRecord) -> Self {
        let state = Self {
            left_clicks: record.left_clicks,
            right_clicks: record.right_clicks,
            key_presses: record.key_presses,
        };
        if state.total_keys() != record.total_keys {
            log::warn!(
                "stored totalKeys {} does not match key counts (sum {}), using the sum",
                record.total_keys,
                state.total_keys()
            );
        }
        state
    }
}

impl From<ActivityState> for ActivityRecord {
    fn from(state: ActivityState) -> Self {
        Self {
            left_clicks: state.left_clicks,
            right_clicks: state.right_clicks,
            total_keys: state.total_keys(),
            key_presses: state.key_presses,
        }
    }
}

impl ActivityState {
    pub fn with_pointer_down(&self, button: PointerButton) -> Self {
        let mut next = self.clone();
        match button {
            PointerButton::Primary => next.left_clicks = next.left_clicks.saturating_add(1),
            PointerButton::Secondary => next.right_clicks = next.right_clicks.saturating_add(1),
            PointerButton::Auxiliary => {}
        }
        next
    }

    /// Count one key-down for the raw key symbol `key`.
    pub fn with_key_down(&self, key: &str) -> Self {
        let mut next = self.clone();
        let count = next.key_presses.entry(normalize_key_label(key)).or_insert(0);
        *count = count.saturating_add(1);
        next
    }

    pub fn total_clicks(&self) -> u64 {
        self.left_clicks.saturating_add(self.right_clicks)
    }

    pub fn total_keys(&self) -> u64 {
        self.key_presses
            .values()
            .fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    pub fn distinct_keys(&self) -> usize {
        self.key_presses.len()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The `limit` most pressed keys, highest count first.
    ///
    /// Equal counts keep the map's label order since the sort is stable.
    pub fn top_keys(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .key_presses
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

/// Single-character symbols are uppercased; named keys pass through as-is.
pub fn normalize_key_label(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => key.to_uppercase(),
        _ => key.to_string(),
    }
}
