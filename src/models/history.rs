use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One archived day. Serialized as `{"date": "YYYY-MM-DD", "totalMl": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub date: NaiveDate,
    pub total_ml: u32,
}

/// Append-only log of archived days.
///
/// Entries are never rewritten or pruned. Duplicate dates are kept as
/// written; lookups resolve them with "last appended wins".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total archived for `date`, if any.
    pub fn total_for(&self, date: NaiveDate) -> Option<u32> {
        self.records
            .iter()
            .rev()
            .find(|r| r.date == date)
            .map(|r| r.total_ml)
    }

    /// Date → total index over the whole log (later entries overwrite earlier).
    pub fn by_date(&self) -> HashMap<NaiveDate, u32> {
        self.records.iter().map(|r| (r.date, r.total_ml)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn duplicate_dates_resolve_to_last_appended() {
        let mut h = History::new();
        h.append(HistoryRecord {
            date: d("2024-03-01"),
            total_ml: 500,
        });
        h.append(HistoryRecord {
            date: d("2024-03-01"),
            total_ml: 0,
        });

        assert_eq!(h.len(), 2);
        assert_eq!(h.total_for(d("2024-03-01")), Some(0));
        assert_eq!(h.by_date().get(&d("2024-03-01")), Some(&0));
        assert_eq!(h.total_for(d("2024-03-02")), None);
    }

    #[test]
    fn record_uses_persisted_field_names() {
        let rec = HistoryRecord {
            date: d("2024-01-01"),
            total_ml: 1800,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-01","totalMl":1800}"#);
    }
}
