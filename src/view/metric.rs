use crate::dataset::schema::RawRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    Restaurants,
    Hotels,
    Cafes,
}

impl Metric {
    fn value(&self, record: &RawRecord) -> Option<i64> {
        match self {
            Metric::Restaurants => record.restaurants,
            Metric::Hotels => record.hotels,
            Metric::Cafes => record.cafes,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AreaValue {
    pub area: String,
    pub value: i64,
}

// Sums a single metric per area, missing cells as zero
pub fn total_by_area(records: &[RawRecord], metric: Metric) -> Vec<AreaValue> {
    let mut groups: BTreeMap<&str, i64> = BTreeMap::new();

    for record in records {
        *groups.entry(record.area.as_str()).or_default() += metric.value(record).unwrap_or(0);
    }

    groups
        .into_iter()
        .map(|(area, value)| AreaValue {
            area: area.to_string(),
            value,
        })
        .collect()
}
