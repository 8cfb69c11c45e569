use crate::dataset::schema::RawRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::EnumString;

// The 0/1 indicator columns a caller can tabulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ExistenceColumn {
    Cafes,
    Restaurants,
    Hotels,
    Initiatives,
}

impl ExistenceColumn {
    fn value(&self, record: &RawRecord) -> Option<i64> {
        match self {
            ExistenceColumn::Cafes => record.cafes_flag,
            ExistenceColumn::Restaurants => record.restaurants_flag,
            ExistenceColumn::Hotels => record.hotels_flag,
            ExistenceColumn::Initiatives => record.initiatives_flag,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: i64,
    pub count: i64,
}

// Both expected domain values are always present in the output, even with a
// count of zero
pub fn tabulate(records: &[RawRecord], column: ExistenceColumn) -> Vec<ValueCount> {
    let mut counts: BTreeMap<i64, i64> = BTreeMap::from([(0, 0), (1, 0)]);

    for record in records {
        if let Some(value) = column.value(record) {
            *counts.entry(value).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect()
}
