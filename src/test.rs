use crate::dataset::schema::RawRecord;
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn mock_record(
    area: &str,
    restaurants: Option<i64>,
    hotels: Option<i64>,
    cafes: Option<i64>,
) -> RawRecord {
    RawRecord {
        area: area.into(),
        restaurants,
        hotels,
        cafes,
        cafes_flag: None,
        restaurants_flag: None,
        hotels_flag: None,
        initiatives_flag: None,
    }
}

static TEMP_PATH_COUNTER: AtomicUsize = AtomicUsize::new(1);

// A scratch path no other test in this process is using
pub fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!(
        "lebtour_{name}_{}_{}",
        std::process::id(),
        TEMP_PATH_COUNTER.fetch_add(1, Ordering::Relaxed)
    ))
}
