use crate::dataset::schema::RawRecord;
use crate::{Error, Result};
use csv::ReaderBuilder;
use std::io::Read;
use tracing::info;

pub async fn fetch(url: &str) -> Result<Vec<RawRecord>> {
    info!(url, "Fetching source dataset");

    let response = reqwest::get(url)
        .await
        .map_err(|e| Error::DataUnavailable(format!("Can't reach the dataset source: {e}")))?;

    if !response.status().is_success() {
        Err(Error::DataUnavailable(format!(
            "Dataset source returned HTTP {}",
            response.status()
        )))?
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::DataUnavailable(format!("Can't read the dataset response: {e}")))?;

    let records = parse(body.as_bytes())?;

    info!(records = records.len(), "Loaded source dataset");

    Ok(records)
}

// Provenance columns (publisher, dataset, references) aren't part of the
// record type so they never make it past this point
pub fn parse(reader: impl Read) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new().from_reader(reader);
    let mut records = vec![];
    for record in reader.deserialize::<RawRecord>() {
        let mut record =
            record.map_err(|e| Error::DataUnavailable(format!("Can't parse the dataset: {e}")))?;
        record.area = normalize_area(&record.area);
        records.push(record);
    }
    Ok(records)
}

fn normalize_area(ref_area: &str) -> String {
    ref_area
        .rsplit('/')
        .next()
        .unwrap_or(ref_area)
        .to_string()
}
