use serde::Deserialize;

// One source row. The same area can appear on multiple rows and count cells
// can be empty, so consumers must sum per area with missing values as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    // Normalized by the loader to the last path segment of the source URI
    #[serde(rename = "refArea")]
    pub area: String,
    #[serde(rename = "Total number of restaurants")]
    pub restaurants: Option<i64>,
    #[serde(rename = "Total number of hotels")]
    pub hotels: Option<i64>,
    #[serde(rename = "Total number of cafes")]
    pub cafes: Option<i64>,
    #[serde(rename = "Existence of cafes - does not exist")]
    pub cafes_flag: Option<i64>,
    #[serde(rename = "Existence of restaurants - does not exist")]
    pub restaurants_flag: Option<i64>,
    #[serde(rename = "Existence of hotels - does not exist")]
    pub hotels_flag: Option<i64>,
    #[serde(
        rename = "Existence of initiatives and projects in the past five years to improve the tourism sector - exists"
    )]
    pub initiatives_flag: Option<i64>,
}
