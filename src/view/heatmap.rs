use crate::dataset::aggregate::AreaSummary;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct AreaPercentages {
    pub area: String,
    pub restaurants: f64,
    pub hotels: f64,
    pub cafes: f64,
}

// Each metric column is normalized independently so it sums to 100 across all
// areas. Column-wise, not row-wise: a row's three values don't add up to
// anything meaningful.
pub fn percentages(summaries: &[AreaSummary]) -> Vec<AreaPercentages> {
    let restaurants_total: i64 = summaries.iter().map(|it| it.restaurants).sum();
    let hotels_total: i64 = summaries.iter().map(|it| it.hotels).sum();
    let cafes_total: i64 = summaries.iter().map(|it| it.cafes).sum();

    summaries
        .iter()
        .map(|it| AreaPercentages {
            area: it.area.clone(),
            restaurants: share(it.restaurants, restaurants_total),
            hotels: share(it.hotels, hotels_total),
            cafes: share(it.cafes, cafes_total),
        })
        .collect()
}

fn share(value: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    value as f64 / total as f64 * 100.0
}
