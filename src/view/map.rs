use crate::dataset::aggregate::AreaSummary;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

// Marker color buckets. Lower bound inclusive, upper bound exclusive, last
// bucket unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Orange,
    Red,
}

pub fn severity(total: i64) -> Severity {
    if total < 50 {
        Severity::Green
    } else if total < 100 {
        Severity::Yellow
    } else if total < 200 {
        Severity::Orange
    } else {
        Severity::Red
    }
}

pub fn filter_by_total(summaries: &[AreaSummary], min_total: i64) -> Vec<&AreaSummary> {
    summaries.iter().filter(|it| it.total >= min_total).collect()
}

// Areas without coordinates can't be placed on a map and are skipped here,
// they still show up in tabular views
pub fn feature_collection(summaries: &[AreaSummary], min_total: i64) -> FeatureCollection {
    let mut features = vec![];

    for summary in filter_by_total(summaries, min_total) {
        let (Some(lat), Some(lon)) = (summary.lat, summary.lon) else {
            continue;
        };
        let mut properties = JsonObject::new();
        properties.insert("name".into(), summary.area.clone().into());
        properties.insert("total".into(), summary.total.into());
        properties.insert("color".into(), severity(summary.total).to_string().into());
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![lon, lat]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
