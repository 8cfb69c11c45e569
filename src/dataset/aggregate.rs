use crate::dataset::coords;
use crate::dataset::schema::RawRecord;
use serde::Serialize;
use std::collections::BTreeMap;

// One row per distinct area. total is always derived from the three sums,
// never carried separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSummary {
    pub area: String,
    pub restaurants: i64,
    pub hotels: i64,
    pub cafes: i64,
    pub total: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

// Grouping is keyed by area, so the output doesn't depend on input row order.
// Rows come back sorted by area.
pub fn aggregate(records: &[RawRecord]) -> Vec<AreaSummary> {
    let mut groups: BTreeMap<&str, (i64, i64, i64)> = BTreeMap::new();

    for record in records {
        let group = groups.entry(record.area.as_str()).or_default();
        group.0 += record.restaurants.unwrap_or(0);
        group.1 += record.hotels.unwrap_or(0);
        group.2 += record.cafes.unwrap_or(0);
    }

    groups
        .into_iter()
        .map(|(area, (restaurants, hotels, cafes))| {
            let point = coords::find(area);
            AreaSummary {
                area: area.to_string(),
                restaurants,
                hotels,
                cafes,
                total: restaurants + hotels + cafes,
                lat: point.map(|it| it.y()),
                lon: point.map(|it| it.x()),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::test::mock_record;
    use crate::Result;

    #[test]
    fn one_row_per_distinct_area() -> Result<()> {
        let records = vec![
            mock_record("Byblos_District", Some(1), Some(2), Some(3)),
            mock_record("Tyre_District", Some(4), None, Some(6)),
            mock_record("Byblos_District", Some(7), Some(8), None),
        ];
        let summaries = super::aggregate(&records);
        assert_eq!(2, summaries.len());
        Ok(())
    }

    #[test]
    fn sums_per_area_with_missing_as_zero() -> Result<()> {
        let records = vec![
            mock_record("Byblos_District", Some(1), Some(2), Some(3)),
            mock_record("Byblos_District", Some(7), Some(8), None),
        ];
        let summaries = super::aggregate(&records);
        assert_eq!(8, summaries[0].restaurants);
        assert_eq!(10, summaries[0].hotels);
        assert_eq!(3, summaries[0].cafes);
        Ok(())
    }

    #[test]
    fn total_is_sum_of_parts() -> Result<()> {
        let records = vec![
            mock_record("Byblos_District", Some(1), None, Some(3)),
            mock_record("Tyre_District", None, None, None),
        ];
        for summary in super::aggregate(&records) {
            assert_eq!(
                summary.restaurants + summary.hotels + summary.cafes,
                summary.total
            );
            assert!(summary.total >= 0);
        }
        Ok(())
    }

    #[test]
    fn row_order_does_not_matter() -> Result<()> {
        let records = vec![
            mock_record("Byblos_District", Some(1), Some(2), Some(3)),
            mock_record("Tyre_District", Some(4), Some(5), Some(6)),
            mock_record("Byblos_District", Some(7), Some(8), Some(9)),
        ];
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(super::aggregate(&records), super::aggregate(&reversed));
        Ok(())
    }

    #[test]
    fn joins_coordinates_where_known() -> Result<()> {
        let records = vec![
            mock_record("Byblos_District", Some(1), Some(1), Some(1)),
            mock_record("Atlantis_District", Some(1), Some(1), Some(1)),
        ];
        let summaries = super::aggregate(&records);
        let atlantis = &summaries[0];
        let byblos = &summaries[1];
        assert_eq!(Some(34.1202), byblos.lat);
        assert_eq!(Some(35.6800), byblos.lon);
        // Unknown areas stay in the output, just without geometry
        assert_eq!("Atlantis_District", atlantis.area);
        assert_eq!(None, atlantis.lat);
        assert_eq!(None, atlantis.lon);
        Ok(())
    }
}
