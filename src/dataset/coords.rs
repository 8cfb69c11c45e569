use geo::Point;

// Not every area in the source data has an entry here. Areas without one stay
// in tabular views and are skipped by map views.
const AREA_COORDS: &[(&str, f64, f64)] = &[
    ("Akkar_Governorate", 34.5078, 36.1534),
    ("Mount_Lebanon_Governorate", 33.9634, 35.8347),
    ("Matn_District", 34.0280, 35.8351),
    ("Byblos_District", 34.1202, 35.6800),
    ("Baalbek-Hermel_Governorate", 33.9061, 36.1478),
    ("Aley_District", 33.8321, 35.8329),
    ("Keserwan_District", 34.0376, 35.6163),
    ("Tyre_District", 33.1615, 35.1146),
    ("South_Governorate", 33.2721, 35.2033),
    ("Sidon_District", 33.6020, 35.6924),
    ("Baabda_District", 33.8750, 35.4778),
    ("Miniyeh–Danniyeh_District", 34.2755, 35.7016),
    ("North_Governorate", 34.4186, 35.7857),
    ("Zgharta_District", 34.1564, 35.7830),
    ("Nabatieh_Governorate", 33.3641, 35.6466),
    ("Bint_Jbeil_District", 33.3638, 35.7387),
    ("Batroun_District", 34.1755, 35.7016),
    ("Zahlé_District", 33.5422, 35.8101),
    ("Western_Beqaa_District", 34.2304, 35.8682),
    ("Marjeyoun_District", 33.7500, 35.6924),
    ("Beqaa_Governorate", 34.0868, 35.9783),
    ("Bsharri_District", 34.2507, 36.0117),
    ("Hasbaya_District", 33.3979, 35.6851),
    ("Hermel_District", 34.3989, 36.3904),
    ("Tripoli_District,_Lebanon", 34.3284, 35.9783),
];

// Point x is longitude, y is latitude
pub fn find(area: &str) -> Option<Point<f64>> {
    AREA_COORDS
        .iter()
        .find(|(name, _, _)| *name == area)
        .map(|&(_, lat, lon)| Point::new(lon, lat))
}

#[cfg(test)]
mod test {
    #[test]
    fn find() {
        let point = super::find("Byblos_District").unwrap();
        assert_eq!(34.1202, point.y());
        assert_eq!(35.6800, point.x());
        assert!(super::find("Atlantis_District").is_none());
    }
}
