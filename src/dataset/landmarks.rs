// Recommended tourist spots per district, same coverage as the coordinate
// table
const AREA_LANDMARKS: &[(&str, &[&str])] = &[
    (
        "Akkar_Governorate",
        &["Akkar Plains", "Mkaibeh Village", "Akkar Castle"],
    ),
    (
        "Aley_District",
        &["Aley Souks", "Beirut River Valley", "Aley Forest"],
    ),
    (
        "Baabda_District",
        &["Baabda Palace", "Chouf Cedars", "Deir el Qamar"],
    ),
    (
        "Baalbek-Hermel_Governorate",
        &["Baalbek Ruins", "Zahle", "Qasr el Heri"],
    ),
    (
        "Batroun_District",
        &["Batroun Old Town", "Roman Baths", "Batroun Beaches"],
    ),
    (
        "Beqaa_Governorate",
        &["Anjar Ruins", "Baalbek Temples", "Karaoun Lake"],
    ),
    (
        "Bint_Jbeil_District",
        &["Bint Jbeil Heritage", "Mleeta Resistance Museum", "Tyre Beach"],
    ),
    (
        "Bsharri_District",
        &["Qadisha Valley", "Cedars of God", "Bsharri Museum"],
    ),
    (
        "Byblos_District",
        &["Byblos Castle", "Old Souk", "Jeita Grotto"],
    ),
    (
        "Hasbaya_District",
        &["Hasbaya Castle", "Hasbaya Souk", "Ras El Ain"],
    ),
    (
        "Hermel_District",
        &["Hermel Ruins", "Lebanon River", "Mount Hermon"],
    ),
    (
        "Keserwan_District",
        &["Jounieh Bay", "Harissa", "Faqra Ruins"],
    ),
    (
        "Marjeyoun_District",
        &["Marjeyoun Castle", "Ajloun Nature Reserve", "The Ruins of Qasr el-Ma"],
    ),
    (
        "Matn_District",
        &["Broummana", "Jdita Village", "Matn Souk"],
    ),
    (
        "Miniyeh–Danniyeh_District",
        &["Miniyeh Old Town", "Danniyeh Mountains", "Saint Georges Monastery"],
    ),
    (
        "Mount_Lebanon_Governorate",
        &["Jounieh Bay", "Harissa", "Faqra Ruins"],
    ),
    (
        "Nabatieh_Governorate",
        &["Nabatieh Souk", "Berkayel", "Jezzine Waterfalls"],
    ),
    (
        "North_Governorate",
        &["Tripoli Citadel", "Abou Ali River", "El Mina"],
    ),
    (
        "Sidon_District",
        &["Sidon Sea Castle", "Ancient Sidon", "Sidon Souks"],
    ),
    (
        "South_Governorate",
        &["Tyre Roman Ruins", "Jezzine Waterfalls", "Nabatieh Souk"],
    ),
    (
        "Tripoli_District,_Lebanon",
        &["Tripoli Citadel", "Old Tripoli", "Al-Mina Port"],
    ),
    (
        "Tyre_District",
        &["Tyre Roman Ruins", "Tyre Beach", "Tyre Souks"],
    ),
    (
        "Western_Beqaa_District",
        &["Baalbek Ruins", "Taanayel Lake", "Shedra"],
    ),
    (
        "Zahlé_District",
        &["Zahlé River", "Zahlé Cathedral", "Wine Tours"],
    ),
    (
        "Zgharta_District",
        &["Zgharta Old Town", "Mar Abda Monastery", "Qozhaya Monastery"],
    ),
];

pub fn find(area: &str) -> &'static [&'static str] {
    AREA_LANDMARKS
        .iter()
        .find(|(name, _)| *name == area)
        .map(|(_, spots)| *spots)
        .unwrap_or(&[])
}
