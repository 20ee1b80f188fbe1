use std::io::Write;
use std::path::Path;

use mycelia_ai::botany::loader::{load_plants_csv, HEADERS};
use mycelia_ai::config::default_dataset_path;
use mycelia_ai::{default_database, BotanyDatabase, BotanyError, Measure, PhFilter, PlantQuery};

fn bundled() -> BotanyDatabase {
    BotanyDatabase::open(&default_dataset_path()).expect("bundled dataset loads")
}

fn write_csv(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn header_line() -> String {
    HEADERS.join(";")
}

#[test]
fn bundled_dataset_has_every_row_in_file_order() {
    let db = bundled();
    let plants = db.all_plants();
    assert_eq!(plants.len(), 14);
    assert_eq!(plants[0].common_name, "Achillée millefeuille");
    assert_eq!(plants[13].common_name, "Digitale pourpre");
    assert_eq!(db.source_path(), Some(default_dataset_path().as_path()));
}

#[test]
fn height_bounds_are_ordered() {
    let db = bundled();
    let mut checked = 0;
    for plant in db.plants() {
        if let (Some(min), Some(max)) = plant.height_range() {
            assert!(min <= max, "{}: {min} > {max}", plant.common_name);
            checked += 1;
        }
    }
    assert!(checked >= 10);
}

#[test]
fn common_name_lookup_ignores_accents() {
    let db = bundled();
    let plain = db.find_by_common_name("Achillee");
    let scientific: Vec<&str> = plain.iter().map(|p| p.scientific_name.as_str()).collect();
    assert!(scientific.contains(&"Achillea millefolium"));
    assert!(scientific.contains(&"Achillea ptarmica"));

    let exact = db.find_by_common_name("Achillée millefeuille");
    assert_eq!(exact[0].scientific_name, "Achillea millefolium");
}

#[test]
fn common_name_lookup_is_idempotent() {
    let db = bundled();
    assert_eq!(db.find_by_common_name("sauge"), db.find_by_common_name("sauge"));
}

#[test]
fn scientific_name_lookup_exact_and_substring() {
    let db = bundled();
    let exact = db.find_by_scientific_name("Lavandula angustifolia");
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].scientific_name, "Lavandula angustifolia");
    assert_eq!(db.find_by_scientific_name("lavandula"), exact);
}

#[test]
fn ph_cell_with_decimal_comma_is_searchable() {
    let db = bundled();
    let yarrow = &db.find_by_scientific_name("Achillea millefolium")[0];
    assert_eq!(yarrow.ph_min, Some(Measure::Integer(6)));
    assert_eq!(yarrow.ph_max, Some(Measure::Decimal(7.5)));

    let overlapping = db.search(&PlantQuery::new().with_ph(PhFilter::between(Some(5.0), Some(6.0)).unwrap()));
    assert!(overlapping.contains(yarrow));

    let alkaline = db.search(&PlantQuery::new().with_ph(PhFilter::exact(8.0).unwrap()));
    assert!(!alkaline.contains(yarrow));
    assert!(alkaline.iter().any(|p| p.scientific_name == "Lavandula angustifolia"));
}

#[test]
fn empty_ph_never_matches_a_ph_filter() {
    let db = bundled();
    let nettle = &db.find_by_scientific_name("Urtica dioica")[0];
    assert_eq!(nettle.ph_min, None);
    assert_eq!(nettle.ph_max, None);

    for filter in [
        PhFilter::exact(7.0).unwrap(),
        PhFilter::between(Some(0.0), Some(14.0)).unwrap(),
        PhFilter::between(None, None).unwrap(),
    ] {
        let hits = db.search(&PlantQuery::new().with_ph(filter));
        assert!(!hits.contains(nettle));
    }
}

#[test]
fn humidity_filter_is_case_insensitive() {
    let db = bundled();
    let yarrow = &db.find_by_scientific_name("Achillea millefolium")[0];
    assert!(db.search(&PlantQuery::new().with_humidity("HUMIDE")).contains(yarrow));
    assert!(!db.search(&PlantQuery::new().with_humidity("sec")).contains(yarrow));
}

#[test]
fn search_without_filters_equals_all_plants() {
    let db = bundled();
    assert_eq!(db.search(&PlantQuery::default()), db.all_plants());
}

#[test]
fn filter_order_does_not_matter() {
    let db = bundled();
    let ph = PhFilter::between(Some(6.0), Some(7.0)).unwrap();
    let both = db.search(&PlantQuery::new().with_ph(ph).with_humidity("frais"));

    let ph_then_humidity: Vec<_> = db
        .search(&PlantQuery::new().with_ph(ph))
        .into_iter()
        .filter(|p| PlantQuery::new().with_humidity("frais").matches(p))
        .collect();
    let humidity_then_ph: Vec<_> = db
        .search(&PlantQuery::new().with_humidity("frais"))
        .into_iter()
        .filter(|p| PlantQuery::new().with_ph(ph).matches(p))
        .collect();

    assert!(!both.is_empty());
    assert_eq!(both, ph_then_humidity);
    assert_eq!(both, humidity_then_ph);
}

#[test]
fn row_count_matches_data_rows() {
    let contents = format!(
        "{}\nA;a\nB;b;;;;;;;;;;;;;;;;;;;;;extra;cells\n\nC;c\n",
        header_line()
    );
    let file = write_csv(contents.as_bytes());
    let plants = load_plants_csv(file.path()).unwrap();
    let names: Vec<&str> = plants.iter().map(|p| p.common_name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn malformed_cells_degrade_instead_of_failing() {
    let contents = "Nom commun;Hauteur cm;Largeur cm;pH\nX;grand;10-;acide\n";
    let file = write_csv(contents.as_bytes());
    let plant = &load_plants_csv(file.path()).unwrap()[0];
    assert_eq!(plant.height_min, None);
    assert_eq!(plant.height_max, None);
    assert_eq!(plant.width_min, Some(Measure::Integer(10)));
    assert_eq!(plant.width_max, None);
    assert_eq!(plant.ph_min, None);
    assert_eq!(plant.scientific_name, "");
}

#[test]
fn missing_file_is_a_file_access_error() {
    let err = BotanyDatabase::open(Path::new("/nonexistent/plants.csv")).unwrap_err();
    assert!(matches!(err, BotanyError::FileAccess { .. }));
}

#[test]
fn invalid_utf8_is_an_encoding_error() {
    let mut contents = header_line().into_bytes();
    contents.extend_from_slice(b"\nAchill\xe9e;Achillea\n");
    let file = write_csv(&contents);
    let err = load_plants_csv(file.path()).unwrap_err();
    assert!(matches!(err, BotanyError::Encoding { .. }));
}

#[test]
fn default_database_is_built_once() {
    let first = default_database().unwrap();
    let second = default_database().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(!first.is_empty());
}

#[test]
fn default_database_survives_concurrent_first_access() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| default_database().map(|db| db as *const BotanyDatabase as usize)))
        .collect();
    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
