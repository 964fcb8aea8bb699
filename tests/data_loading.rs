use ghv_rs::data::{load_auxiliary, load_series};
use ghv_rs::models::{Dimension, YearRange};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::tempdir;

const CROPS: &str = "\
laji,vuosi,Sato (1 000 kg),Sato (1 000 kpl),Yrityksiä (kpl),Kasvihuoneala (1 000 m²)
TOTAL VEGETABLES,2014,99999,..,999,9999
Tomato,2014,40,..,10,100
Tomato,2015,45,..,9,98
Special Tomatoes,2014,5,..,3,20
Lettuce (potted),2014,..,70,8,30
Lettuce (potted),2015,..,75,..,31
TOTAL BERRIES,2014,100,..,5,10
Strawberry,2014,3,..,2,5
";

const TEMPS: &str = "\
Category,Helsinki Kaisaniemi
2012,4.8
2014,6.8
2015,7.4
2024,9.9
";

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn years() -> YearRange {
    YearRange {
        start: 2014,
        end: 2023,
    }
}

#[test]
fn aggregate_rows_are_dropped() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "crops.csv", CROPS);
    let series = load_series(&path, Arc::new(Vec::new())).unwrap();
    let names: Vec<&str> = series.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["Tomato", "Lettuce (potted)", "Strawberry"]);
}

#[test]
fn species_keep_file_order_and_records_group_per_species() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "crops.csv", CROPS);
    let series = load_series(&path, Arc::new(Vec::new())).unwrap();
    assert_eq!(series[0].records().len(), 2);
    assert_eq!(series[1].records().len(), 2);
    assert_eq!(series[2].records().len(), 1);
}

#[test]
fn missing_sentinel_becomes_none() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "crops.csv", CROPS);
    let series = load_series(&path, Arc::new(Vec::new())).unwrap();
    let lettuce = &series[1];
    assert_eq!(lettuce.records()[1].companies, None);
    assert_eq!(lettuce.extent(Dimension::Companies), Some((8.0, 8.0)));
}

#[test]
fn amount_conflation_substitutes_piece_counts() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "crops.csv", CROPS);
    let series = load_series(&path, Arc::new(Vec::new())).unwrap();
    let lettuce = &series[1];
    assert_eq!(lettuce.records()[0].amount, Some(70.0));
    assert_eq!(lettuce.extent(Dimension::Amount), Some((70.0, 75.0)));
    // mass stays preferred where present
    assert_eq!(series[0].records()[0].amount, Some(40.0));
}

#[test]
fn auxiliary_is_restricted_to_the_year_range() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "temps.csv", TEMPS);
    let aux = load_auxiliary(&path, years()).unwrap();
    let aux_years: Vec<i32> = aux.iter().map(|p| p.year).collect();
    assert_eq!(aux_years, [2014, 2015]);
    assert_eq!(aux[0].value, 6.8);
}

#[test]
fn loaded_series_share_the_auxiliary() {
    let dir = tempdir().unwrap();
    let crops = write(&dir, "crops.csv", CROPS);
    let temps = write(&dir, "temps.csv", TEMPS);
    let aux = Arc::new(load_auxiliary(&temps, years()).unwrap());
    let series = load_series(&crops, aux).unwrap();
    for s in &series {
        assert_eq!(s.auxiliary().len(), 2);
        assert_eq!(s.auxiliary_extent(), Some((6.8, 7.4)));
    }
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    assert!(load_series(&path, Arc::new(Vec::new())).is_err());
    assert!(load_auxiliary(&path, years()).is_err());
}
