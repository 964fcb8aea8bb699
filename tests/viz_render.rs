use ghv_rs::collection::Collection;
use ghv_rs::models::{AuxPoint, ChartConfig, Record};
use ghv_rs::series::Series;
use ghv_rs::view::Explorer;
use ghv_rs::viz;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn sample_explorer() -> Explorer {
    let aux = Arc::new(vec![
        AuxPoint {
            year: 2014,
            value: 6.8,
        },
        AuxPoint {
            year: 2015,
            value: 7.4,
        },
    ]);
    let make = |name: &str, base: f64| {
        let records = vec![
            Record {
                year: 2014,
                amount: Some(base),
                companies: Some(base / 2.0),
                area: Some(base * 3.0),
            },
            Record {
                year: 2015,
                amount: Some(base * 1.2),
                companies: Some(base / 2.5),
                area: Some(base * 2.8),
            },
        ];
        Series::new(name, records, Arc::clone(&aux))
    };
    let collection = Collection::new(vec![make("Tomato", 40.0), make("Cucumber", 25.0)]);
    Explorer::new(collection, ChartConfig::default())
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("ghv_viz_{name}.svg"));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
    fs::remove_file(&path).ok();
}

#[test]
fn overview_scene_produces_a_file() {
    let explorer = sample_explorer();
    let shown = explorer.current().unwrap();
    write_and_check(
        |p| viz::render_svg(&shown, p, 1200, 640).unwrap(),
        "overview",
    );
}

#[test]
fn detail_scene_with_auxiliary_produces_a_file() {
    let mut explorer = sample_explorer();
    explorer.select_series("Cucumber").unwrap();
    let shown = explorer.toggle_auxiliary().unwrap();
    assert!(shown.detail.is_some());
    write_and_check(|p| viz::render_svg(&shown, p, 1200, 640).unwrap(), "detail");
}
