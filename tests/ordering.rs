use ghv_rs::collection::Collection;
use ghv_rs::models::{Dimension, Record};
use ghv_rs::series::Series;
use std::sync::Arc;

fn series(name: &str, first_amount: Option<f64>, first_companies: Option<f64>) -> Series {
    let records = vec![
        Record {
            year: 2014,
            amount: first_amount,
            companies: first_companies,
            area: None,
        },
        Record {
            year: 2015,
            amount: Some(1.0),
            companies: Some(1.0),
            area: None,
        },
    ];
    Series::new(name, records, Arc::new(Vec::new()))
}

fn order(collection: &Collection) -> Vec<&str> {
    collection.series().iter().map(|s| s.name()).collect()
}

#[test]
fn sorts_descending_by_first_year_value() {
    let mut c = Collection::new(vec![
        series("small", Some(3.0), None),
        series("big", Some(40.0), None),
        series("mid", Some(12.0), None),
    ]);
    c.sort_by_dimension(Dimension::Amount);
    assert_eq!(order(&c), ["big", "mid", "small"]);
}

#[test]
fn ties_keep_prior_relative_order() {
    let mut c = Collection::new(vec![
        series("first", Some(5.0), None),
        series("second", Some(5.0), None),
        series("third", Some(5.0), None),
    ]);
    c.sort_by_dimension(Dimension::Amount);
    assert_eq!(order(&c), ["first", "second", "third"]);
}

#[test]
fn sorting_twice_by_the_same_dimension_is_stable() {
    let mut c = Collection::new(vec![
        series("a", Some(9.0), None),
        series("b", Some(9.0), None),
        series("c", Some(2.0), None),
    ]);
    c.sort_by_dimension(Dimension::Amount);
    let once = order(&c).into_iter().map(String::from).collect::<Vec<_>>();
    c.sort_by_dimension(Dimension::Amount);
    assert_eq!(order(&c), once);
}

#[test]
fn a_then_b_then_a_restores_the_original_a_ordering() {
    // amount order: y, x, z — companies order: z, x, y
    let mut c = Collection::new(vec![
        series("x", Some(10.0), Some(20.0)),
        series("y", Some(30.0), Some(5.0)),
        series("z", Some(1.0), Some(50.0)),
    ]);
    c.sort_by_dimension(Dimension::Amount);
    let by_amount = order(&c).into_iter().map(String::from).collect::<Vec<_>>();
    assert_eq!(by_amount, ["y", "x", "z"]);

    c.sort_by_dimension(Dimension::Companies);
    assert_eq!(order(&c), ["z", "x", "y"]);

    c.sort_by_dimension(Dimension::Amount);
    assert_eq!(order(&c), by_amount);
}

#[test]
fn missing_first_year_value_orders_as_zero() {
    let mut c = Collection::new(vec![
        series("defined", Some(0.5), None),
        series("missing", None, None),
    ]);
    c.sort_by_dimension(Dimension::Amount);
    assert_eq!(order(&c), ["defined", "missing"]);
}
