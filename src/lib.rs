//! ghv-rs
//!
//! A lightweight Rust library for exploring Finnish greenhouse crop
//! statistics: a layered overview chart of every crop series plus a
//! detail view comparing one selected series against yearly mean
//! temperatures. Pairs with the `ghv` CLI.
//!
//! ### Features
//! - Load the greenhouse crop CSV export and the temperature series
//! - Per-series and combined extents over partially-missing values
//! - Pixel scales for both chart surfaces (power-law amount axis)
//! - Overview/detail view-state machine emitting render instructions
//! - Reference SVG drawing surface built on plotters
//!
//! ### Example
//! ```no_run
//! use ghv_rs::{ChartConfig, Collection, Dimension, Explorer};
//! use std::sync::Arc;
//!
//! let config = ChartConfig::default();
//! let aux = Arc::new(ghv_rs::data::load_auxiliary("data/temps.csv", config.years)?);
//! let series = ghv_rs::data::load_series("data/vegetables_greenhouse.csv", aux)?;
//! let mut explorer = Explorer::new(Collection::new(series), config);
//! let shown = explorer.select_dimension(Dimension::Area)?;
//! ghv_rs::viz::render_svg(&shown, "overview.svg", 1200, 640)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod collection;
pub mod data;
pub mod error;
pub mod models;
pub mod render;
pub mod scale;
pub mod series;
pub mod view;
pub mod viz;

pub use collection::{Collection, CombinedExtents};
pub use error::Error;
pub use models::{AuxPoint, ChartConfig, Dimension, Record, YearRange};
pub use render::RenderInstruction;
pub use series::{Series, SeriesExtents};
pub use view::{Explorer, ViewState};
