//! Thrown weapon accuracy report
//!
//! Reads the item definitions in data/items.json, keeps the `Thrown` items whose
//! id starts with `crpg_`, and prints their thrown weapon accuracy sorted from
//! most to least accurate along with the average.

pub mod models;
pub mod report;
pub mod utils;

pub use models::{Item, ReportRow, ThrownClass, WeaponEntry};
pub use report::{format_report, generate_report, ThrownReport};
