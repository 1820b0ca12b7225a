pub mod item;
pub mod report;

pub use item::{Item, ThrownClass, WeaponEntry};
pub use report::ReportRow;
