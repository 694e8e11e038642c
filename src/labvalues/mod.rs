pub mod fields;
pub mod report;
pub mod scan;
pub mod tiers;

pub use fields::{LabField, Tier};
pub use report::LabExtraction;
pub use scan::ScanText;
pub use tiers::{resolve_field, scan_lab_values};
