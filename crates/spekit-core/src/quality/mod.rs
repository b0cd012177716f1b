pub mod report;
pub mod snr;

pub use report::{aggregate_directory, SnrRecord, SnrReport};
pub use snr::{snr, snr_array};
