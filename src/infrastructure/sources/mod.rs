pub mod csv_source;
pub mod synthetic;

use crate::domain::ports::source::RecordSource;

pub use csv_source::CsvSource;
pub use synthetic::SyntheticSource;

/// Picks the CSV source when a path is given, the synthetic generator otherwise.
#[must_use]
pub fn create_source(
    csv_path: Option<&str>,
    synthetic_count: usize,
    region_count: usize,
    failure_rate: f64,
) -> Box<dyn RecordSource> {
    match csv_path {
        Some(path) => Box::new(CsvSource::new(path)),
        None => Box::new(SyntheticSource::new(
            synthetic_count,
            region_count,
            failure_rate,
        )),
    }
}
