use std::io::{Read, Write};
use std::path::PathBuf;

use crate::domain::entities::transaction::RawTransaction;
use crate::domain::ports::source::{RecordSource, SourceError};

/// Header written by [`write_csv`] and the first alias of each column
pub const CSV_HEADER: [&str; 4] = ["Transaction ID", "Region", "Response Time", "Status"];

const ID_ALIASES: &[&str] = &["transaction id", "transaction_id", "txn_id", "id"];
const REGION_ALIASES: &[&str] = &["region"];
const TIME_ALIASES: &[&str] = &["response time", "response_time", "response time (ms)"];
const STATUS_ALIASES: &[&str] = &["status"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    id: usize,
    region: usize,
    response_time: usize,
    status: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, SourceError> {
        let find = |aliases: &[&str], label: &str| {
            headers
                .iter()
                .position(|h| {
                    let h = h.trim().to_ascii_lowercase();
                    aliases.iter().any(|a| *a == h)
                })
                .ok_or_else(|| SourceError::InvalidFormat(format!("missing '{label}' column")))
        };
        Ok(Self {
            id: find(ID_ALIASES, "Transaction ID")?,
            region: find(REGION_ALIASES, "Region")?,
            response_time: find(TIME_ALIASES, "Response Time")?,
            status: find(STATUS_ALIASES, "Status")?,
        })
    }
}

/// Parses a headered CSV stream into raw rows.
///
/// Rows shorter than the header are kept with missing fields, and rows the
/// decoder rejects (e.g. invalid UTF-8) carry the decoder's message, so that
/// validation can reject them individually.
///
/// # Errors
///
/// Returns `SourceError::InvalidFormat` if the header cannot be read or a
/// required column is missing.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawTransaction>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| SourceError::InvalidFormat(format!("unreadable header: {e}")))?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let field = |record: &csv::StringRecord, idx: usize| record.get(idx).map(str::to_string);

    let mut rows = Vec::new();
    for result in rdr.records() {
        match result {
            Ok(record) => rows.push(RawTransaction {
                transaction_id: field(&record, columns.id),
                region: field(&record, columns.region),
                response_time: field(&record, columns.response_time),
                status: field(&record, columns.status),
                read_error: None,
            }),
            Err(e) => {
                tracing::warn!("Unreadable CSV row: {e}");
                rows.push(RawTransaction::unreadable(e.to_string()));
            }
        }
    }
    Ok(rows)
}

/// Writes raw rows as CSV with the standard header.
///
/// # Errors
///
/// Returns `csv::Error` if writing to `writer` fails.
pub fn write_csv<W: Write>(rows: &[RawTransaction], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record([
            row.transaction_id.as_deref().unwrap_or_default(),
            row.region.as_deref().unwrap_or_default(),
            row.response_time.as_deref().unwrap_or_default(),
            row.status.as_deref().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Loads transactions from a CSV file on disk (tilde-expanded path)
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    #[must_use]
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self {
            path: PathBuf::from(expanded.as_ref()),
        }
    }
}

impl RecordSource for CsvSource {
    fn load(&self) -> Result<Vec<RawTransaction>, SourceError> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            SourceError::Unavailable(format!("cannot open {}: {e}", self.path.display()))
        })?;
        let rows = parse_csv(file)?;
        tracing::debug!("Loaded {} row(s) from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("csv ({})", self.path.display())
    }
}
