use std::path::Path;

use anyhow::Context;

use crate::domain::ports::source::RecordSource;
use crate::infrastructure::sources::csv_source::write_csv;

/// Writes one generated batch as CSV to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if generation fails or the output cannot be written.
pub fn run_generate(source: &dyn RecordSource, output: Option<&Path>) -> anyhow::Result<usize> {
    let rows = source.load()?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_csv(&rows, file).context("Failed to write CSV")?;
            tracing::info!("{} transaction(s) written to {}", rows.len(), path.display());
        }
        None => {
            write_csv(&rows, std::io::stdout().lock()).context("Failed to write CSV")?;
        }
    }

    Ok(rows.len())
}
