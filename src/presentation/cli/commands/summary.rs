use crate::application::services::pipeline::BatchPipeline;
use crate::domain::entities::summary::summary_total;
use crate::presentation::cli::formatters::status_fmt::print_section_header;
use crate::presentation::cli::formatters::summary_fmt::format_region_summary;

/// Prints the per-region summary of one batch.
///
/// # Errors
///
/// Returns an error if the batch fails or JSON serialization fails.
pub fn run_summary(pipeline: &BatchPipeline<'_>, json: bool) -> anyhow::Result<()> {
    let report = pipeline.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.summary)?);
        return Ok(());
    }

    print_section_header(&format!("📊 Region summary: {}", report.source));
    println!("{}", format_region_summary(&report.summary));
    println!();
    println!(
        "{} transaction(s) classified, {} region(s), {} row(s) skipped",
        summary_total(&report.summary),
        report.summary.len(),
        report.rejected.len()
    );
    Ok(())
}
