use std::time::Duration;

use crate::application::services::cycle::run_cycle;
use crate::application::services::dispatch::AlertDispatcher;
use crate::application::services::pipeline::BatchPipeline;

/// Re-runs scan and dispatch at the configured interval.
///
/// Runs until it receives SIGINT (Ctrl+C) via [`tokio::signal::ctrl_c()`],
/// then returns `Ok(())`. SIGTERM is not handled.
///
/// A failed cycle (unreadable source, rejected empty batch) is logged and
/// the loop carries on with the next tick.
///
/// # Errors
///
/// Currently never returns an error; the signature leaves room for fatal
/// setup failures.
pub async fn run_watch(
    pipeline: &BatchPipeline<'_>,
    dispatcher: &AlertDispatcher<'_>,
    interval_secs: u64,
) -> anyhow::Result<()> {
    let interval_secs = interval_secs.max(1);
    tracing::info!("Watch started (interval: {interval_secs}s)");
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match run_cycle(pipeline, dispatcher) {
                    Ok(result) => {
                        let delivery = result.delivery();
                        tracing::info!(
                            "Cycle done: {} transaction(s), {} alert(s), {} region(s) down, {}/{} notification(s) sent",
                            result.report.classified.len(),
                            result.report.alerts.len(),
                            result.report.down_regions.len(),
                            delivery.sent,
                            delivery.attempted
                        );
                    }
                    Err(e) => {
                        tracing::error!("Watch cycle failed: {e:#}");
                    }
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                println!("\nStopping txpulse...");
                break;
            }
        }
    }
    Ok(())
}
