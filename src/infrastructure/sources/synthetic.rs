use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::transaction::RawTransaction;
use crate::domain::ports::source::{RecordSource, SourceError};

const MIN_RESPONSE_TIME: u32 = 50;
const MAX_RESPONSE_TIME: u32 = 500;
const CRITICAL_ABOVE: u32 = 350;
const WARNING_ABOVE: u32 = 200;
const MAX_REGIONS: usize = 99;

/// Generates a simulated batch of CICS-style transactions.
///
/// Ids run `TXN001`, `TXN002`...; regions are drawn from `PRDCICS01`..
/// `PRDCICSnn`. Response times are uniform in 50..500 and statuses use the
/// free-text vocabulary of the old dashboards (`Running`, `Warning`,
/// `Critical`), plus `FAILED` with probability `failure_rate`.
pub struct SyntheticSource {
    count: usize,
    region_count: usize,
    failure_rate: f64,
    seed: Option<u64>,
}

impl SyntheticSource {
    #[must_use]
    pub fn new(count: usize, region_count: usize, failure_rate: f64) -> Self {
        Self {
            count,
            region_count: region_count.clamp(1, MAX_REGIONS),
            failure_rate: if failure_rate.is_finite() {
                failure_rate.clamp(0.0, 1.0)
            } else {
                0.0
            },
            seed: None,
        }
    }

    /// Fixes the random seed so that two loads produce the same batch.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        (1..=self.region_count)
            .map(|i| format!("PRDCICS{i:02}"))
            .collect()
    }

    fn status_for(response_time: u32) -> &'static str {
        if response_time > CRITICAL_ABOVE {
            "Critical"
        } else if response_time > WARNING_ABOVE {
            "Warning"
        } else {
            "Running"
        }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new(20, 9, 0.05)
    }
}

impl RecordSource for SyntheticSource {
    fn load(&self) -> Result<Vec<RawTransaction>, SourceError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let regions = self.regions();

        let rows = (1..=self.count)
            .map(|i| {
                let region = &regions[rng.gen_range(0..regions.len())];
                let response_time = rng.gen_range(MIN_RESPONSE_TIME..MAX_RESPONSE_TIME);
                let status = if rng.gen_bool(self.failure_rate) {
                    "FAILED"
                } else {
                    Self::status_for(response_time)
                };
                RawTransaction {
                    transaction_id: Some(format!("TXN{i:03}")),
                    region: Some(region.clone()),
                    response_time: Some(response_time.to_string()),
                    status: Some(status.to_string()),
                    read_error: None,
                }
            })
            .collect();

        Ok(rows)
    }

    fn describe(&self) -> String {
        format!(
            "synthetic ({} transaction(s), {} region(s))",
            self.count, self.region_count
        )
    }
}
