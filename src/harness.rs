//! Timing harness
//!
//! Wraps a unit of work with monotonic clock readings and reports the result
//! next to the elapsed time. Every measurement runs its work exactly once;
//! there is no warm-up and no aggregation across runs.

use crate::config::AppConfig;
use crate::counter::{Forward, Triple};
use crate::error::Result;
use log::{debug, info};
use std::io::Write;
use std::time::{Duration, Instant};

/// Start and end readings of one measured interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    start: Instant,
    end: Instant,
}

impl TimingSample {
    /// Build a sample from two readings of the same monotonic clock
    #[must_use]
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// `end - start`; zero if the readings are out of order
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// Elapsed whole milliseconds (truncated)
    pub fn millis(&self) -> u128 {
        self.elapsed().as_millis()
    }

    /// Elapsed whole microseconds (truncated)
    pub fn micros(&self) -> u128 {
        self.elapsed().as_micros()
    }
}

/// Run `work` once between two clock readings
pub fn measure<T, F>(work: F) -> (T, TimingSample)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = work();
    let end = Instant::now();
    (result, TimingSample::new(start, end))
}

/// One reported block: what ran, what it returned, how long it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub run: usize,
    pub label: &'static str,
    pub result: Triple,
    pub sample: TimingSample,
}

impl Measurement {
    /// Write the triple followed by millisecond and microsecond lines
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.result)?;
        writeln!(
            out,
            "Time taken ({}) (ms): {}",
            self.label,
            self.sample.millis()
        )?;
        writeln!(
            out,
            "Time taken ({}) (usec): {}",
            self.label,
            self.sample.micros()
        )?;
        Ok(())
    }
}

/// Measure one `forward` call of `model` for bound `n`
pub fn measure_forward(model: &dyn Forward, n: i64, run: usize) -> Measurement {
    let (result, sample) = measure(|| model.forward(n));
    Measurement {
        run,
        label: model.label(),
        result,
        sample,
    }
}

/// Drives every configured variant for every run
pub struct Harness<'a> {
    config: &'a AppConfig,
}

impl<'a> Harness<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Measure and report each variant once per run, in configured order
    ///
    /// With more than one run, each run is introduced by a `Run: <i>` header.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Measurement>> {
        let runs = self.config.runs();
        let n = self.config.count();
        info!(
            "measuring {} variant(s) over {runs} run(s), n = {n}",
            self.config.variants().len()
        );

        let mut measurements = Vec::with_capacity(runs * self.config.variants().len());
        for run in 0..runs {
            if runs > 1 {
                writeln!(out, "\n\nRun: {run}")?;
                writeln!(out, "{}", "=".repeat(41))?;
            }

            for variant in self.config.variants() {
                let measurement = measure_forward(variant, n, run);
                debug!(
                    "run {}: {} -> {} in {:?}",
                    measurement.run,
                    measurement.label,
                    measurement.result,
                    measurement.sample.elapsed()
                );
                measurement.write_report(out)?;
                measurements.push(measurement);
            }
        }

        out.flush()?;
        info!("finished {} measurement(s)", measurements.len());
        Ok(measurements)
    }
}
