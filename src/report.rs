use std::io::{self, Write};

use crate::avalanche::{self, AvalancheReport, AvalancheSummary};
use crate::collision::CollisionReport;
use crate::distribution::DistributionReport;
use crate::harness::Reporter;
use crate::sample::Sample;
use crate::throughput::ThroughputReport;

/// Widest histogram bar, in characters
const BAR_WIDTH: u64 = 40;

/// Plain-text reporter writing each section to `W`
///
/// Hash values, bit counts and collision counts are printed in full;
/// durations with microsecond precision.
pub struct TextReporter<W: Write> {
    out: W,
    histogram_bins: Option<usize>,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            histogram_bins: None,
        }
    }

    /// Also render the distribution as an ASCII histogram with `bins` bars
    pub fn with_histogram(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n--- {} ---", title)
    }

    fn histogram(&mut self, report: &DistributionReport, bins: usize) -> io::Result<()> {
        let counts = report
            .histogram(bins)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let tallest = counts.iter().copied().max().unwrap_or(0).max(1);
        let n = report.buckets().len();

        writeln!(self.out, "Histogram of hash % {} ({} bins):", n, bins)?;
        for (bin, &count) in counts.iter().enumerate() {
            let bar = (count * BAR_WIDTH + tallest - 1) / tallest;
            writeln!(
                self.out,
                "{:>8} | {:<width$} {}",
                bin * n / bins,
                "#".repeat(bar as usize),
                count,
                width = BAR_WIDTH as usize
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn probes(&mut self, samples: &[Sample]) -> io::Result<()> {
        self.header("Testing Hash Function Outputs")?;
        for sample in samples {
            writeln!(self.out, "Hash of '{}': {}", sample.input, sample.hash)?;
        }
        Ok(())
    }

    fn distribution(&mut self, report: &DistributionReport) -> io::Result<()> {
        self.header("Running Uniform Distribution Test")?;
        writeln!(
            self.out,
            "Samples: {} / Buckets: {}",
            report.samples(),
            report.buckets().len()
        )?;
        writeln!(self.out, "Empty buckets: {}", report.empty_buckets())?;
        writeln!(
            self.out,
            "Bucket load: min {}, max {}, mean {:.3}, std dev {:.3}",
            report.min_load(),
            report.max_load(),
            report.mean_load(),
            report.std_dev()
        )?;
        writeln!(self.out, "Chi-square: {:.3}", report.chi_square())?;

        if let Some(bins) = self.histogram_bins {
            self.histogram(report, bins)?;
        }
        Ok(())
    }

    fn collisions(&mut self, report: &CollisionReport) -> io::Result<()> {
        self.header("Running Collision Test")?;
        writeln!(
            self.out,
            "Collisions: {} / {}",
            report.collisions, report.samples
        )
    }

    fn avalanche(&mut self, report: &AvalancheReport) -> io::Result<()> {
        self.header("Running Avalanche Effect Test")?;
        writeln!(self.out, "Original String:  '{}'", report.original)?;
        writeln!(self.out, "Modified String:  '{}'", report.modified)?;
        writeln!(self.out, "Hash 1: {}", report.original_hash)?;
        writeln!(self.out, "Hash 2: {}", report.modified_hash)?;
        writeln!(
            self.out,
            "Bitwise Difference: {} bits changed",
            report.bit_difference
        )
    }

    fn avalanche_sweep(&mut self, summary: &AvalancheSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "Sweep over {} random inputs: min {}, max {}, mean {:.3} bits changed",
            summary.trials, summary.min, summary.max, summary.mean
        )
    }

    fn inapplicable(&mut self, err: &avalanche::Error) -> io::Result<()> {
        writeln!(self.out, "Avalanche test skipped: {}", err)
    }

    fn throughput(&mut self, report: &ThroughputReport) -> io::Result<()> {
        self.header("Running Speed Test")?;
        writeln!(
            self.out,
            "Time taken for {} hashes: {:.6} seconds ({:.0} hashes/s)",
            report.samples,
            report.elapsed.as_secs_f64(),
            report.hashes_per_sec()
        )
    }
}
