//! Descriptive statistics and histogram binning over a generated sample set.

use ndarray::Array1;


/// Default number of bins used when rendering a histogram
pub const DEFAULT_BINS: usize = 10;

/// Count, mean and population standard deviation of a sample set,
/// mean and standard deviation are `None` when the set is empty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Population standard deviation (no degrees of freedom correction)
    pub std: Option<f64>,
}

impl SampleSummary {
    /// Summarizes the given samples
    pub fn from_samples(samples: &Array1<f64>) -> Self {
        let mean = samples.mean();
        let std = mean.map(|_| samples.std(0.));

        SampleSummary {
            count: samples.len(),
            mean,
            std,
        }
    }
}

/// A single histogram bin covering `[start, end)`, the last bin of a histogram also includes `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal width bins spanning the smallest to the largest sample
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins the samples into `num_bins` equal width bins, if every sample has the same value
    /// a single bin holds all of them, an empty set (or zero bins) produces no bins
    pub fn from_samples(samples: &Array1<f64>, num_bins: usize) -> Self {
        if samples.is_empty() || num_bins == 0 {
            return Histogram::default();
        }

        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        if max - min <= 0. {
            return Histogram {
                bins: vec![HistogramBin { start: min, end: max, count: samples.len() }],
            };
        }

        let width = (max - min) / num_bins as f64;
        let mut counts = vec![0; num_bins];
        for value in samples.iter() {
            // max lands in the last bin
            let index = (((value - min) / width) as usize).min(num_bins - 1);
            counts[index] += 1;
        }

        let bins = counts.into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: min + i as f64 * width,
                end: if i == num_bins - 1 { max } else { min + (i + 1) as f64 * width },
                count,
            })
            .collect();

        Histogram { bins }
    }

    /// Total number of samples across every bin
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Largest count of any single bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
