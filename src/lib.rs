//! # Trial Sequences
//!
//! `trial_sequences` generates synthetic trial values: integers drawn from a
//! normal distribution, rounded and clamped into a closed interval. A run
//! summarizes the generated set (count, mean and population standard deviation),
//! optionally shows a histogram of it and writes the first value to a JSON file
//! under the key `num`.
//!
//! Randomness is never global, every function that draws values takes the
//! random source as an argument so seeding it is all that is needed for
//! reproducible output.
//!
//! ## Example Code
//!
//! ### Generating a bounded set of samples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use trial_sequences::distribution::bounded_normal_samples;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(123);
//! let samples = bounded_normal_samples(&mut rng, 3., 7., 250, 5.0, 2.0_f64.sqrt()).unwrap();
//!
//! assert_eq!(samples.len(), 250);
//! assert!(samples.iter().all(|i| (3. ..=7.).contains(i) && i.fract() == 0.));
//! ```
//!
//! ### Running the full trial generation without a display
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use trial_sequences::{run_trials, config::TrialSettings, display::NoDisplay};
//!
//! let settings = TrialSettings::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
//!
//! let outcome = run_trials(&settings, &mut rng, &mut NoDisplay).unwrap();
//! println!("first trial value: {}", outcome.record.num);
//! ```

use ndarray::Array1;
use rand::Rng;
use tracing::{debug, info};

pub mod config;
pub mod display;
pub mod distribution;
pub mod error;
pub mod logging;
pub mod output;
pub mod statistics;

use crate::{
    config::TrialSettings,
    display::HistogramDisplay,
    distribution::bounded_normal_samples,
    error::TrialError,
    output::{dump_json, TrialRecord},
    statistics::{Histogram, SampleSummary, DEFAULT_BINS},
};


/// Everything produced by a single run
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    /// Generated values in draw order
    pub samples: Array1<f64>,
    /// Summary statistics of the samples
    pub summary: SampleSummary,
    /// Record that was written to disk
    pub record: TrialRecord,
}

fn format_statistic(value: Option<f64>) -> String {
    format!("{:.6}", value.unwrap_or(f64::NAN))
}

/// Generates samples using the given settings, logs their summary, shows a histogram
/// through `display` when verbosity is at its most detailed level and writes the first
/// sample to `settings.output`
///
/// - `settings` : sampler parameters, output path and verbosity
///
/// - `rng` : random source, seed it beforehand for reproducible runs (`settings.seed` is not
/// applied here)
///
/// - `display` : how to show the histogram, only called at [`logging::Verbosity::Debug`]
pub fn run_trials<R: Rng + ?Sized, D: HistogramDisplay + ?Sized>(
    settings: &TrialSettings,
    rng: &mut R,
    display: &mut D,
) -> Result<TrialOutcome, TrialError> {
    let samples = bounded_normal_samples(
        rng,
        settings.min,
        settings.max,
        settings.samples,
        settings.mean,
        settings.std,
    )?;

    let summary = SampleSummary::from_samples(&samples);
    info!("n: {}", summary.count);
    info!("Mean: {}", format_statistic(summary.mean));
    info!("Standard deviation: {}", format_statistic(summary.std));

    if settings.verbosity.is_detailed() {
        let histogram = Histogram::from_samples(&samples, DEFAULT_BINS);
        display.show(&histogram)?;
    }

    let first = samples.get(0).copied().ok_or(TrialError::EmptySampleSet)?;
    let record = TrialRecord { num: first };

    dump_json(&settings.output, &record)?;
    debug!("wrote {:?} to {}", record, settings.output.display());

    Ok(TrialOutcome { samples, summary, record })
}
