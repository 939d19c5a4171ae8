//! Tools to generate bounded, rounded noise from a normal distribution.

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Normal, Distribution};
use crate::error::DistributionError;


fn normal(mean: f64, std: f64) -> Result<Normal<f64>, DistributionError> {
    // `Normal::new` only rejects non-finite values
    if std.is_nan() || std < 0. {
        return Err(DistributionError::InvalidStandardDeviation(std));
    }

    Normal::new(mean, std).map_err(|_| DistributionError::InvalidStandardDeviation(std))
}

fn round_and_clamp(value: f64, minimum: f64, maximum: f64) -> f64 {
    value.round_ties_even().max(minimum).min(maximum)
}

/// Draws a single value from the normal distribution at the given mean and standard deviation,
/// rounds it to the nearest integer (ties to even) and clamps it between the given minimum
/// and maximum
pub fn bounded_normal_sample<R: Rng + ?Sized>(
    rng: &mut R,
    minimum: f64,
    maximum: f64,
    mean: f64,
    std: f64,
) -> Result<f64, DistributionError> {
    let output = normal(mean, std)?.sample(rng);

    Ok(round_and_clamp(output, minimum, maximum))
}

/// Generates `samples` values from the normal distribution at the given mean and standard deviation,
/// each rounded to the nearest integer (ties to even) and clamped between `minimum` and `maximum`,
/// values are returned in draw order
///
/// - `rng` : random source to draw from, the only source of randomness so seeding it
/// makes the output reproducible
///
/// - `minimum` : lower bound of the closed output interval
///
/// - `maximum` : upper bound of the closed output interval, if it is below `minimum` every
/// value is `maximum`
///
/// - `samples` : number of values to generate
///
/// - `mean` : center of the normal distribution
///
/// - `std` : standard deviation of the normal distribution, must be finite and non-negative
pub fn bounded_normal_samples<R: Rng + ?Sized>(
    rng: &mut R,
    minimum: f64,
    maximum: f64,
    samples: usize,
    mean: f64,
    std: f64,
) -> Result<Array1<f64>, DistributionError> {
    let normal = normal(mean, std)?;

    let output: Array1<f64> = (0..samples)
        .map(|_| round_and_clamp(normal.sample(rng), minimum, maximum))
        .collect();

    Ok(output)
}
