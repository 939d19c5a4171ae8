#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use trial_sequences::{
        distribution::{bounded_normal_sample, bounded_normal_samples},
        error::DistributionError,
    };


    #[test]
    pub fn test_samples_within_bounds() -> Result<(), DistributionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        for (min, max, samples, mean, std) in [
            (3., 7., 250, 5.0, 2.0_f64.sqrt()),
            (-10., 10., 1000, 0., 25.),
            (0., 1., 500, 100., 1.),
            (0., 1., 500, -100., 1.),
            (2., 2., 10, 0., 5.),
        ] {
            let output = bounded_normal_samples(&mut rng, min, max, samples, mean, std)?;

            assert_eq!(output.len(), samples);
            assert!(output.iter().all(|i| *i >= min && *i <= max));
        }

        Ok(())
    }

    #[test]
    pub fn test_samples_are_integers() -> Result<(), DistributionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let output = bounded_normal_samples(&mut rng, -50., 50., 500, 0.3, 10.)?;

        assert!(output.iter().all(|i| i.fract() == 0.));

        Ok(())
    }

    #[test]
    pub fn test_zero_samples() -> Result<(), DistributionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let output = bounded_normal_samples(&mut rng, 3., 7., 0, 5., 1.)?;

        assert!(output.is_empty());

        Ok(())
    }

    #[test]
    pub fn test_same_seed_same_samples() -> Result<(), DistributionError> {
        let mut first_rng = ChaCha8Rng::seed_from_u64(123);
        let mut second_rng = ChaCha8Rng::seed_from_u64(123);

        let first = bounded_normal_samples(&mut first_rng, 3., 7., 250, 5.0, 2.0_f64.sqrt())?;
        let second = bounded_normal_samples(&mut second_rng, 3., 7., 250, 5.0, 2.0_f64.sqrt())?;

        assert_eq!(first.len(), second.len());
        assert_eq!(
            first.iter().map(|i| i.to_bits()).collect::<Vec<u64>>(),
            second.iter().map(|i| i.to_bits()).collect::<Vec<u64>>(),
        );

        Ok(())
    }

    #[test]
    pub fn test_clamping_dominates() -> Result<(), DistributionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for (mean, std) in [(0., 1.), (5., 0.), (-1000., 30.), (1000., 1000.)] {
            let output = bounded_normal_samples(&mut rng, 4., 4., 1, mean, std)?;

            assert_eq!(output.to_vec(), vec![4.]);
        }

        Ok(())
    }

    #[test]
    pub fn test_zero_std_rounds_mean() -> Result<(), DistributionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let output = bounded_normal_samples(&mut rng, 0., 10., 20, 4.6, 0.)?;
        assert!(output.iter().all(|i| *i == 5.));

        // ties go to the even integer
        let output = bounded_normal_samples(&mut rng, 0., 10., 20, 2.5, 0.)?;
        assert!(output.iter().all(|i| *i == 2.));

        let output = bounded_normal_samples(&mut rng, 0., 10., 20, 3.5, 0.)?;
        assert!(output.iter().all(|i| *i == 4.));

        Ok(())
    }

    #[test]
    pub fn test_negative_std_is_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        assert!(matches!(
            bounded_normal_samples(&mut rng, 3., 7., 10, 5., -1.),
            Err(DistributionError::InvalidStandardDeviation(_)),
        ));
        assert!(bounded_normal_samples(&mut rng, 3., 7., 10, 5., f64::NAN).is_err());
        assert!(bounded_normal_sample(&mut rng, 3., 7., 5., -0.5).is_err());
    }

    #[test]
    pub fn test_invalid_std_draws_nothing() -> Result<(), DistributionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut fresh_rng = ChaCha8Rng::seed_from_u64(8);

        let result = bounded_normal_samples(&mut rng, 3., 7., 5, 5., -1.);
        assert!(matches!(result, Err(DistributionError::InvalidStandardDeviation(std)) if std == -1.));

        // the random source is untouched so the next valid draw matches a fresh one
        let after_error = bounded_normal_samples(&mut rng, 3., 7., 5, 5., 1.)?;
        let fresh = bounded_normal_samples(&mut fresh_rng, 3., 7., 5, 5., 1.)?;
        assert_eq!(after_error, fresh);

        Ok(())
    }

    #[test]
    pub fn test_single_sample_within_bounds() -> Result<(), DistributionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        for _ in 0..100 {
            let value = bounded_normal_sample(&mut rng, 3., 7., 5., 3.)?;
            assert!((3. ..=7.).contains(&value));
            assert_eq!(value.fract(), 0.);
        }

        Ok(())
    }
}
