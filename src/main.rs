use std::{env, fs::read_to_string};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use trial_sequences::{
    run_trials,
    config::TrialSettings,
    display::TerminalHistogram,
    error::TrialError,
    logging::init_logging,
};


fn main() -> Result<(), TrialError> {
    let args: Vec<String> = env::args().collect();

    // optional .toml file overriding the defaults
    let settings = match args.get(1) {
        Some(path) => TrialSettings::from_toml_str(&read_to_string(path)?)?,
        None => TrialSettings::default(),
    };

    init_logging(settings.verbosity);
    debug!("{:#?}", settings);

    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    let mut display = TerminalHistogram::stdio();

    run_trials(&settings, &mut rng, &mut display)?;

    Ok(())
}
