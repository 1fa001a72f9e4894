//! Verify the correctness of every encrypted ballot in an election record
use ballot_verifier::{
    config::Config,
    verifier::{self, BallotReport},
    Result,
};
use std::process;

/// Exit status when the record itself could not be read
const EXIT_INVALID_INPUT: i32 = 2;

fn run(config: &Config) -> Result<Vec<BallotReport>> {
    if let Some(threads) = config.threads {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::warn!("keeping the default worker pool: {err}");
        }
    }

    let context = config.load_context()?;
    let limits = config.load_limits()?;
    let ballots = config.load_ballots()?;
    log::info!("verifying {} ballots", ballots.len());

    let reports = verifier::verify_ballots(&ballots, &context, &limits);
    for report in reports.iter() {
        for failure in report.failures() {
            log::warn!("{failure}");
        }
        if report.is_valid() {
            log::info!("{}", report.summary());
        } else {
            log::warn!("{}", report.summary());
        }
    }
    return Ok(reports);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(EXIT_INVALID_INPUT);
        }
    };

    match run(&config) {
        Ok(reports) => {
            let failed = reports.iter().filter(|report| !report.is_valid()).count();
            log::info!(
                "{} of {} ballots verified",
                reports.len() - failed,
                reports.len()
            );
            if failed > 0 {
                process::exit(1);
            }
        }
        Err(err) => {
            log::error!("{err}");
            process::exit(EXIT_INVALID_INPUT);
        }
    }
}
