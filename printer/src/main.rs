mod cli;
mod present;

use std::process::ExitCode;

use clap::Parser;
use cli::{Args, Mode};
use fetcher::Locator;
use present::Outcome;

fn main() -> ExitCode {
    let args = Args::parse();
    common::logging::init(&args.log_level);

    match run(&args) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<Outcome> {
    let config = args.config()?;
    log::debug!("{:?}", config);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let outcome = match args.mode() {
        Mode::SelfTest => present::self_test(&mut out, &mut err)?,
        Mode::Default => {
            let fetched = fetcher::fetch(&Locator::Url(config.url.clone()), &config);
            present::present_default(fetched, &config, &mut out, &mut err)?
        }
        Mode::Source(locator) => {
            let fetched = fetcher::fetch(&locator, &config);
            present::present_source(&locator, fetched, &mut out, &mut err)?
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    use common::config::Config;

    macro_rules! test_decode {
        ($path:expr) => {{
            let locator = Locator::resolve(concat!(env!("CARGO_MANIFEST_DIR"), "/../", $path));
            let text = fetcher::fetch(&locator, &Config::default()).expect("Could not read input");
            model::render(&text)
        }};
    }

    #[test]
    fn test_hello_world() {
        assert_eq!("HELLO\nWORLD", test_decode!("inputs/hello_world.txt"));
    }

    #[test]
    fn test_noisy() {
        assert_eq!("SEC T", test_decode!("inputs/noisy.txt"));
    }

    #[test]
    fn test_blocks() {
        assert_eq!("█▀▀█\n█  █\n█  █", test_decode!("inputs/blocks.txt"));
    }

    #[test]
    fn test_self_test_mode() {
        let args = Args::try_parse_from(["secret-message", "--test"]).unwrap();
        assert!(matches!(run(&args), Ok(Outcome::SelfTestPassed)));
    }
}
