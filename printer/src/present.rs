//! Turns fetch results into output and exit codes

use std::{io::Write, process::ExitCode};

use common::{
    config::Config,
    constants::{SAMPLE, SAMPLE_EXPECT},
};
use fetcher::{FetchError, Locator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    SelfTestPassed,
    SelfTestFailed,
    FetchFailed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Printed | Outcome::SelfTestPassed => ExitCode::SUCCESS,
            Outcome::SelfTestFailed => ExitCode::from(1),
            Outcome::FetchFailed => ExitCode::from(2),
        }
    }
}

/// Prints the configured document, or the offline sample if it could not be
/// fetched and the config allows it
pub fn present_default(
    fetched: Result<String, FetchError>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<Outcome> {
    match fetched {
        Ok(text) => {
            writeln!(out, "{}", model::render(&text))?;
            Ok(Outcome::Printed)
        }
        Err(e) if config.fallback_to_sample => {
            log::warn!("falling back to offline sample: {}", e);
            writeln!(err, "network fetch failed: {}\nUsing offline sample instead:\n", e)?;
            writeln!(out, "{}", model::render(SAMPLE))?;
            Ok(Outcome::Printed)
        }
        Err(e) => present_failure(&config.url, &e, err),
    }
}

/// Prints the document read from an explicit source
pub fn present_source(
    locator: &Locator,
    fetched: Result<String, FetchError>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<Outcome> {
    match fetched {
        Ok(text) => {
            writeln!(out, "{}", model::render(&text))?;
            Ok(Outcome::Printed)
        }
        Err(e) => present_failure(&locator.to_string(), &e, err),
    }
}

fn present_failure(
    source: &str,
    e: &FetchError,
    err: &mut dyn Write,
) -> std::io::Result<Outcome> {
    writeln!(err, "Error fetching/decoding '{}': {}", source, e)?;
    Ok(Outcome::FetchFailed)
}

/// Renders the offline sample and compares it with the known message
pub fn self_test(out: &mut dyn Write, err: &mut dyn Write) -> std::io::Result<Outcome> {
    let rendered = model::render(SAMPLE);
    if rendered == SAMPLE_EXPECT {
        writeln!(out, "self-test passed")?;
        Ok(Outcome::SelfTestPassed)
    } else {
        writeln!(
            err,
            "self-test failed: {:?} != {:?}",
            rendered, SAMPLE_EXPECT
        )?;
        Ok(Outcome::SelfTestFailed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use model::input::InputError;

    use super::*;

    fn missing_file() -> FetchError {
        FetchError::Input(InputError::File {
            path: PathBuf::from("gone.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    fn run(
        present: impl FnOnce(&mut dyn Write, &mut dyn Write) -> std::io::Result<Outcome>,
    ) -> (Outcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = present(&mut out, &mut err).unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn default_prints_fetched_document() {
        let config = Config::default();
        let (outcome, out, err) =
            run(|out, err| present_default(Ok(String::from("A 0 0\nB 1 0")), &config, out, err));

        assert_eq!(Outcome::Printed, outcome);
        assert_eq!("AB\n", out);
        assert!(err.is_empty());
    }

    #[test]
    fn default_falls_back_to_sample() {
        let config = Config::default();
        let (outcome, out, err) =
            run(|out, err| present_default(Err(missing_file()), &config, out, err));

        assert_eq!(Outcome::Printed, outcome);
        assert_eq!("HELLO\nWORLD\n", out);
        assert!(err.starts_with("network fetch failed: "));
        assert!(err.contains("Using offline sample instead:"));
    }

    #[test]
    fn default_without_fallback_fails() {
        let config = Config {
            fallback_to_sample: false,
            ..Config::default()
        };
        let (outcome, out, err) =
            run(|out, err| present_default(Err(missing_file()), &config, out, err));

        assert_eq!(Outcome::FetchFailed, outcome);
        assert!(out.is_empty());
        assert!(err.starts_with(&format!("Error fetching/decoding '{}'", config.url)));
    }

    #[test]
    fn source_prints_document() {
        let locator = Locator::Sample;
        let fetched = fetcher::fetch(&locator, &Config::default());
        let (outcome, out, _) = run(|out, err| present_source(&locator, fetched, out, err));

        assert_eq!(Outcome::Printed, outcome);
        assert_eq!("HELLO\nWORLD\n", out);
    }

    #[test]
    fn source_without_entries_prints_empty_line() {
        let locator = Locator::Stdin;
        let (outcome, out, _) = run(|out, err| {
            present_source(&locator, Ok(String::from("nothing here")), out, err)
        });

        assert_eq!(Outcome::Printed, outcome);
        assert_eq!("\n", out);
    }

    #[test]
    fn source_failure_names_source() {
        let locator = Locator::Url(String::from("https://example.invalid/doc"));
        let (outcome, out, err) =
            run(|out, err| present_source(&locator, Err(missing_file()), out, err));

        assert_eq!(Outcome::FetchFailed, outcome);
        assert!(out.is_empty());
        assert!(err.starts_with("Error fetching/decoding 'https://example.invalid/doc': "));
    }

    #[test]
    fn self_test_passes() {
        let (outcome, out, err) = run(self_test);

        assert_eq!(Outcome::SelfTestPassed, outcome);
        assert_eq!("self-test passed\n", out);
        assert!(err.is_empty());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(ExitCode::SUCCESS, Outcome::Printed.exit_code());
        assert_eq!(ExitCode::SUCCESS, Outcome::SelfTestPassed.exit_code());
        assert_eq!(ExitCode::from(1), Outcome::SelfTestFailed.exit_code());
        assert_eq!(ExitCode::from(2), Outcome::FetchFailed.exit_code());
    }
}
