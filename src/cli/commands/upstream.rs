use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;
use url::Url;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_UPSTREAM_TIMEOUT: &str = "upstream-timeout";

#[derive(Debug, Clone)]
pub struct Options {
    pub api_url: String,
    pub timeout: Duration,
}

impl Options {
    /// Read the upstream options from validated matches.
    ///
    /// # Errors
    /// Returns an error if `--api-url` is missing or not an absolute http(s) URL.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let api_url = matches
            .get_one::<String>(ARG_API_URL)
            .cloned()
            .context("missing required argument: --api-url")?;

        let parsed = Url::parse(&api_url).with_context(|| format!("invalid --api-url: {api_url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("unsupported --api-url scheme: {}", parsed.scheme());
        }

        let timeout = matches
            .get_one::<u64>(ARG_UPSTREAM_TIMEOUT)
            .copied()
            .unwrap_or(10);

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the upstream events API, example: http://localhost:1337")
                .env("DJEVENTS_API_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_UPSTREAM_TIMEOUT)
                .long(ARG_UPSTREAM_TIMEOUT)
                .help("Upstream request timeout in seconds")
                .env("DJEVENTS_UPSTREAM_TIMEOUT")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Command {
        with_args(Command::new("djevents"))
    }

    #[test]
    fn parse_reads_url_and_timeout() -> Result<()> {
        let matches = command().try_get_matches_from([
            "djevents",
            "--api-url",
            "http://localhost:1337",
            "--upstream-timeout",
            "3",
        ])?;
        let options = Options::parse(&matches)?;
        assert_eq!(options.api_url, "http://localhost:1337");
        assert_eq!(options.timeout, Duration::from_secs(3));
        Ok(())
    }

    #[test]
    fn parse_rejects_non_http_scheme() -> Result<()> {
        let matches =
            command().try_get_matches_from(["djevents", "--api-url", "ftp://files.example"])?;
        assert!(Options::parse(&matches).is_err());
        Ok(())
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = command().try_get_matches_from([
            "djevents",
            "--api-url",
            "http://localhost:1337",
            "--upstream-timeout",
            "0",
        ]);
        assert!(result.is_err());
    }
}
