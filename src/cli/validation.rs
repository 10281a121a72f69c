use crate::cli::args::CliArgs;
use crate::runner::MAX_RESULTS_PER_PAGE;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(results) = args.results {
        if results == 0 || results > MAX_RESULTS_PER_PAGE {
            return Err(format!(
                "invalid --results '{results}', expected 1-{MAX_RESULTS_PER_PAGE}"
            ));
        }
    }
    if let Some(pages) = args.pages {
        if pages == 0 {
            return Err("invalid --pages, expected positive integer".to_string());
        }
    }
    if let Some(raw) = args.nat.as_deref() {
        crate::utils::parse_nat_csv(raw).map_err(|e| format!("invalid --nat '{raw}': {e}"))?;
    }
    if let Some(rate) = args.rate {
        if rate == 0 {
            return Err("invalid --rate, expected positive integer".to_string());
        }
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid --timeout, expected positive integer".to_string());
        }
    }
    if let Some(raw) = args.output_format.as_deref() {
        if crate::output::OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text, json, csv, or html"
            ));
        }
    }
    if args.regex && args.search.is_none() {
        return Err("--regex requires --search".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn rejects_zero_results_and_pages() {
        let args = CliArgs::parse_from(["staffdex", "-n", "0"]);
        assert!(validate(&args).is_err());
        let args = CliArgs::parse_from(["staffdex", "--pages", "0"]);
        assert!(validate(&args).is_err());
    }

    #[test]
    fn rejects_zero_rate_and_timeout() {
        let args = CliArgs::parse_from(["staffdex", "--rate", "0"]);
        assert!(validate(&args).is_err());
        let args = CliArgs::parse_from(["staffdex", "--timeout", "0"]);
        assert!(validate(&args).is_err());
        let args = CliArgs::parse_from(["staffdex", "--timeout", "10"]);
        assert!(validate(&args).is_ok());
    }

    #[test]
    fn rejects_regex_without_a_query() {
        let args = CliArgs::parse_from(["staffdex", "--regex"]);
        assert!(validate(&args).is_err());
        let args = CliArgs::parse_from(["staffdex", "--regex", "-q", "wal.h"]);
        assert!(validate(&args).is_ok());
    }

    #[test]
    fn rejects_unknown_output_format() {
        let args = CliArgs::parse_from(["staffdex", "--of", "yaml"]);
        assert!(validate(&args).is_err());
        let args = CliArgs::parse_from(["staffdex", "--of", "csv"]);
        assert!(validate(&args).is_ok());
    }
}
