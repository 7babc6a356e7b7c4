// src/cli.rs

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "elog - Append an execution record to execution_log.csv",
    long_about = "elog prints a greeting, then appends the current local timestamp and a completion flag to execution_log.csv in the working directory. The header row is written only when the file is created."
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["elog"]).is_ok());
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["elog", "--file", "other.csv"]).is_err());
        assert!(Cli::try_parse_from(["elog", "extra"]).is_err());
    }
}
