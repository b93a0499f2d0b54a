//! Exit code constants for the realestate CLI.
//!
//! - 0: Success
//! - 1: User error (unknown command, bad arguments, bad config)
//! - 2: Reserved for clap's own argument-parse errors
//! - 3: An external tool failed without reporting an exit code
//! - 4: Relayed output could not be written to stdout
//! - 127: An external tool could not be launched
//!
//! When an external tool exits with its own non-zero code, that code is
//! propagated instead, so a tool's own 2 or 127 looks the same as ours.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unknown command, wrong argument count, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Exit code clap uses when it rejects the command line.
pub const PARSE_ERROR: i32 = 2;

/// The external process failed but produced no exit code (e.g. killed by a signal).
pub const SUBPROCESS_FAILURE: i32 = 3;

/// Writing relayed output to stdout failed.
pub const OUTPUT_FAILURE: i32 = 4;

/// The external executable was not found or could not be started.
pub const LAUNCH_FAILURE: i32 = 127;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            PARSE_ERROR,
            SUBPROCESS_FAILURE,
            OUTPUT_FAILURE,
            LAUNCH_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn parse_error_matches_clap() {
        use crate::cli::Cli;
        use clap::Parser;

        let err = Cli::try_parse_from(["realestate", "--bogus-flag"]).unwrap_err();
        assert_eq!(err.exit_code(), PARSE_ERROR);
        assert_ne!(LAUNCH_FAILURE, PARSE_ERROR);
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_ne!(USER_ERROR, 0);
    }
}
