use clap::Parser;
use std::ffi::OsString;

#[derive(Debug, Clone, Parser)]
#[command(name = "hello")]
#[command(about = "Prints a fixed greeting")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Accepted and never inspected.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}

impl CliConfig {
    /// Never fails: every argument lands in `args`.
    pub fn parse_lenient() -> Self {
        Self::parse_lenient_from(std::env::args_os())
    }

    /// Falls back to an empty argument list when clap rejects the input
    /// (non-UTF-8 arguments).
    pub fn parse_lenient_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(itr).unwrap_or_else(|e| {
            tracing::debug!("argument parse fell back to defaults: {:?}", e.kind());
            Self { args: Vec::new() }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let config = CliConfig::try_parse_from(["hello"]).unwrap();
        assert!(config.args.is_empty());
    }

    #[test]
    fn test_positional_and_flag_like_arguments_are_captured() {
        let config =
            CliConfig::try_parse_from(["hello", "foo", "--help", "-V", "bar", "--"]).unwrap();
        assert_eq!(config.args, vec!["foo", "--help", "-V", "bar", "--"]);
    }

    #[test]
    fn test_leading_flag_is_captured() {
        let config = CliConfig::try_parse_from(["hello", "--verbose", "x"]).unwrap();
        assert_eq!(config.args, vec!["--verbose", "x"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_falls_back_to_empty() {
        use std::os::unix::ffi::OsStringExt;

        let argv = [OsString::from("hello"), OsString::from_vec(vec![0xff, 0xfe])];
        assert!(CliConfig::try_parse_from(argv.clone()).is_err());

        let config = CliConfig::parse_lenient_from(argv);
        assert!(config.args.is_empty());
    }
}
