use hello::utils::logger;
use hello::{CliConfig, EntryPoint};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger();

    let _config = CliConfig::parse_lenient();
    tracing::debug!(
        "ignoring {} argument(s)",
        std::env::args_os().len().saturating_sub(1)
    );

    let stdout = std::io::stdout();
    let mut entry = EntryPoint::new(stdout.lock());
    let outcome = entry.run();

    tracing::debug!("wrote {} bytes", outcome.bytes_written);
    ExitCode::from(outcome.exit_code)
}
