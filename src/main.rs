use eayun_neutron::{
    cli::execute_command,
    commands::{create_cli_commands, PARAMETER_VERBOSE},
    error_utils::report_error,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = create_cli_commands();

    // Intialize the logging subsystem; RUST_LOG always wins over --verbose
    let filter = if matches.get_flag(PARAMETER_VERBOSE) {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::DEBUG.into())
            .from_env_lossy()
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Parse and execute the CLI command
    match execute_command(&matches).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end_matches('\n'));
            }
        }
        Err(e) => {
            report_error(&e);
            ::std::process::exit(e.exit_code().code());
        }
    }
}
