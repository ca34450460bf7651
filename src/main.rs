use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wadscale::bootstrap::run;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args().skip(1)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("wadscale error: {e:#}");
            ExitCode::from(1)
        }
    }
}
