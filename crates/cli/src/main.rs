use std::path::PathBuf;
use std::process;

use clap::Parser;

use batch_blur_core::pipeline::batch_logger::ConsoleBatchLogger;
use batch_blur_core::pipeline::process_directory_use_case::ProcessDirectoryUseCase;
use batch_blur_core::shared::batch_config::BatchConfig;

/// Blurs every JPEG in a directory using a pool of workers.
///
/// Each `<name>.jpg` in SOURCE_PATH is written to DEST_PATH as
/// `<name>.jpg_blurred.jpg`.
#[derive(Parser)]
#[command(name = "batch-blur", version)]
struct Cli {
    /// Directory containing the original .jpg images.
    source_path: PathBuf,

    /// Existing directory the blurred copies are written to.
    dest_path: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = BatchConfig::default();

    let logger = Box::new(ConsoleBatchLogger::new(program_name()));
    let mut use_case = ProcessDirectoryUseCase::from_config(&config, logger);
    let report = use_case.execute(&cli.source_path, &cli.dest_path)?;
    log::info!(
        "Output written to {} ({} image(s) in {:.2}s)",
        cli.dest_path.display(),
        report.outputs.len(),
        report.elapsed.as_secs_f64()
    );
    Ok(())
}

fn program_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            PathBuf::from(arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "batch-blur".to_string())
}
