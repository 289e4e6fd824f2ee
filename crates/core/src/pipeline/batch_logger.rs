use std::path::Path;
use std::time::Duration;

/// Observer for batch orchestration events.
///
/// Decouples the directory use case from where its messages end up
/// (console, log crate, tests).
pub trait BatchLogger: Send {
    /// Called once before any image is dispatched.
    fn started(&mut self, workers: usize, extension: &str, source_dir: &Path);

    /// Called once per finished image, in input order.
    fn image_ready(&mut self, output: &Path);

    /// Called after every image was written.
    fn finished(&mut self, count: usize, elapsed: Duration);
}

/// Silent logger that discards all events.
pub struct NullBatchLogger;

impl BatchLogger for NullBatchLogger {
    fn started(&mut self, _workers: usize, _extension: &str, _source_dir: &Path) {}
    fn image_ready(&mut self, _output: &Path) {}
    fn finished(&mut self, _count: usize, _elapsed: Duration) {}
}

/// CLI logger: progress lines on stdout, summary through `log`.
pub struct ConsoleBatchLogger {
    program: String,
}

impl ConsoleBatchLogger {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn started_lines(&self, workers: usize, extension: &str, source_dir: &Path) -> [String; 2] {
        [
            format!("Calling {} with {workers} workers", self.program),
            format!(
                "It will process the imgs of \"{extension}\" type located in \"{}\"",
                source_dir.display()
            ),
        ]
    }

    fn ready_line(output: &Path) -> String {
        format!("Image '{}' is ready", output.display())
    }
}

impl BatchLogger for ConsoleBatchLogger {
    fn started(&mut self, workers: usize, extension: &str, source_dir: &Path) {
        for line in self.started_lines(workers, extension, source_dir) {
            println!("{line}");
        }
        println!();
    }

    fn image_ready(&mut self, output: &Path) {
        println!("{}", Self::ready_line(output));
    }

    fn finished(&mut self, count: usize, elapsed: Duration) {
        log::info!(
            "Processed {count} image(s) in {:.2}s",
            elapsed.as_secs_f64()
        );
    }
}
