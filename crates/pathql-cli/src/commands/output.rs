use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output_or_exit(path: Option<&Path>, text: &str) {
    let result = match path {
        Some(path) => fs::write(path, text)
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e)),
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .or_else(|e| match e.kind() {
                io::ErrorKind::BrokenPipe => Ok(()),
                _ => Err(e),
            })
            .map_err(|e| format!("cannot write output: {}", e)),
    };

    if let Err(msg) = result {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}
