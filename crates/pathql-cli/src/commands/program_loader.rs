use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Program text plus where it came from, for diagnostics and graph lookup.
pub struct ProgramSource {
    pub text: String,
    /// Shown in rendered diagnostics.
    pub name: String,
    /// Set only when the program was read from a file.
    pub path: Option<PathBuf>,
}

impl ProgramSource {
    /// Directory `load("...")` should search besides the configured ones.
    pub fn base_dir(&self) -> PathBuf {
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

pub fn load_program_source(
    program_path: Option<&Path>,
    program_text: Option<&str>,
) -> Result<ProgramSource, String> {
    if let Some(text) = program_text {
        return Ok(ProgramSource {
            text: text.to_string(),
            name: "<eval>".to_string(),
            path: None,
        });
    }

    if let Some(path) = program_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("program is required: use a positional argument or -e/--eval".to_string())
}

fn load_stdin() -> Result<ProgramSource, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(ProgramSource {
        text: buf,
        name: "<stdin>".to_string(),
        path: None,
    })
}

fn load_file(path: &Path) -> Result<ProgramSource, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(ProgramSource {
        text,
        name: path.to_string_lossy().into_owned(),
        path: Some(path.to_path_buf()),
    })
}

/// Load and exit with status 1 on failure, the way every command wants it.
pub fn load_program_or_exit(
    program_path: Option<&Path>,
    program_text: Option<&str>,
) -> ProgramSource {
    match load_program_source(program_path, program_text) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}
