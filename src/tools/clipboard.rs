//! Copying an image file to the system clipboard by shelling out to the
//! platform tool: `osascript` on macOS, `xclip` or `wl-copy` elsewhere on Unix.

use std::env;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug)]
pub enum ClipboardError {
    /// The platform has no image clipboard support at all.
    Unsupported(String),
    /// The tool ran and reported failure.
    Failed(String),
    Io(io::Error),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unsupported(why) => write!(f, "clipboard unavailable: {why}"),
            ClipboardError::Failed(why) => write!(f, "clipboard copy failed: {why}"),
            ClipboardError::Io(e) => write!(f, "clipboard I/O error: {e}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<io::Error> for ClipboardError {
    fn from(e: io::Error) -> Self {
        ClipboardError::Io(e)
    }
}

pub trait Clipboard {
    fn copy_image(&mut self, path: &Path) -> Result<(), ClipboardError>;
}

/// Clipboard backed by whatever command-line tool the host provides.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_image(&mut self, path: &Path) -> Result<(), ClipboardError> {
        if cfg!(target_os = "macos") {
            let script = format!(
                "set the clipboard to (read (POSIX file \"{}\") as «class PNGf»)",
                path.display()
            );
            return run(Command::new("osascript").arg("-e").arg(script));
        }

        if cfg!(unix) {
            if find_in_path("xclip").is_some() {
                return run(Command::new("xclip").args([
                    "-selection",
                    "clipboard",
                    "-t",
                    "image/png",
                    "-i",
                ]).arg(path));
            }
            if find_in_path("wl-copy").is_some() {
                let image = File::open(path)?;
                return run(
                    Command::new("wl-copy")
                        .args(["--type", "image/png"])
                        .stdin(Stdio::from(image)),
                );
            }
            return Err(missing_tool());
        }

        Err(ClipboardError::Unsupported(format!(
            "image clipboard not implemented on {}",
            env::consts::OS
        )))
    }
}

/// A Unix host without xclip or wl-copy. Retryable once one is installed.
fn missing_tool() -> ClipboardError {
    ClipboardError::Failed(
        "no clipboard tool found; install xclip or wl-copy and try again".into(),
    )
}

fn run(command: &mut Command) -> Result<(), ClipboardError> {
    let output = command.stdout(Stdio::null()).stderr(Stdio::piped()).output()?;
    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(ClipboardError::Failed(if stderr.is_empty() {
            output.status.to_string()
        } else {
            stderr
        }))
    }
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ClipboardError::Unsupported("no xclip".into());
        assert_eq!(e.to_string(), "clipboard unavailable: no xclip");
        let e = ClipboardError::Failed("exit status: 1".into());
        assert_eq!(e.to_string(), "clipboard copy failed: exit status: 1");
    }

    #[test]
    fn test_missing_tool_is_retryable() {
        let e = missing_tool();
        assert!(matches!(e, ClipboardError::Failed(_)));
        assert!(e.to_string().contains("install xclip or wl-copy"));
    }

    #[test]
    fn test_find_in_path_misses_nonsense() {
        assert!(find_in_path("definitely-not-a-real-clipboard-tool").is_none());
    }
}
