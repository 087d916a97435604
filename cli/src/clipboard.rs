//! Clipboard access through platform clipboard programs.
//!
//! No clipboard library is linked; instead the first known clipboard program
//! found on `PATH` is used, receiving the text on stdin. When none is found
//! the capability is simply absent.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

/// Which display server variables are set in the environment.
#[derive(Debug, Clone, Copy, Default)]
struct Session {
    wayland: bool,
    x11: bool,
}

impl Session {
    fn from_env() -> Self {
        Self {
            wayland: env::var_os("WAYLAND_DISPLAY").is_some(),
            x11: env::var_os("DISPLAY").is_some(),
        }
    }
}

/// Known clipboard programs, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
    ClipExe,
}

impl Backend {
    const ALL: [Backend; 5] = [
        Backend::Pbcopy,
        Backend::WlCopy,
        Backend::Xclip,
        Backend::Xsel,
        Backend::ClipExe,
    ];

    fn program(self) -> &'static str {
        match self {
            Backend::Pbcopy => "pbcopy",
            Backend::WlCopy => "wl-copy",
            Backend::Xclip => "xclip",
            Backend::Xsel => "xsel",
            Backend::ClipExe => "clip.exe",
        }
    }

    fn args(self) -> &'static [&'static str] {
        match self {
            Backend::Xclip => &["-selection", "clipboard"],
            Backend::Xsel => &["--clipboard", "--input"],
            Backend::Pbcopy | Backend::WlCopy | Backend::ClipExe => &[],
        }
    }

    fn usable_in(self, session: Session) -> bool {
        match self {
            Backend::WlCopy => session.wayland,
            Backend::Xclip | Backend::Xsel => session.x11,
            Backend::Pbcopy | Backend::ClipExe => true,
        }
    }
}

/// A detected clipboard program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Clipboard {
    backend: Backend,
    executable: PathBuf,
}

impl Clipboard {
    /// Looks for a usable clipboard program on `PATH`.
    pub(crate) fn detect() -> Option<Self> {
        let path_env = env::var_os("PATH")?;
        detect_in(&path_env, Session::from_env())
    }

    /// Name of the clipboard program.
    pub(crate) fn program(&self) -> &'static str {
        self.backend.program()
    }

    /// Writes `text` to the clipboard.
    pub(crate) fn copy(&self, text: &str) -> Result<(), String> {
        debug!(program = %self.executable.display(), bytes = text.len(), "Writing to clipboard");
        let mut child = Command::new(&self.executable)
            .args(self.backend.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("Failed to start {}: {e}", self.program()))?;

        // Dropping stdin closes the pipe; the child is reaped even if the write failed.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let waited = child.wait();

        written.map_err(|e| format!("Failed to write to {}: {e}", self.program()))?;
        let status = waited.map_err(|e| format!("Failed to wait on {}: {e}", self.program()))?;
        if !status.success() {
            return Err(format!("{} exited with {status}", self.program()));
        }
        Ok(())
    }
}

fn detect_in(path_env: &OsStr, session: Session) -> Option<Clipboard> {
    let dirs: Vec<PathBuf> = env::split_paths(path_env)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();

    Backend::ALL
        .into_iter()
        .filter(|backend| backend.usable_in(session))
        .find_map(|backend| {
            dirs.iter()
                .map(|dir| dir.join(backend.program()))
                .find(|candidate| is_executable(candidate))
                .map(|executable| Clipboard {
                    backend,
                    executable,
                })
        })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    metadata.is_file() && (metadata.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}
