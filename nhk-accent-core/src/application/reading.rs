//! External morphological segmenter
//!
//! The resolver's last fallback sends an expression to a MeCab-compatible
//! process and looks up each reading token it returns. The process is started
//! lazily on the first request, kept for the lifetime of the
//! [`MecabSegmenter`], and killed when it is dropped.

use crate::config::SegmenterConfig;
use crate::domain::markup::escape_for_segmenter;
use crate::error::{AccentError, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Text to whitespace-separated reading tokens
pub trait ReadingSegmenter: Send + Sync {
    /// Return the segmenter's one-line answer for `text`
    fn reading(&self, text: &str) -> Result<String>;
}

/// Arguments that make MeCab print one reading per node on a single line
const MECAB_ARGS: [&str; 3] = ["--node-format=%f[6] ", "--eos-format=\n", "--unk-format=%m[] "];

/// Executable name of the MeCab build shipped for the current platform
fn platform_executable(base: &Path) -> PathBuf {
    let name = if cfg!(windows) {
        "mecab.exe"
    } else if cfg!(target_os = "macos") {
        "mecab"
    } else {
        "mecab.lin"
    };
    base.join(name)
}

/// A running segmenter process
struct Session {
    child: Child,
    stdin: ChildStdin,
    replies: Receiver<std::io::Result<Vec<u8>>>,
}

impl Session {
    fn request(&mut self, line: &str, timeout: Duration) -> Result<String> {
        self.stdin
            .write_all(line.as_bytes())
            .and_then(|_| self.stdin.write_all(b"\n"))
            .and_then(|_| self.stdin.flush())
            .map_err(|e| AccentError::SegmenterUnavailable(format!("write failed: {e}")))?;

        let reply = match self.replies.recv_timeout(timeout) {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                return Err(AccentError::SegmenterUnavailable(format!("read failed: {e}")))
            }
            Err(RecvTimeoutError::Timeout) => {
                return Err(AccentError::SegmenterUnavailable(format!(
                    "no reply within {} ms",
                    timeout.as_millis()
                )))
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(AccentError::SegmenterUnavailable(
                    "process closed its output".into(),
                ))
            }
        };

        let text = String::from_utf8(reply).map_err(|e| {
            AccentError::SegmenterUnavailable(format!("reply is not UTF-8: {e}"))
        })?;
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// MeCab (or compatible) segmenter running as a child process
pub struct MecabSegmenter {
    program: PathBuf,
    args: Vec<String>,
    library_path: Option<PathBuf>,
    timeout: Duration,
    session: Mutex<Option<Session>>,
}

impl MecabSegmenter {
    /// Segmenter for a bundled MeCab directory with its dictionary and rc file
    pub fn from_base_path(base: &Path, timeout: Duration) -> Self {
        let mut args: Vec<String> = MECAB_ARGS.iter().map(|a| a.to_string()).collect();
        args.push("-d".into());
        args.push(base.display().to_string());
        args.push("-r".into());
        args.push(base.join("mecabrc").display().to_string());

        Self {
            program: platform_executable(base),
            args,
            library_path: Some(base.to_path_buf()),
            timeout,
            session: Mutex::new(None),
        }
    }

    /// Segmenter running `program` with the reading output format
    pub fn from_command(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self::with_args(program, MECAB_ARGS.iter().map(|a| a.to_string()), timeout)
    }

    /// Segmenter running `program` with exactly `args`
    pub fn with_args(
        program: impl Into<PathBuf>,
        args: impl IntoIterator<Item = String>,
        timeout: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
            library_path: None,
            timeout,
            session: Mutex::new(None),
        }
    }

    /// Build the segmenter described by `config`, if one is enabled
    pub fn from_config(config: &SegmenterConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let timeout = Duration::from_millis(config.timeout_ms);
        match (&config.command, &config.base_path) {
            (Some(command), _) => Some(Self::from_command(command, timeout)),
            (None, Some(base)) => Some(Self::from_base_path(base, timeout)),
            (None, None) => None,
        }
    }

    fn spawn(&self) -> Result<Session> {
        #[cfg(unix)]
        if self.library_path.is_some() {
            ensure_executable(&self.program);
        }

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if let Some(lib) = &self.library_path {
            command
                .env("LD_LIBRARY_PATH", lib)
                .env("DYLD_LIBRARY_PATH", lib);
        }

        let mut child = command.spawn().map_err(|e| {
            AccentError::SegmenterUnavailable(format!(
                "could not start {}: {e}",
                self.program.display()
            ))
        })?;
        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            return Err(AccentError::SegmenterUnavailable(
                "process pipes are unavailable".into(),
            ));
        };

        let (sender, replies) = mpsc::channel();
        thread::spawn(move || {
            let mut reader = BufReader::new(stdout);
            loop {
                let mut line = Vec::new();
                match reader.read_until(b'\n', &mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        if sender.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(Err(e));
                        break;
                    }
                }
            }
        });

        log::info!("Started segmenter {}", self.program.display());
        Ok(Session {
            child,
            stdin,
            replies,
        })
    }
}

impl ReadingSegmenter for MecabSegmenter {
    fn reading(&self, text: &str) -> Result<String> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| AccentError::SegmenterUnavailable("session lock poisoned".into()))?;

        if guard.is_none() {
            *guard = Some(self.spawn()?);
        }
        let Some(session) = guard.as_mut() else {
            return Err(AccentError::SegmenterUnavailable("no session".into()));
        };

        let result = session.request(&escape_for_segmenter(text), self.timeout);
        if result.is_err() {
            // A session that timed out may answer late and desynchronize
            // later requests; start over on the next call.
            *guard = None;
        }
        result
    }
}

#[cfg(unix)]
fn ensure_executable(program: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = std::fs::metadata(program) {
        let mut permissions = metadata.permissions();
        if permissions.mode() & 0o111 == 0 {
            permissions.set_mode(0o755);
            if let Err(e) = std::fs::set_permissions(program, permissions) {
                log::warn!("Could not mark {} executable: {e}", program.display());
            }
        }
    }
}
