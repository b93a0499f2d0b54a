use crate::error::{DevError, Result};
use crate::process::{Capture, CommandRunner, ExecutionResult, Invocation};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the process working directory for the lifetime of the guard.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even when
        // a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Writer that fails with a fixed error kind, on write or only on flush.
pub(crate) struct FailingWriter {
    kind: io::ErrorKind,
    fail_on_write: bool,
}

impl FailingWriter {
    pub(crate) fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            fail_on_write: true,
        }
    }

    pub(crate) fn on_flush(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            fail_on_write: false,
        }
    }
}

impl io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_on_write {
            Err(io::Error::from(self.kind))
        } else {
            Ok(buf.len())
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(self.kind))
    }
}

/// Build an owned token vector from string literals.
pub(crate) fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

enum Response {
    Exit { status: i32, stdout: String, stderr: String },
    LaunchFailure,
}

/// Runner that records every invocation instead of spawning it.
pub(crate) struct RecordingRunner {
    response: Response,
    calls: RefCell<Vec<(Invocation, Capture)>>,
}

impl RecordingRunner {
    pub(crate) fn succeeding(stdout: &str) -> Self {
        Self::with(Response::Exit {
            status: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }

    pub(crate) fn failing(status: i32, stderr: &str) -> Self {
        Self::with(Response::Exit {
            status,
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    pub(crate) fn unlaunchable() -> Self {
        Self::with(Response::LaunchFailure)
    }

    fn with(response: Response) -> Self {
        Self {
            response,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(Invocation, Capture)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation, capture: Capture) -> Result<ExecutionResult> {
        self.calls.borrow_mut().push((invocation.clone(), capture));

        match &self.response {
            Response::Exit {
                status,
                stdout,
                stderr,
            } => Ok(ExecutionResult {
                stdout: stdout.clone().into_bytes(),
                // Mirrors the real runner: stderr is never piped for stdout-only commands.
                stderr: match capture {
                    Capture::Both => stderr.clone().into_bytes(),
                    Capture::StdoutOnly => Vec::new(),
                },
                status: Some(*status),
            }),
            Response::LaunchFailure => Err(DevError::SubprocessLaunchFailure {
                program: invocation.program.clone(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
        }
    }
}
