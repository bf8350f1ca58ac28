use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Stdio},
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender},
    thread,
    time::{Duration, Instant},
};

use tracing::{debug, info, warn};
use wait_timeout::ChildExt;

use super::outcome::{Failure, Outcome, Summary};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

type StreamOutput = (Stream, io::Result<Vec<u8>>);

/// Runs external programs one at a time and keeps a log of every outcome
#[derive(Debug)]
pub struct Executor {
    timeout: Duration,
    current_dir: Option<PathBuf>,
    log: Vec<Outcome>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Executor {
    /// Creates an executor that kills any process still running after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            current_dir: None,
            log: Vec::new(),
        }
    }

    /// Spawns every process in `dir` instead of the current process directory
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = Some(dir);
    }

    /// Every outcome produced so far, oldest first
    pub fn log(&self) -> &[Outcome] {
        &self.log
    }

    /// Runs `argv[0]` with the remaining arguments and records the outcome.
    ///
    /// Arguments go straight to the OS; nothing is shell-expanded. Failures
    /// to launch, timeouts and non-zero exits are all reported in the
    /// returned [`Outcome`] rather than as errors.
    pub fn execute<S: AsRef<str>>(&mut self, argv: &[S]) -> Outcome {
        self.execute_with(argv, |_| None)
    }

    /// Like [`Executor::execute`], but lets the caller derive a summary from
    /// stdout when the process exits successfully.
    pub fn execute_with<S, F>(&mut self, argv: &[S], summarize: F) -> Outcome
    where
        S: AsRef<str>,
        F: FnOnce(&str) -> Option<Summary>,
    {
        let argv: Vec<&str> = argv.iter().map(AsRef::as_ref).collect();
        let mut outcome = self.run(&argv);

        if outcome.succeeded() {
            outcome.summary = outcome.stdout().and_then(summarize);
        }

        self.record(outcome)
    }

    /// Appends an outcome that was produced without spawning a process.
    pub fn record(&mut self, outcome: Outcome) -> Outcome {
        self.log.push(outcome.clone());
        outcome
    }

    fn run(&self, argv: &[&str]) -> Outcome {
        let command = argv.join(" ");
        let Some((program, args)) = argv.split_first() else {
            return Outcome::failed(
                command,
                Failure::Launch {
                    program: String::new(),
                    reason: "empty command".to_string(),
                },
            );
        };

        debug!(command = %command, "spawning process");
        let mut child = match self.spawn(program, args) {
            Ok(child) => child,
            Err(e) => {
                warn!(command = %command, error = %e, "failed to launch process");
                return Outcome::failed(
                    command,
                    Failure::Launch {
                        program: program.to_string(),
                        reason: e.to_string(),
                    },
                );
            }
        };

        // Drain both pipes while waiting so a chatty child can't fill a pipe
        // buffer and stall until the deadline.
        let started = Instant::now();
        let deadline = started + self.timeout;
        let (tx, rx) = mpsc::channel();
        let mut readers = 0;
        if let Some(stdout) = child.stdout.take() {
            drain(stdout, Stream::Stdout, tx.clone());
            readers += 1;
        }
        if let Some(stderr) = child.stderr.take() {
            drain(stderr, Stream::Stderr, tx.clone());
            readers += 1;
        }
        drop(tx);

        let status = match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                warn!(
                    command = %command,
                    timeout_secs = self.timeout.as_secs(),
                    "process exceeded timeout, killing it"
                );
                reap(&mut child);
                return Outcome::failed(command, Failure::Timeout(self.timeout));
            }
            Err(e) => {
                warn!(command = %command, error = %e, "failed to wait for process");
                reap(&mut child);
                return Outcome::failed(command, Failure::Wait(e.to_string()));
            }
        };

        // The child has exited, but a background grandchild may still hold
        // the pipes open. The readers get whatever is left of the deadline.
        let Some((stdout, stderr)) = collect(&rx, readers, deadline) else {
            warn!(
                command = %command,
                timeout_secs = self.timeout.as_secs(),
                "output streams still open at timeout"
            );
            return Outcome::failed(command, Failure::Timeout(self.timeout));
        };

        let exit_status = exit_code(status);
        info!(
            command = %command,
            exit_status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "process finished"
        );

        Outcome::completed(command, exit_status, stdout, stderr)
    }

    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<Child> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.spawn()
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R, stream: Stream, tx: Sender<StreamOutput>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = pipe.read_to_end(&mut buf).map(|_| buf);
        // The receiver is gone once the deadline passed
        let _ = tx.send((stream, result));
    });
}

/// Waits until `readers` streams have finished or `deadline` passes.
///
/// Returns `None` on timeout. Unfinished readers stay detached and exit
/// when the last writer closes the pipe.
fn collect(
    rx: &Receiver<StreamOutput>,
    readers: usize,
    deadline: Instant,
) -> Option<(String, String)> {
    let mut stdout = String::new();
    let mut stderr = String::new();

    for _ in 0..readers {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let (stream, result) = match rx.recv_timeout(remaining) {
            Ok(output) => output,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        let text = match result {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                debug!(?stream, error = %e, "failed to read output stream");
                String::new()
            }
        };
        match stream {
            Stream::Stdout => stdout = text,
            Stream::Stderr => stderr = text,
        }
    }

    Some((stdout, stderr))
}

fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        debug!(error = %e, "kill failed, process may have already exited");
    }
    if let Err(e) = child.wait() {
        warn!(error = %e, "failed to reap process");
    }
}

/// Signal deaths map to 128 + signal number, as shells report them.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
