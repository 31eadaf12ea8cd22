//! Output sink: stdout, or the stdin of a formatter process

use crate::error::{DocpeekError, Result};
use crate::infrastructure::process::CommandLine;
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Stdio};

enum Sink {
    Stdout(io::Stdout),
    Formatter {
        program: String,
        child: Child,
        stdin: Option<ChildStdin>,
    },
}

/// Where rendered output goes.
///
/// Write the preview, then call [`OutputPipe::finish`] to close the
/// formatter's input and collect its exit status. Dropping an unfinished
/// pipe still closes stdin and reaps the child.
pub struct OutputPipe {
    sink: Sink,
    finished: bool,
}

impl OutputPipe {
    /// Open a sink for `formatter`, or plain stdout when there is none
    pub fn open(formatter: Option<&str>) -> Result<Self> {
        match formatter.and_then(CommandLine::parse) {
            Some(line) => Self::spawn(line),
            None => Ok(Self::stdout()),
        }
    }

    pub fn stdout() -> Self {
        OutputPipe {
            sink: Sink::Stdout(io::stdout()),
            finished: false,
        }
    }

    fn spawn(line: CommandLine) -> Result<Self> {
        tracing::info!(program = %line.program, args = ?line.args, "piping output through formatter");
        let mut child = line
            .to_command()
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DocpeekError::Formatter(format!("Failed to launch '{}': {}", line.program, e))
            })?;
        let stdin = child.stdin.take();

        Ok(OutputPipe {
            sink: Sink::Formatter {
                program: line.program,
                child,
                stdin,
            },
            finished: false,
        })
    }

    /// Flush output and wait for the formatter, if any, to exit
    pub fn finish(mut self) -> Result<()> {
        self.flush()?;
        self.finished = true;

        if let Sink::Formatter {
            program,
            child,
            stdin,
        } = &mut self.sink
        {
            drop(stdin.take());
            let status = child.wait()?;
            tracing::info!(program = %program, %status, "formatter exited");
            if !status.success() {
                return Err(DocpeekError::Formatter(format!(
                    "'{}' exited with {}",
                    program, status
                )));
            }
        }

        Ok(())
    }
}

impl Write for OutputPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Stdout(out) => out.write(buf),
            Sink::Formatter { stdin, .. } => {
                let result = match stdin.as_mut() {
                    Some(pipe) => pipe.write(buf),
                    None => return Ok(buf.len()),
                };
                match result {
                    // formatter stopped reading (e.g. a pager was quit)
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                        *stdin = None;
                        Ok(buf.len())
                    }
                    other => other,
                }
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Stdout(out) => out.flush(),
            Sink::Formatter { stdin, .. } => match stdin.as_mut().map(|pipe| pipe.flush()) {
                Some(Err(e)) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
                _ => Ok(()),
            },
        }
    }
}

impl Drop for OutputPipe {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Sink::Formatter { child, stdin, .. } = &mut self.sink {
            drop(stdin.take());
            let _ = child.wait();
        }
    }
}
