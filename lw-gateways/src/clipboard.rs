use std::{
    io::{prelude::*, Error, ErrorKind, Result},
    process::Child,
};

/// Writes text into the system clipboard by piping it into an
/// external program, e.g. `wl-copy`, `xclip -selection clipboard`
/// or `pbcopy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    program: String,
    args: Vec<String>,
}

impl ClipboardCommand {
    /// Split a command line at whitespace into program and arguments.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(ToOwned::to_owned);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn copy(&self, text: &str) -> Result<()> {
        log::debug!("Piping {} bytes into {}", text.len(), self.program);
        pipe_into(&self.program, &self.args, text)
    }
}

#[cfg(not(test))]
fn pipe_into(program: &str, args: &[String], text: &str) -> Result<()> {
    use std::process::{Command, Stdio};
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()?;
    write_and_wait(child, program, text)
}

/// The child is always reaped, even if writing fails.
fn write_and_wait(mut child: Child, program: &str, text: &str) -> Result<()> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Err(Error::new(ErrorKind::Other, "Could not get stdin")),
    };
    if written.is_err() {
        let _ = child.kill();
    }
    let status = child.wait()?;
    written?;
    if !status.success() {
        return Err(Error::new(
            ErrorKind::Other,
            format!("{program} exited with {status}"),
        ));
    }
    Ok(())
}

/// Don't actually touch the clipboard while running the tests.
#[cfg(test)]
fn pipe_into(program: &str, _: &[String], text: &str) -> Result<()> {
    log::debug!("Would pipe into {program}: {text}");
    Ok(())
}
