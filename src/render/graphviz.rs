// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering through an external Graphviz `dot` program.

use std::io::Write as _;
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum GraphvizError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write DOT source to `{program}`: {source}")]
    Write {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` exited with {status}: {stderr}")]
    Failed { program: String, status: std::process::ExitStatus, stderr: String },
    #[error("`{program}` produced no output")]
    EmptyOutput { program: String },
}

/// Pipes `dot_source` into `<program> -Tpng` and returns the PNG bytes from stdout.
///
/// Stdin is fed from a scoped thread while stdout and stderr are drained, so a large graph
/// cannot stall on full pipes. A non-zero exit is reported with the program's stderr even
/// when it stopped reading early.
pub fn dot_to_png(dot_source: &str, program: &str) -> Result<Vec<u8>, GraphvizError> {
    let mut child = Command::new(program)
        .arg("-Tpng")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| GraphvizError::Spawn { program: program.to_owned(), source })?;

    let stdin = child.stdin.take();
    let (output, written) = std::thread::scope(|scope| {
        let writer = scope.spawn(move || match stdin {
            // Dropping the handle closes the pipe, which ends the input.
            Some(mut stdin) => stdin.write_all(dot_source.as_bytes()),
            None => Ok(()),
        });
        let output = child.wait_with_output();
        let written = writer.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (output, written)
    });
    let output = output.map_err(|source| GraphvizError::Spawn { program: program.to_owned(), source })?;

    if !output.status.success() {
        return Err(GraphvizError::Failed {
            program: program.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    if output.stdout.is_empty() {
        return Err(GraphvizError::EmptyOutput { program: program.to_owned() });
    }
    written.map_err(|source| GraphvizError::Write { program: program.to_owned(), source })?;

    tracing::debug!(program, bytes = output.stdout.len(), "graphviz rendered");
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::{dot_to_png, GraphvizError};

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = dot_to_png("digraph { a -> b }", "logigram-no-such-graphviz-binary").unwrap_err();
        assert!(matches!(err, GraphvizError::Spawn { .. }));
        assert!(err.to_string().contains("logigram-no-such-graphviz-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_reports_its_exit_status() {
        // `false` exits without reading, so the write side sees a closed pipe.
        let err = dot_to_png(&"x".repeat(1 << 20), "false").unwrap_err();
        let GraphvizError::Failed { program, status, .. } = &err else {
            panic!("expected Failed, got {err:?}");
        };
        assert_eq!(program, "false");
        assert_eq!(status.code(), Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn silent_success_is_empty_output() {
        let err = dot_to_png("digraph { a -> b }", "true").unwrap_err();
        assert!(matches!(err, GraphvizError::EmptyOutput { ref program } if program == "true"));
        assert!(err.to_string().contains("produced no output"));
    }
}
