//! Child process invocation shared by the adapters.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::EngineError;

/// Run `program` with `args`, requiring a successful exit.
///
/// Arguments are passed as individual argv entries, never through a shell,
/// so device and output names with spaces survive intact. Standard error is
/// captured and carried into [`EngineError::Failed`] together with the exit
/// status; stdout is decoded lossily and returned for the protocol parsers.
pub(crate) fn run(
    program: &str,
    operation: &'static str,
    args: &[String],
) -> Result<String, EngineError> {
    debug!("Running {} {:?} for {}", program, args, operation);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| EngineError::Launch {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(EngineError::Failed {
            program: program.to_string(),
            operation,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
