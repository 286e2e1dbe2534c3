//! Streaming the artifact to a writer instead of a file.

use std::io::Write;
use std::path::PathBuf;

use hashreg_core::errors::WriteError;

/// Write `artifact` to `out` and flush it.
///
/// `label` names the sink in errors, e.g. `<stdout>`.
pub fn emit_artifact<W: Write>(out: &mut W, artifact: &str, label: &str) -> Result<(), WriteError> {
    out.write_all(artifact.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| WriteError::Write {
            path: PathBuf::from(label),
            source,
        })
}
