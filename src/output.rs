//! Output side effects: the confirmation line and the key file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::GROUP_ID_VAR;
use crate::error::Error;

/// The line printed on success: `GROUP_ID=<value>`, value echoed verbatim.
pub fn confirmation_line(value: &str) -> String {
    format!("{}={}", GROUP_ID_VAR, value)
}

/// Write `bytes` to `path`, creating or truncating it.
///
/// The file is closed when the handle drops, on success and on error alike.
/// No atomicity is attempted: a failed write may leave a partial file.
pub fn write_key(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.flush().map_err(io_err)
}
