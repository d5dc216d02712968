//! JSON persistence for instances.

use std::io::{self, BufReader, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use knapsack_core::Instance;
use thiserror::Error;

/// Errors raised while reading or writing an instance file.
#[derive(Debug, Error)]
pub enum InstanceIoError {
    /// Opening the instance file failed.
    #[error("failed to open instance file {path}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// The file is not a valid instance document.
    #[error("failed to parse instance file {path}")]
    Parse {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the output file or its parent directories failed.
    #[error("failed to create instance file {path}")]
    Create {
        /// Target path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// Serialising or flushing the instance failed.
    #[error("failed to write instance file {path}")]
    Write {
        /// Target path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Read an instance from a JSON file.
///
/// # Errors
/// Returns [`InstanceIoError::Open`] when the file cannot be opened and
/// [`InstanceIoError::Parse`] when its contents are not a valid instance,
/// including duplicate item ids.
pub fn load_instance(path: &Utf8Path) -> Result<Instance, InstanceIoError> {
    let file = knapsack_fs::open_file(path).map_err(|source| InstanceIoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let instance: Instance =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| InstanceIoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "loaded {} ({} items, capacity {}) from {path}",
        instance.project(),
        instance.len(),
        instance.capacity()
    );
    Ok(instance)
}

/// Write an instance as pretty-printed JSON, creating parent directories.
///
/// # Errors
/// Returns [`InstanceIoError::Create`] when the file cannot be created and
/// [`InstanceIoError::Write`] when serialisation or flushing fails.
pub fn save_instance(path: &Utf8Path, instance: &Instance) -> Result<(), InstanceIoError> {
    let file = knapsack_fs::create_file(path).map_err(|source| InstanceIoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, instance)
        .and_then(|()| writer.write_all(b"\n").map_err(serde_json::Error::io))
        .and_then(|()| writer.flush().map_err(serde_json::Error::io))
        .map_err(|source| InstanceIoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("saved {} to {path}", instance.project());
    Ok(())
}
