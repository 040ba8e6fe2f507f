use std::path::PathBuf;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SetupError>;

/// Error type for `lc-project-setup`.
///
/// Paths the user failed to provide are not errors; they surface as
/// [`Unresolved`](crate::Unresolved) values instead.
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    /// A required game assembly could not be copied into the Unity project.
    #[error("failed to copy {file} from {source_dir}: {source}")]
    CopyFailed {
        /// File name from the required list.
        file: String,
        /// Game data directory the file was read from.
        source_dir: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The MSBuild user file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteUserFile {
        /// Destination of the user file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The restore tool could not be started.
    #[error("failed to spawn process: {message}")]
    Spawn {
        /// Human-readable message.
        message: String,
    },

    /// The restore tool ran but reported failure.
    #[error("process exited with {status}")]
    RestoreStatus {
        /// Exit status of the tool.
        status: std::process::ExitStatus,
    },
}
