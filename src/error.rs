//! Pipeline error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised when scanning the source tree or writing the export fails.
///
/// Every variant aborts the run; no partial tree is printed or exported. The
/// CLI prints the message and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    /// The source path could not be resolved at all.
    #[error("cannot access '{}': {source}", .path.display())]
    Root {
        /// Path as the user supplied it.
        path: PathBuf,
        source: io::Error,
    },

    /// The source path exists but is not a directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// Listing a directory during descent failed.
    #[error("failed to read directory '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    /// The tree could not be serialized to YAML.
    #[error("failed to serialize directory tree: {source}")]
    Serialize { source: serde_yaml::Error },

    /// The output file could not be created or written.
    #[error("failed to write '{}': {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::path::Path;

    use super::*;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn display_names_the_failed_operation() {
        let root = Error::Root {
            path: PathBuf::from("missing"),
            source: io_error("boom"),
        };
        assert_eq!("cannot access 'missing': boom", root.to_string());

        let not_dir = Error::NotADirectory {
            path: PathBuf::from("plain.txt"),
        };
        assert_eq!("'plain.txt' is not a directory", not_dir.to_string());

        let read_dir = Error::ReadDir {
            path: PathBuf::from("locked"),
            source: io_error("boom"),
        };
        assert_eq!(
            "failed to read directory 'locked': boom",
            read_dir.to_string()
        );

        let write = Error::WriteOutput {
            path: PathBuf::from("out.yaml"),
            source: io_error("boom"),
        };
        assert_eq!("failed to write 'out.yaml': boom", write.to_string());
    }

    #[test]
    fn read_dir_source_is_the_underlying_io_error() {
        let error = Error::ReadDir {
            path: Path::new("dir").to_path_buf(),
            source: io_error("denied"),
        };
        let source = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("should expose the underlying io::Error");
        assert_eq!(source.to_string(), "denied");
    }
}
