/// Errors raised while locating and reading a year's source document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No document exists at the conventional `{dir}/{year}.{ext}` location.
    #[error("No such file: {}", path.display())]
    SourceNotFound { path: std::path::PathBuf },

    /// The document exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The row pattern failed to compile.
    #[error("Invalid row pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ExtractError {
    /// Maps a low-level I/O failure on `path` to the domain error.
    ///
    /// `NotFound` becomes `SourceNotFound`; anything else stays a read failure.
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => ExtractError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => ExtractError::Read {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Document path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ExtractError::SourceNotFound { path } => Some(path.as_path()),
            ExtractError::Read { path, .. } => Some(path.as_path()),
            ExtractError::Pattern(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_source_not_found() {
        let path = std::path::Path::new("babydata/1999.html");
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ExtractError::from_io(path, io);
        assert!(matches!(err, ExtractError::SourceNotFound { .. }));
        assert_eq!(err.path(), Some(path));
        assert_eq!(err.to_string(), "No such file: babydata/1999.html");
    }

    #[test]
    fn other_io_errors_stay_read_errors() {
        let path = std::path::Path::new("babydata/2001.html");
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ExtractError::from_io(path, io);
        assert!(matches!(err, ExtractError::Read { .. }));
        assert_eq!(err.path(), Some(path));
    }
}
