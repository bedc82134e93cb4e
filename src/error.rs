use std::fmt;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// File operation errors
    File(FileError),
    /// Document build and save errors
    Document(DocumentError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::File(e) => write!(f, "file error: {}", e),
            AppError::Document(e) => write!(f, "document error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::File(e) => Some(e),
            AppError::Document(e) => Some(e),
        }
    }
}

/// File operation errors
#[derive(Debug)]
pub enum FileError {
    /// File does not exist
    NotFound {
        path: String,
    },
    /// Failed to read a file
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Failed to write a file
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Failed to create a directory
    CreateDirFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// JSON parsing failed
    JsonParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "file not found: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "failed to read file ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "failed to write file ({}): {}", path, source)
            }
            FileError::CreateDirFailed { path, source } => {
                write!(f, "failed to create directory ({}): {}", path, source)
            }
            FileError::JsonParseFailed { path, source } => {
                write!(f, "failed to parse JSON ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::CreateDirFailed { source, .. }
            | FileError::JsonParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// Document build and save errors
#[derive(Debug)]
pub enum DocumentError {
    /// Packing or writing the finished document failed
    SaveFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Rewriting the section layout of the built document failed
    LayoutPatchFailed {
        reason: String,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::SaveFailed { path, source } => {
                write!(f, "failed to save document ({}): {}", path, source)
            }
            DocumentError::LayoutPatchFailed { reason } => {
                write!(f, "failed to patch section layout: {}", reason)
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::SaveFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== Conversions from common error types ==========
// Note: no manual From<AppError> for anyhow::Error is needed, anyhow already
// covers every type implementing std::error::Error

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::JsonParseFailed {
            path: String::new(), // serde_json errors do not carry path info
            source: Box::new(err),
        })
    }
}

// ========== Convenience constructors ==========

impl AppError {
    /// Creates a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// Creates a file read error
    pub fn file_read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Creates a file write error
    pub fn file_write_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Creates a directory creation error
    pub fn create_dir_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::CreateDirFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Creates a JSON parse error
    pub fn json_parse_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::JsonParseFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Creates a document save error
    pub fn document_save_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Document(DocumentError::SaveFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Creates a section layout patch error
    pub fn layout_patch_failed(reason: impl Into<String>) -> Self {
        AppError::Document(DocumentError::LayoutPatchFailed {
            reason: reason.into(),
        })
    }
}

// ========== Result type alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;
