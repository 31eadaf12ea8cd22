//! Vim runtime directory access

use crate::error::{DocpeekError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of help documents laid out as `<root>/doc/tags` + `<root>/doc/<file>`
pub trait HelpRuntime {
    /// Read the raw tags index
    fn read_tags(&self) -> Result<String>;

    /// Read a help document named by a tags entry
    fn read_doc(&self, file: &str) -> Result<String>;
}

/// File system implementation of HelpRuntime
#[derive(Debug, Clone)]
pub struct FileSystemRuntime {
    pub root: PathBuf,
}

impl FileSystemRuntime {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRuntime { root }
    }

    fn doc_dir(&self) -> PathBuf {
        self.root.join("doc")
    }
}

impl HelpRuntime for FileSystemRuntime {
    fn read_tags(&self) -> Result<String> {
        let path = self.doc_dir().join("tags");
        tracing::debug!(path = %path.display(), "reading tags index");
        read_with_path(&path)
    }

    fn read_doc(&self, file: &str) -> Result<String> {
        let path = self.doc_dir().join(file);
        tracing::debug!(path = %path.display(), "reading help document");
        read_with_path(&path)
    }
}

/// Read a file, naming it in the error message.
///
/// Bytes that are not valid UTF-8 become U+FFFD; older runtime docs are
/// often Latin-1.
fn read_with_path(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        DocpeekError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
