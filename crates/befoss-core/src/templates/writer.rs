//! Output file writing
//!
//! `LICENCE` and `CONTRIBUTE.md` are created or truncated. `.envrc` is merged: the new
//! block goes first and whatever the file held before is kept after it.

use crate::error::{BefossError, Result};
use crate::licence::Licence;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

pub const LICENCE_FILE: &str = "LICENCE";
pub const CONTRIBUTING_FILE: &str = "CONTRIBUTE.md";
pub const ENVRC_FILE: &str = ".envrc";

/// Writes the generated artifacts into an output directory
#[derive(Debug, Clone)]
pub struct FileEmitter {
    root: PathBuf,
}

impl FileEmitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write the licence's full text to `LICENCE`
    pub async fn write_licence(&self, licence: &Licence) -> Result<PathBuf> {
        self.write(LICENCE_FILE, licence.content.as_bytes()).await
    }

    /// Write the contributing guide verbatim to `CONTRIBUTE.md`
    pub async fn write_contributing(&self, text: &str) -> Result<PathBuf> {
        self.write(CONTRIBUTING_FILE, text.as_bytes()).await
    }

    /// Put `block` at the head of `.envrc`, keeping the existing content after it
    pub async fn merge_envrc(&self, block: &str) -> Result<PathBuf> {
        let path = self.root.join(ENVRC_FILE);

        let existing = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(BefossError::io(
                    format!("Could not read {}", path.display()),
                    e,
                ))
            }
        };

        let mut content = Vec::with_capacity(block.len() + existing.len());
        content.extend_from_slice(block.as_bytes());
        content.extend_from_slice(&existing);

        self.write(ENVRC_FILE, &content).await
    }

    async fn write(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        // Ensure target directory exists
        fs::create_dir_all(&self.root).await.map_err(|e| {
            BefossError::io(
                format!("Could not create directory {}", self.root.display()),
                e,
            )
        })?;

        let path = self.root.join(name);
        fs::write(&path, content)
            .await
            .map_err(|e| BefossError::io(format!("Could not create {} file", name), e))?;

        Ok(path)
    }
}

/// Place a rendered header at the top of a file's content
///
/// A leading shebang line stays first. Not used by the wizard run itself; applying the
/// header to tracked files is a separate step.
pub fn splice_header(block: &str, existing: &str) -> String {
    let mut header = block.to_string();
    if !header.is_empty() && !header.ends_with('\n') {
        header.push('\n');
    }

    if existing.starts_with("#!") {
        let (shebang, rest) = match existing.find('\n') {
            Some(idx) => existing.split_at(idx + 1),
            None => (existing, ""),
        };
        let mut out = shebang.to_string();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&header);
        out.push_str(rest);
        out
    } else {
        header + existing
    }
}
