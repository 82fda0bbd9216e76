use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Working copy the generated files are written into.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Create or truncate `file_path` (relative to the working copy) and write
    /// `content` into it, creating missing parent directories first.
    pub fn write_file(&self, file_path: &Path, content: &str) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }
}
