use crate::areas::git::{GitCli, VersionControl};
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Working copy being backfilled, together with the version-control tool that
/// records the synthetic history and the writer every report goes to.
pub struct Repository<V = GitCli> {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    vcs: V,
}

impl Repository<GitCli> {
    pub fn new(
        path: &str,
        git_program: &str,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Self::resolve(path)?;
        let git = GitCli::new(git_program, path.clone());

        Ok(Self::assemble(path, git, writer))
    }
}

impl<V: VersionControl> Repository<V> {
    pub fn with_vcs(path: &str, vcs: V, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Self::resolve(path)?;

        Ok(Self::assemble(path, vcs, writer))
    }

    fn resolve(path: &str) -> anyhow::Result<Box<Path>> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Working copy {path} is not accessible"))?;

        if !path.is_dir() {
            anyhow::bail!("Working copy {} is not a directory", path.display());
        }

        Ok(path.into_boxed_path())
    }

    fn assemble(path: Box<Path>, vcs: V, writer: Box<dyn std::io::Write>) -> Self {
        Repository {
            workspace: Workspace::new(path),
            writer: RefCell::new(writer),
            vcs,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }
}
