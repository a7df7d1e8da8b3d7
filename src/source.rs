use anyhow::{Context, Result};
use git2::{ErrorCode, Repository};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Where one side of the comparison comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    GitRevision { rev: String, path: PathBuf },
    Stdin,
}

impl ContentSource {
    /// `-` selects standard input, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            ContentSource::Stdin
        } else {
            ContentSource::File(PathBuf::from(arg))
        }
    }

    /// Read the content. `None` means the file does not exist on this side.
    pub fn load(&self) -> Result<Option<String>> {
        match self {
            ContentSource::File(path) => read_file(path),
            ContentSource::GitRevision { rev, path } => {
                let cwd = std::env::current_dir()?;
                let repo = RepoCache::open(&cwd)?;
                repo.read_blob(rev, path)
            }
            ContentSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Could not read standard input")?;
                Ok(Some(buf))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ContentSource::File(path) => path.display().to_string(),
            ContentSource::GitRevision { rev, path } => format!("{rev}:{}", path.display()),
            ContentSource::Stdin => "<stdin>".to_string(),
        }
    }
}

fn read_file(path: &Path) -> Result<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file missing, treating as absent");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Could not read {}", path.display())),
    }
}

pub struct RepoCache {
    repo: Repository,
    workdir: PathBuf,
}

impl RepoCache {
    pub fn open(path: &Path) -> Result<Self> {
        let repo =
            Repository::discover(path).context("Not a git repository (or any parent directory)")?;
        let workdir = repo
            .workdir()
            .context("Bare repositories are not supported")?
            .to_path_buf();
        Ok(Self { repo, workdir })
    }

    /// Content of `path` as of `rev`, or `None` if it is not in that tree.
    pub fn read_blob(&self, rev: &str, path: &Path) -> Result<Option<String>> {
        let obj = self
            .repo
            .revparse_single(rev)
            .with_context(|| format!("Could not resolve: {rev}"))?;
        let tree = obj
            .peel_to_tree()
            .with_context(|| format!("{rev} does not point to a tree"))?;

        let relative = self.relative_path(path)?;
        let entry = match tree.get_path(&relative) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => {
                tracing::debug!(rev, path = %relative.display(), "path not in revision");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let blob = entry
            .to_object(&self.repo)?
            .peel_to_blob()
            .with_context(|| format!("{rev}:{} is not a file", relative.display()))?;
        Ok(Some(String::from_utf8_lossy(blob.content()).into_owned()))
    }

    /// Path relative to the work tree, for tree lookups.
    fn relative_path(&self, path: &Path) -> Result<PathBuf> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        // The file may be gone from disk; resolve symlinks through its parent.
        let resolved = match (absolute.parent(), absolute.file_name()) {
            (Some(parent), Some(name)) => std::fs::canonicalize(parent)
                .map(|p| p.join(name))
                .unwrap_or_else(|_| absolute.clone()),
            _ => absolute.clone(),
        };
        let workdir = std::fs::canonicalize(&self.workdir).unwrap_or_else(|_| self.workdir.clone());

        resolved
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .with_context(|| {
                format!(
                    "{} is outside the work tree {}",
                    path.display(),
                    self.workdir.display()
                )
            })
    }
}
