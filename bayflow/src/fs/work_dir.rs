use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SUBDIRS: [&str; 1] = ["jobs"];

/// The shop's `.work/` directory.
pub struct WorkDir {
    root: PathBuf,
}

impl WorkDir {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            root: base_path.as_ref().join(".work"),
        }
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    pub fn initialize(&self) -> Result<()> {
        if self.root.exists() {
            bail!(".work directory already exists");
        }

        fs::create_dir_all(&self.root).context("Failed to create .work directory")?;
        for subdir in SUBDIRS {
            fs::create_dir(self.root.join(subdir))
                .with_context(|| format!("Failed to create {subdir} directory"))?;
        }

        self.create_readme()
    }

    pub fn load(&self) -> Result<()> {
        if !self.root.exists() {
            bail!(".work directory does not exist. Run 'bayflow init' first.");
        }

        for subdir in SUBDIRS {
            let path = self.root.join(subdir);
            if !path.exists() {
                fs::create_dir(&path)
                    .with_context(|| format!("Failed to create missing directory: {subdir}"))?;
            }
        }

        Ok(())
    }

    fn create_readme(&self) -> Result<()> {
        let readme_content = r#"# bayflow Work Directory

This directory is managed by the bayflow CLI and contains:

- `config.toml` - Shop name, billing and logging settings
- `jobs/` - One YAML file per job card

Do not manually edit these files unless you know what you're doing.
"#;

        fs::write(self.root.join("README.md"), readme_content)
            .context("Failed to create README.md")
    }

    pub fn jobs_dir(&self) -> PathBuf {
        self.root.join("jobs")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let work_dir = WorkDir::new(temp.path());

        work_dir.initialize().unwrap();
        assert!(work_dir.jobs_dir().is_dir());
        assert!(work_dir.root().join("README.md").exists());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let work_dir = WorkDir::new(temp.path());

        work_dir.initialize().unwrap();
        let err = work_dir.initialize().unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_load_requires_init() {
        let temp = TempDir::new().unwrap();
        let work_dir = WorkDir::new(temp.path());
        assert!(work_dir.load().is_err());
    }

    #[test]
    fn test_load_recreates_missing_jobs_dir() {
        let temp = TempDir::new().unwrap();
        let work_dir = WorkDir::new(temp.path());
        work_dir.initialize().unwrap();
        fs::remove_dir(work_dir.jobs_dir()).unwrap();

        work_dir.load().unwrap();
        assert!(work_dir.jobs_dir().is_dir());
    }
}
