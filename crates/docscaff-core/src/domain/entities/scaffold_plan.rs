use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Fixed set of directories and files to materialize.
///
/// Entries keep their insertion order. The plan carries no root; it is
/// resolved against the working directory at scaffold time.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    name: String,
    entries: Vec<PlanEntry>,
}

impl ScaffoldPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) -> Result<(), DomainError> {
        let path = RelativePath::try_new(path)?;
        self.entries
            .push(PlanEntry::Directory(DirectoryToCreate { path }));
        Ok(())
    }

    pub fn add_file(
        &mut self,
        path: impl Into<PathBuf>,
        content: &'static str,
    ) -> Result<(), DomainError> {
        let path = RelativePath::try_new(path)?;
        self.entries.push(PlanEntry::File(FileToWrite { path, content }));
        Ok(())
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.add_directory(path)?;
        Ok(self)
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        content: &'static str,
    ) -> Result<Self, DomainError> {
        self.add_file(path, content)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan {
                name: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }
}

#[derive(Debug, Clone)]
pub enum PlanEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl PlanEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: &'static str,
}

impl FileToWrite {
    /// Content as it lands on disk: surrounding whitespace stripped, one
    /// trailing newline.
    pub fn normalized_content(&self) -> String {
        normalize_content(self.content)
    }
}

/// Strip surrounding whitespace and terminate with exactly one newline.
pub fn normalize_content(content: &str) -> String {
    let mut out = content.trim().to_owned();
    out.push('\n');
    out
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}
