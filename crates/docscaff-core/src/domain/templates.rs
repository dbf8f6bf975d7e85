//! Built-in content for the SysOp to Quantum documentation project.
//!
//! Every constant is written to disk trimmed, with one trailing newline
//! (see [`FileToWrite::normalized_content`](super::FileToWrite::normalized_content)).

use crate::domain::{DomainError, ScaffoldPlan};

pub const DOCS_DIR: &str = "docs";
pub const INFRA_DIR: &str = "docs/infra";
pub const WORKFLOWS_DIR: &str = ".github/workflows";

pub const MKDOCS_YML: &str = r#"
site_name: De SysOp à l'Architecture Quantique
theme:
  name: material

nav:
  - Accueil: index.md
  - Fondations: []
  - Infrastructure:
    - Terraform: infra/terraform.md
  - Sécurité: []
  - Labs: []
  - Glossaire: glossaire.md
"#;

pub const REQUIREMENTS_TXT: &str = "mkdocs-material";

pub const GITIGNORE: &str = r#"
# Python
__pycache__/
*.pyc
*.pyo
*.pyd
.Python
env/
virtualenv/
.env

# MkDocs
site/
"#;

pub const INDEX_MD: &str = r#"
# De SysOp à l'Architecture Quantique

Bienvenue dans ce référentiel de documentation.

Ce projet a pour but de servir de veille technologique pour les équipes Ops.
Il explore l'hybridation entre le Cloud classique et l'informatique Quantique.

**Note :** L'approche se veut pragmatique et accessible, sans mathématiques complexes.
"#;

pub const GLOSSAIRE_MD: &str = "# Glossaire";

pub const TERRAFORM_MD: &str = "# Infrastructure Terraform";

pub const PUBLISH_YML: &str = r#"
name: Publish Docs
on:
  push:
    branches:
      - main
      - master

permissions: 
  contents: write

jobs:
  deploy:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Configure Git Credentials
        run: |
          git config user.name github-actions[bot]
          git config user.email 41898282+github-actions[bot]@users.noreply.github.com
      - uses: actions/setup-python@v5
        with:
          python-version: 3.x
      - run: echo "cache_id=$(date --utc '+%V')" >> $GITHUB_ENV
      - uses: actions/cache@v4
        with:
          key: mkdocs-material-${{ env.cache_id }}
          path: .cache
          restore-keys: |
            mkdocs-material-
      - run: pip install -r requirements.txt
      - run: mkdocs gh-deploy --force
"#;

/// The documentation project plan: three directories, then seven files.
///
/// Parents are listed before children even though directory creation is
/// recursive.
pub fn docs_project() -> Result<ScaffoldPlan, DomainError> {
    ScaffoldPlan::new("docs-project")
        .with_directory(DOCS_DIR)?
        .with_directory(INFRA_DIR)?
        .with_directory(WORKFLOWS_DIR)?
        .with_file("mkdocs.yml", MKDOCS_YML)?
        .with_file("requirements.txt", REQUIREMENTS_TXT)?
        .with_file(".gitignore", GITIGNORE)?
        .with_file("docs/index.md", INDEX_MD)?
        .with_file("docs/glossaire.md", GLOSSAIRE_MD)?
        .with_file("docs/infra/terraform.md", TERRAFORM_MD)?
        .with_file(".github/workflows/publish.yml", PUBLISH_YML)
}
