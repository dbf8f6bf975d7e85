//! End-to-end scaffold runs against the real and in-memory adapters.

use std::fs;
use std::path::{Path, PathBuf};

use docscaff_adapters::{LocalFilesystem, MemoryFilesystem};
use docscaff_core::{domain::templates, prelude::*};
use tempfile::TempDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()))
}

/// Every regular file under `root`, relative and sorted.
fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }
    out.sort();
    out
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// On-disk bytes of every generated file.
const EXPECTED_CONTENTS: [(&str, &str); 7] = [
    (
        "mkdocs.yml",
        concat!(
            "site_name: De SysOp à l'Architecture Quantique\n",
            "theme:\n",
            "  name: material\n",
            "\n",
            "nav:\n",
            "  - Accueil: index.md\n",
            "  - Fondations: []\n",
            "  - Infrastructure:\n",
            "    - Terraform: infra/terraform.md\n",
            "  - Sécurité: []\n",
            "  - Labs: []\n",
            "  - Glossaire: glossaire.md\n",
        ),
    ),
    ("requirements.txt", "mkdocs-material\n"),
    (
        ".gitignore",
        concat!(
            "# Python\n",
            "__pycache__/\n",
            "*.pyc\n",
            "*.pyo\n",
            "*.pyd\n",
            ".Python\n",
            "env/\n",
            "virtualenv/\n",
            ".env\n",
            "\n",
            "# MkDocs\n",
            "site/\n",
        ),
    ),
    (
        "docs/index.md",
        concat!(
            "# De SysOp à l'Architecture Quantique\n",
            "\n",
            "Bienvenue dans ce référentiel de documentation.\n",
            "\n",
            "Ce projet a pour but de servir de veille technologique pour les équipes Ops.\n",
            "Il explore l'hybridation entre le Cloud classique et l'informatique Quantique.\n",
            "\n",
            "**Note :** L'approche se veut pragmatique et accessible, sans mathématiques complexes.\n",
        ),
    ),
    ("docs/glossaire.md", "# Glossaire\n"),
    ("docs/infra/terraform.md", "# Infrastructure Terraform\n"),
    (
        ".github/workflows/publish.yml",
        concat!(
            "name: Publish Docs\n",
            "on:\n",
            "  push:\n",
            "    branches:\n",
            "      - main\n",
            "      - master\n",
            "\n",
            "permissions: \n",
            "  contents: write\n",
            "\n",
            "jobs:\n",
            "  deploy:\n",
            "    runs-on: ubuntu-latest\n",
            "    steps:\n",
            "      - uses: actions/checkout@v4\n",
            "      - name: Configure Git Credentials\n",
            "        run: |\n",
            "          git config user.name github-actions[bot]\n",
            "          git config user.email 41898282+github-actions[bot]@users.noreply.github.com\n",
            "      - uses: actions/setup-python@v5\n",
            "        with:\n",
            "          python-version: 3.x\n",
            "      - run: echo \"cache_id=$(date --utc '+%V')\" >> $GITHUB_ENV\n",
            "      - uses: actions/cache@v4\n",
            "        with:\n",
            "          key: mkdocs-material-${{ env.cache_id }}\n",
            "          path: .cache\n",
            "          restore-keys: |\n",
            "            mkdocs-material-\n",
            "      - run: pip install -r requirements.txt\n",
            "      - run: mkdocs gh-deploy --force\n",
        ),
    ),
];

#[test]
fn every_file_has_its_literal_content() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let plan = templates::docs_project().unwrap();

    local_service().scaffold(&plan, root).unwrap();

    for (rel, expected) in EXPECTED_CONTENTS {
        let bytes = fs::read(root.join(rel)).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            expected,
            "{rel} differs"
        );
    }
}

#[test]
fn fresh_directory_gets_exact_tree_and_contents() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let plan = templates::docs_project().unwrap();

    let report = local_service().scaffold(&plan, root).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.directories.len(), 3);
    assert_eq!(report.written.len(), 7);

    for dir in ["docs", "docs/infra", ".github/workflows"] {
        assert!(root.join(dir).is_dir(), "{dir} missing");
    }

    let mut expected: Vec<PathBuf> = [
        "mkdocs.yml",
        "requirements.txt",
        ".gitignore",
        "docs/index.md",
        "docs/glossaire.md",
        "docs/infra/terraform.md",
        ".github/workflows/publish.yml",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    expected.sort();
    assert_eq!(files_under(root), expected);

    assert_eq!(read(root, "requirements.txt"), "mkdocs-material\n");
    assert_eq!(read(root, "docs/glossaire.md"), "# Glossaire\n");
    assert_eq!(
        read(root, "docs/infra/terraform.md"),
        "# Infrastructure Terraform\n"
    );

    let mkdocs = read(root, "mkdocs.yml");
    assert!(mkdocs.starts_with("site_name: De SysOp à l'Architecture Quantique\n"));
    assert!(mkdocs.ends_with("  - Glossaire: glossaire.md\n"));

    let gitignore = read(root, ".gitignore");
    assert!(gitignore.starts_with("# Python\n"));
    assert!(gitignore.ends_with("site/\n"));

    let index = read(root, "docs/index.md");
    assert!(index.starts_with("# De SysOp à l'Architecture Quantique\n"));
    assert!(!index.ends_with("\n\n"));
}

#[test]
fn second_run_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let plan = templates::docs_project().unwrap();
    let service = local_service();

    service.scaffold(&plan, root).unwrap();
    let first: Vec<_> = files_under(root)
        .into_iter()
        .map(|p| fs::read(root.join(&p)).unwrap())
        .collect();

    service.scaffold(&plan, root).unwrap();
    let second: Vec<_> = files_under(root)
        .into_iter()
        .map(|p| fs::read(root.join(&p)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn stale_content_is_overwritten_not_appended() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("requirements.txt"), "old-dep\nanother\n").unwrap();

    local_service()
        .scaffold(&templates::docs_project().unwrap(), root)
        .unwrap();

    assert_eq!(read(root, "requirements.txt"), "mkdocs-material\n");
}

#[test]
fn existing_docs_directory_and_unrelated_files_survive() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("docs/notes.md"), "keep me").unwrap();

    let report = local_service()
        .scaffold(&templates::docs_project().unwrap(), root)
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(read(root, "docs/notes.md"), "keep me");
}

#[test]
fn unwritable_file_is_skipped_and_later_files_still_written() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    // A directory where a file should go cannot be opened for writing.
    fs::create_dir(root.join("mkdocs.yml")).unwrap();

    let report = local_service()
        .scaffold(&templates::docs_project().unwrap(), root)
        .unwrap();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, root.join("mkdocs.yml"));
    assert_eq!(report.written.len(), 6);
    assert!(root.join("mkdocs.yml").is_dir());
    assert_eq!(read(root, "requirements.txt"), "mkdocs-material\n");
    assert!(root.join(".github/workflows/publish.yml").is_file());
}

#[test]
fn blocked_directory_halts_before_any_file() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("docs"), "a regular file named docs").unwrap();

    let err = local_service()
        .scaffold(&templates::docs_project().unwrap(), root)
        .unwrap_err();

    assert!(err.is_fatal_directory_failure());
    assert!(!root.join("mkdocs.yml").exists());
    assert!(!root.join("requirements.txt").exists());
    assert!(!root.join(".github").exists());
}

#[test]
fn memory_adapter_reports_denied_write_and_continues() {
    let fs = MemoryFilesystem::new();
    fs.deny_write("/proj/docs/index.md");

    let service = ScaffoldService::new(Box::new(fs.clone()));
    let report = service
        .scaffold(&templates::docs_project().unwrap(), Path::new("/proj"))
        .unwrap();

    assert_eq!(report.failed.len(), 1);
    assert!(!fs.exists(Path::new("/proj/docs/index.md")));
    assert_eq!(
        fs.read_file(Path::new("/proj/docs/glossaire.md")).as_deref(),
        Some("# Glossaire\n")
    );
    assert_eq!(fs.list_files().len(), 6);
}

#[test]
fn memory_adapter_denied_directory_writes_nothing() {
    let fs = MemoryFilesystem::new();
    fs.deny_directory("/proj/.github");

    let service = ScaffoldService::new(Box::new(fs.clone()));
    let err = service
        .scaffold(&templates::docs_project().unwrap(), Path::new("/proj"))
        .unwrap_err();

    assert!(err.is_fatal_directory_failure());
    assert!(fs.is_dir(Path::new("/proj/docs/infra")));
    assert!(fs.list_files().is_empty());
}
