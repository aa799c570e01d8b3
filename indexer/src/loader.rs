//! Builds in-memory documents from JSON files on disk.

use anyhow::{bail, Context, Result};
use catindex_core::{DocId, Document};
use serde::Deserialize;
use serde_json::Value;
use walkdir::WalkDir;

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One line of a manifest: which file holds a document and how it is tagged.
#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    pub id: DocId,
    pub path: PathBuf,
    pub tags: Vec<String>,
}

/// Read a JSON object file; every top-level string property becomes a field.
pub fn load_document<S: AsRef<str>>(id: DocId, path: &Path, tags: &[S]) -> Result<Document> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let json: Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing {}", path.display()))?;
    let Value::Object(obj) = json else {
        bail!("{} does not hold a JSON object", path.display());
    };
    let mut fields = Vec::with_capacity(obj.len());
    for (key, value) in obj {
        match value {
            Value::String(text) => fields.push((key, text)),
            _ => tracing::debug!(doc_id = id, field = %key, "skipping non-string field"),
        }
    }
    let doc = Document::new(id, tags, fields)
        .with_context(|| format!("building document from {}", path.display()))?;
    Ok(doc)
}

/// Load every document listed in a manifest, a JSON array of
/// `{"id", "path", "tags"}` objects. Relative paths resolve against the
/// manifest's directory.
pub fn load_manifest(manifest: &Path) -> Result<Vec<Document>> {
    let f = File::open(manifest).with_context(|| format!("opening manifest {}", manifest.display()))?;
    let entries: Vec<ManifestEntry> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing manifest {}", manifest.display()))?;
    let base = manifest.parent().unwrap_or_else(|| Path::new("."));

    let mut seen: HashSet<DocId> = HashSet::new();
    let mut docs = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            bail!("document id {} appears twice in {}", entry.id, manifest.display());
        }
        let path = if entry.path.is_relative() { base.join(&entry.path) } else { entry.path };
        docs.push(load_document(entry.id, &path, &entry.tags)?);
    }
    tracing::info!(manifest = %manifest.display(), docs = docs.len(), "loaded manifest");
    Ok(docs)
}

/// Load files in the given order, numbering them from 1. Every document
/// gets the same tags.
pub fn load_files<S: AsRef<str>>(paths: &[PathBuf], tags: &[S]) -> Result<Vec<Document>> {
    let mut docs = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        let id = DocId::try_from(i + 1).context("too many input files")?;
        docs.push(load_document(id, path, tags)?);
    }
    Ok(docs)
}

/// All `.json` files below `dir`, sorted so document ids are stable.
pub fn collect_json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use catindex_core::Record;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn loads_string_fields_only() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(
            dir.path(),
            "lstb.json",
            r#"{"title": "A Study in Scarlet", "author": "Arthur Conan Doyle", "content": "In the year 1878", "year": 1887}"#,
        );
        let doc = load_document(1, &p, &["Literature", "detective"]).unwrap();
        assert_eq!(doc.field("title"), Some("A Study in Scarlet"));
        assert_eq!(doc.field("year"), None);
        assert!(doc.has_topic("literature"));
        assert_eq!(doc.fields().len(), 3);
    }

    #[test]
    fn rejects_non_objects_and_missing_tags() {
        let dir = tempfile::tempdir().unwrap();
        let arr = write(dir.path(), "arr.json", r#"["title"]"#);
        assert!(load_document(1, &arr, &["x"]).is_err());
        let obj = write(dir.path(), "obj.json", r#"{"title": "t"}"#);
        assert!(load_document::<&str>(1, &obj, &[]).is_err());
    }

    #[test]
    fn manifest_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("books")).unwrap();
        write(&dir.path().join("books"), "a.json", r#"{"title": "A", "author": "B", "content": "c"}"#);
        let manifest = write(
            dir.path(),
            "manifest.json",
            r#"[{"id": 7, "path": "books/a.json", "tags": ["thriller"]}]"#,
        );
        let docs = load_manifest(&manifest).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id(), 7);
        assert!(docs[0].has_topic("Thriller"));
    }

    #[test]
    fn manifest_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.json", r#"{"title": "A"}"#);
        let manifest = write(
            dir.path(),
            "manifest.json",
            r#"[{"id": 1, "path": "a.json", "tags": ["x"]}, {"id": 1, "path": "a.json", "tags": ["y"]}]"#,
        );
        assert!(load_manifest(&manifest).is_err());
    }

    #[test]
    fn files_are_numbered_from_one() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.json", r#"{"title": "B"}"#);
        write(dir.path(), "a.json", r#"{"title": "A"}"#);
        write(dir.path(), "notes.txt", "ignored");
        let files = collect_json_files(dir.path());
        assert_eq!(files.len(), 2);
        let docs = load_files(&files, &["general"]).unwrap();
        assert_eq!(docs[0].id(), 1);
        assert_eq!(docs[0].field("title"), Some("A"));
        assert_eq!(docs[1].id(), 2);
    }
}
