use std::path::{Path, PathBuf};
use vibegit_engine::{IngestReport, Ingested, RoundDocument, RoundGroup, build_groups, ingest};
use vibegit_types::{RoundFile, RoundSummary};
use walkdir::WalkDir;

/// Rounds loaded once from a directory.
///
/// Built at startup and passed down to whatever renders it; nothing mutates
/// it afterwards.
#[derive(Debug, Clone)]
pub struct RoundCatalog {
    dir: PathBuf,
    files: Vec<PathBuf>,
    ingested: Ingested,
}

impl RoundCatalog {
    /// Load every `*.json` file under `dir`.
    ///
    /// Never fails: a missing directory is an empty catalog, and files that
    /// cannot be read, are not valid JSON, or are not round documents are
    /// skipped and logged at `warn`.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let files = discover_round_files(dir);

        let documents: Vec<RoundDocument> =
            files.iter().map(|path| read_document(dir, path)).collect();

        let ingested = ingest(documents);
        log_report(dir, &ingested.report);

        tracing::info!(
            dir = %dir.display(),
            files = files.len(),
            rounds = ingested.summaries.len(),
            "loaded round catalog"
        );

        Self {
            dir: dir.to_path_buf(),
            files,
            ingested,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files that were read, in load order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Summaries ordered by start time
    pub fn summaries(&self) -> &[RoundSummary] {
        &self.ingested.summaries
    }

    /// Rounds in the same order as [`RoundCatalog::summaries`]
    pub fn rounds(&self) -> &[RoundFile] {
        &self.ingested.rounds
    }

    pub fn report(&self) -> &IngestReport {
        &self.ingested.report
    }

    pub fn len(&self) -> usize {
        self.ingested.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingested.is_empty()
    }

    pub fn find(&self, round_id: &str) -> Option<(&RoundFile, &RoundSummary)> {
        self.ingested.find(round_id)
    }

    /// Timeline items of every round, grouped per round in catalog order
    pub fn groups(&self) -> Vec<RoundGroup> {
        build_groups(&self.ingested.rounds)
    }
}

/// All `*.json` files under `dir`, recursively, sorted by path.
///
/// Entries the walk cannot stat are logged and passed over, except `*.json`
/// paths (a dangling symlink, say), which are kept so the read reports them.
pub fn discover_round_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "rounds directory does not exist");
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_json(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot walk rounds directory entry");
                if let Some(path) = err.path()
                    && is_json(path)
                {
                    files.push(path.to_path_buf());
                }
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_document(dir: &Path, path: &Path) -> RoundDocument {
    let source = path
        .strip_prefix(dir)
        .unwrap_or(path)
        .display()
        .to_string();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(source = %source, error = %err, "cannot read round file");
            return RoundDocument::unreadable(source);
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => RoundDocument::new(source, value),
        Err(err) => {
            tracing::debug!(source = %source, error = %err, "round file is not valid JSON");
            RoundDocument::unparseable(source)
        }
    }
}

fn log_report(dir: &Path, report: &IngestReport) {
    for skipped in &report.skipped {
        tracing::warn!(
            dir = %dir.display(),
            source = skipped.source.as_deref().unwrap_or("<unknown>"),
            reason = %skipped.reason,
            "skipping round document"
        );
    }
    for round_id in &report.duplicate_ids {
        tracing::warn!(
            dir = %dir.display(),
            round_id = %round_id,
            "round_id appears in more than one document"
        );
    }
    if report.dropped_events > 0 {
        tracing::warn!(
            dropped = report.dropped_events,
            "dropped malformed events"
        );
    }
}
