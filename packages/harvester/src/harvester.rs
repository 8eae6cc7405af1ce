//! Main harvester service that ties all components together.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::regulation_id;
use crate::error::{HarvesterError, Result};
use crate::splitting::split_clauses;
use crate::title::guess_display_name;
use crate::types::{IngestFailure, IngestReport, Regulation};
use crate::xml::{flatten_paragraphs, parse_document};

const UTF8_BOM: &str = "\u{feff}";

/// Progress notification emitted after each source file.
#[derive(Debug)]
pub struct HarvestProgress<'a> {
    /// 1-based position of the file in ingestion order.
    pub position: usize,

    /// Total number of files in the batch.
    pub total: usize,

    /// Source file name.
    pub source_name: &'a str,

    /// Parsed regulation, or the recorded failure.
    pub outcome: std::result::Result<&'a Regulation, &'a IngestFailure>,
}

/// Parse one HWPML document into a regulation.
///
/// # Arguments
/// * `xml` - Document text
/// * `id` - Corpus identifier to assign
/// * `source_name` - File name the text came from
pub fn parse_regulation_xml(xml: &str, id: &str, source_name: &str) -> Result<Regulation> {
    let xml = xml.strip_prefix(UTF8_BOM).unwrap_or(xml);
    let doc = parse_document(xml)?;
    let paragraphs = flatten_paragraphs(&doc);
    let clauses = split_clauses(&paragraphs);
    let display_name = guess_display_name(source_name, &paragraphs);

    tracing::debug!(
        id,
        source_name,
        paragraphs = paragraphs.len(),
        clauses = clauses.len(),
        "Parsed regulation"
    );

    Ok(Regulation::new(
        id,
        source_name,
        display_name,
        &paragraphs,
        clauses,
    ))
}

/// Read and parse one HWPML file.
pub fn parse_regulation_file(path: &Path, id: &str) -> Result<Regulation> {
    let source_name = source_name_of(path);
    let bytes = fs::read(path)?;
    let xml = String::from_utf8(bytes).map_err(|source| HarvesterError::Encoding {
        file: source_name.clone(),
        source,
    })?;
    parse_regulation_xml(&xml, id, &source_name)
}

/// List the `.xml` files directly inside `dir`, sorted by file name.
pub fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();
    files.sort_by_key(|path| source_name_of(path));
    Ok(files)
}

/// Parse every file of a batch independently.
///
/// The file at 1-based position `i` gets id `REG-{i:03}`; a failing file keeps
/// its position so later ids do not shift. Failures are recorded in the report
/// and never abort the batch.
pub fn harvest_files<F>(files: &[PathBuf], mut on_progress: F) -> IngestReport
where
    F: FnMut(HarvestProgress<'_>),
{
    let mut report = IngestReport::default();
    let total = files.len();

    for (index, path) in files.iter().enumerate() {
        let position = index + 1;
        let source_name = source_name_of(path);

        match parse_regulation_file(path, &regulation_id(position)) {
            Ok(regulation) => {
                report.regulations.push(regulation);
                if let Some(regulation) = report.regulations.last() {
                    on_progress(HarvestProgress {
                        position,
                        total,
                        source_name: &source_name,
                        outcome: Ok(regulation),
                    });
                }
            }
            Err(e) => {
                tracing::warn!(source_name = %source_name, error = %e, "Failed to parse regulation");
                report.failures.push(IngestFailure {
                    source_name: source_name.clone(),
                    reason: e.to_string(),
                });
                if let Some(failure) = report.failures.last() {
                    on_progress(HarvestProgress {
                        position,
                        total,
                        source_name: &source_name,
                        outcome: Err(failure),
                    });
                }
            }
        }
    }

    let stats = report.stats();
    tracing::info!(
        parsed = stats.regulations,
        failed = report.failures.len(),
        clauses = stats.clauses,
        chars = stats.chars,
        "Ingestion finished"
    );

    report
}

/// Ingest every `.xml` file of a corpus directory.
pub fn harvest_directory<F>(dir: &Path, on_progress: F) -> Result<IngestReport>
where
    F: FnMut(HarvestProgress<'_>),
{
    let files = list_source_files(dir)?;
    if files.is_empty() {
        return Err(HarvesterError::EmptyCorpus(dir.to_path_buf()));
    }
    Ok(harvest_files(&files, on_progress))
}

fn source_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
