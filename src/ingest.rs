use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use indicatif::ProgressBar;

use crate::error::AwardError;
use crate::models::AwardRecord;
use crate::producers;
use crate::store::memory::MemoryStore;

/// Settings for one import run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub delimiter: char,
    pub fold_case: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        IngestOptions {
            delimiter: ';',
            fold_case: false,
        }
    }
}

/// Outcome of an import: data rows read, records stored, and exploded
/// records skipped because an identical one was already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub rows: usize,
    pub inserted: usize,
    pub duplicates: usize,
}

/// Column positions resolved from the header row.
struct Columns {
    year: usize,
    title: usize,
    producers: usize,
    studios: Option<usize>,
    winner: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, AwardError> {
        let names: Vec<String> = header
            .iter()
            .map(|n| n.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let find = |name: &str| names.iter().position(|n| n == name);
        let require = |name: &'static str| find(name).ok_or(AwardError::MissingHeader(name));

        Ok(Columns {
            year: require("year")?,
            title: require("title")?,
            producers: require("producers")?,
            studios: find("studios"),
            winner: find("winner"),
        })
    }
}

/// Read a delimited award list from `path` into `store`.
pub fn load_file(
    path: &Path,
    store: &mut MemoryStore,
    options: &IngestOptions,
    progress: Option<&ProgressBar>,
) -> Result<IngestSummary, AwardError> {
    if !path.exists() {
        return Err(AwardError::DataNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| AwardError::io(path, e))?;

    let summary = load_str(&content, store, options, progress)?;
    tracing::info!(
        path = %path.display(),
        rows = summary.rows,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        "award list loaded"
    );
    Ok(summary)
}

/// Import award rows from `content`, exploding each attribution field into
/// one record per producer.
///
/// The first row is the header; it must name `year`, `title` and `producers`.
/// `studios` and `winner` are optional. Fields may be double-quoted to carry the
/// delimiter. A row is a winner when its `winner` field reads `yes` (any case).
pub fn load_str(
    content: &str,
    store: &mut MemoryStore,
    options: &IngestOptions,
    progress: Option<&ProgressBar>,
) -> Result<IngestSummary, AwardError> {
    if !options.delimiter.is_ascii() {
        return Err(AwardError::InvalidArgument(format!(
            "delimiter '{}' is not a single ASCII character",
            options.delimiter
        )));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns = Columns::from_header(reader.headers()?)?;

    let rows: Vec<StringRecord> = reader
        .records()
        .filter(|r| r.as_ref().map_or(true, |rec| rec.iter().any(|f| !f.trim().is_empty())))
        .collect::<Result<_, _>>()?;
    if let Some(pb) = progress {
        pb.set_length(rows.len() as u64);
    }

    let mut summary = IngestSummary::default();

    for row in &rows {
        let line_no = row.position().map_or(0, |p| p.line() as usize);
        let required = |idx: usize, column: &'static str| {
            row.get(idx)
                .map(str::trim)
                .ok_or(AwardError::MissingColumn { line: line_no, column })
        };
        let optional = |idx: Option<usize>| idx.and_then(|i| row.get(i)).map(str::trim).unwrap_or("");

        let year_raw = required(columns.year, "year")?;
        let year: i32 = year_raw.parse().map_err(|_| AwardError::InvalidYear {
            line: line_no,
            value: year_raw.to_string(),
        })?;
        let title = required(columns.title, "title")?;
        let attribution = required(columns.producers, "producers")?;
        let studios = optional(columns.studios);
        let won = optional(columns.winner).eq_ignore_ascii_case("yes");

        for name in producers::split(attribution) {
            let producer = if options.fold_case {
                name.to_lowercase()
            } else {
                name
            };

            let inserted = store.insert(AwardRecord {
                year,
                title: title.to_string(),
                studios: studios.to_string(),
                producer,
                won,
            });
            if inserted {
                summary.inserted += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        summary.rows += 1;
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    Ok(summary)
}
