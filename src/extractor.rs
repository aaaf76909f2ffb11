use crate::error::ExtractError;
use crate::record::NameRankEntry;

/// Extension used when none is given.
pub const DEFAULT_EXTENSION: &str = "html";

// One table row: rank, male name, female name, each wrapped in <td>...</td>.
const ROW_PATTERN: &str =
    r"(?i)<td>\s*(\d+)\s*</td>\s*<td>\s*([a-z]+)\s*</td>\s*<td>\s*([a-z]+)\s*</td>";

/// Builds the conventional document path `{dir}/{year}.{ext}`.
pub fn source_path<P: AsRef<std::path::Path>>(dir: P, year: i32, extension: &str) -> std::path::PathBuf {
    dir.as_ref().join(format!("{}.{}", year, extension))
}

pub struct RowMatcher {
    // Matches one three-column ranking row.
    row_regex: regex::Regex,
}

impl RowMatcher {
    pub fn new() -> Result<Self, ExtractError> {
        let row_regex = regex::Regex::new(ROW_PATTERN)?;
        Ok(Self { row_regex })
    }

    /// Extracts every well-formed (rank, male, female) row from `text`, in document order.
    ///
    /// Rows that do not match the three-column layout, or whose rank is not a
    /// positive integer, are skipped.
    pub fn extract(&self, text: &str) -> Vec<NameRankEntry> {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for caps in self.row_regex.captures_iter(text) {
            match caps[1].parse::<u32>() {
                Ok(rank) if rank > 0 => entries.push(NameRankEntry {
                    rank,
                    male_name: caps[2].to_string(),
                    female_name: caps[3].to_string(),
                }),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} rows with an invalid rank", skipped);
        }
        entries
    }
}

/// Extracts the ranking rows of `text` with a fresh `RowMatcher`.
pub fn extract_entries(text: &str) -> Result<Vec<NameRankEntry>, ExtractError> {
    Ok(RowMatcher::new()?.extract(text))
}

/// Reads `path` into memory, mapping a missing file to `SourceNotFound`.
///
/// The handle is dropped before returning on every path.
fn read_source(path: &std::path::Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::from_io(path, e))
}

/// Name rankings extracted from one year's document.
#[derive(Debug, Clone)]
pub struct Extractor {
    year: i32,
    path: std::path::PathBuf,
    entries: Vec<NameRankEntry>,
}

impl Extractor {
    /// Opens `{dir}/{year}.html` and extracts its rows.
    pub fn open<P: AsRef<std::path::Path>>(dir: P, year: i32) -> Result<Self, ExtractError> {
        Self::open_with_extension(dir, year, DEFAULT_EXTENSION)
    }

    /// Opens `{dir}/{year}.{extension}` and extracts its rows.
    ///
    /// # Errors
    /// * `SourceNotFound` with the attempted path if the document is absent.
    /// * `Read` for any other I/O failure.
    pub fn open_with_extension<P: AsRef<std::path::Path>>(
        dir: P,
        year: i32,
        extension: &str,
    ) -> Result<Self, ExtractError> {
        let path = source_path(dir, year, extension);
        let text = read_source(&path)?;
        let entries = extract_entries(&text)?;
        tracing::debug!("Extracted {} rows from {}", entries.len(), path.display());

        Ok(Extractor { year, path, entries })
    }

    /// Builds an extractor over already-extracted rows.
    pub fn from_entries(year: i32, entries: Vec<NameRankEntry>) -> Self {
        Extractor {
            year,
            path: std::path::PathBuf::new(),
            entries,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn entries(&self) -> &[NameRankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies `f` to every entry in rank order and collects the results.
    pub fn map_entries<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&NameRankEntry) -> T,
    {
        self.entries.iter().map(f).collect()
    }
}
