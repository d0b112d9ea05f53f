//! Reading header-led, delimited edge files into [`Row`] records.
//!
//! The first non-blank line names the columns. `from`, `to` and `distance`
//! must be among them; any other column is kept on the row as an attribute.
//!
//! ```text
//! from to distance road
//! A    B  4        N1
//! B    C  1        N2
//! ```

use crate::error::{Result, SsspError};
use std::io::BufRead;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One data line of the edge file, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    /// 1-based line number in the source text.
    pub line: usize,
    pub from: String,
    pub to: String,
    /// Raw distance text, parsed by the graph builder.
    pub distance: String,
    /// Remaining columns in header order.
    pub attributes: Vec<(String, String)>,
}

impl Row {
    pub fn new(line: usize, from: &str, to: &str, distance: &str) -> Self {
        Row {
            line,
            from: from.to_string(),
            to: to.to_string(),
            distance: distance.to_string(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, column: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Field separator. `None` splits on runs of whitespace.
    pub delimiter: Option<char>,
    pub from_column: String,
    pub to_column: String,
    pub distance_column: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            delimiter: None,
            from_column: "from".to_string(),
            to_column: "to".to_string(),
            distance_column: "distance".to_string(),
        }
    }
}

impl IngestConfig {
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.delimiter {
            None => line.split_whitespace().collect(),
            Some(sep) => line.trim().split(sep).map(str::trim).collect(),
        }
    }
}

fn column_position(header: &[&str], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|column| *column == name)
        .ok_or_else(|| SsspError::MissingColumn(name.to_string()))
}

/// Read every data row from `reader`.
///
/// Rows shorter than the header get empty strings for the missing fields;
/// whether that is acceptable is decided when the graph is built.
pub fn read_rows<R: BufRead>(reader: R, config: &IngestConfig) -> Result<Vec<Row>> {
    let mut lines = reader.lines().enumerate();

    let header: Vec<String> = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                break config.split(&line).into_iter().map(String::from).collect();
            }
            None => return Ok(Vec::new()),
        }
    };
    let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();

    let from_at = column_position(&header_refs, &config.from_column)?;
    let to_at = column_position(&header_refs, &config.to_column)?;
    let distance_at = column_position(&header_refs, &config.distance_column)?;

    let mut rows = Vec::new();
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = config.split(&line);
        let field = |at: usize| fields.get(at).copied().unwrap_or("");

        let mut row = Row::new(index + 1, field(from_at), field(to_at), field(distance_at));
        row.attributes = header
            .iter()
            .enumerate()
            .filter(|(at, _)| ![from_at, to_at, distance_at].contains(at))
            .map(|(at, name)| (name.clone(), field(at).to_string()))
            .collect();
        rows.push(row);
    }

    log::debug!("Read {} rows with columns {:?}", rows.len(), header);
    Ok(rows)
}

/// Read the whole file asynchronously, then parse it with [`read_rows`].
#[cfg(feature = "tokio")]
pub async fn load_rows(
    path: impl AsRef<std::path::Path>,
    config: &IngestConfig,
) -> Result<Vec<Row>> {
    let path = path.as_ref();
    log::info!("Reading edge list from {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    read_rows(text.as_bytes(), config)
}
