//! Matrix Market reader for seed graphs
//!
//! # Format
//!
//! ```text
//! %%MatrixMarket matrix coordinate real general
//! % comment lines start with '%'
//! 3 3 2          <- rows cols nonzeros
//! 1 2 1.0        <- row col value, 1-indexed
//! 2 3 0.5
//! ```
//!
//! The value column is optional (pattern matrices get weight `1.0`). The
//! banner's last field sets the symmetry: `symmetric` and `hermitian` mirror
//! every off-diagonal entry, `skew-symmetric` mirrors it with the value
//! negated, `general` (or no banner) stores entries as listed.
//!
//! Loading as [`Direction::Undirected`] requires a symmetric result, so a
//! `general` file must list both orientations of every edge.

use super::{CsrGraph, Direction};
use anyhow::{anyhow, bail, ensure, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Symmetry field of the `%%MatrixMarket` banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Symmetry {
    #[default]
    General,
    Symmetric,
    SkewSymmetric,
}

impl Symmetry {
    fn from_banner(banner: &str, lineno: usize) -> Result<Self> {
        // %%MatrixMarket <object> <format> <field> <symmetry>
        let Some(field) = banner.split_whitespace().nth(4) else {
            return Ok(Self::General);
        };
        match field.to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "symmetric" | "hermitian" => Ok(Self::Symmetric),
            "skew-symmetric" => Ok(Self::SkewSymmetric),
            other => bail!("Line {}: unknown symmetry `{other}`", lineno + 1),
        }
    }
}

impl CsrGraph {
    /// Load a graph from a Matrix Market file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or is malformed
    pub fn from_matrix_file<P: AsRef<Path>>(path: P, direction: Direction) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        read_matrix_market(BufReader::new(file), direction)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Parse Matrix Market coordinate text into a [`CsrGraph`]
///
/// # Errors
///
/// Returns error on a missing or malformed header, a non-square matrix, an
/// unparsable or out-of-range entry, or an entry count that differs from the
/// header
pub fn read_matrix_market<R: BufRead>(reader: R, direction: Direction) -> Result<CsrGraph> {
    let mut symmetry = Symmetry::default();
    let mut header: Option<(usize, usize)> = None;
    let mut sources = Vec::new();
    let mut targets = Vec::new();
    let mut weights = Vec::new();
    let mut entries = 0_usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", lineno + 1))?;
        let trimmed = line.trim();

        if let Some(banner) = trimmed.strip_prefix("%%") {
            symmetry = Symmetry::from_banner(banner, lineno)?;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        let Some((num_nodes, expected)) = header else {
            ensure!(
                tokens.len() == 3,
                "Line {} must contain `rows cols nonzeros`",
                lineno + 1
            );
            let rows = parse_count(tokens[0], lineno)?;
            let cols = parse_count(tokens[1], lineno)?;
            let nonzeros = parse_count(tokens[2], lineno)?;
            ensure!(
                rows == cols,
                "Line {}: adjacency matrix must be square, got {rows}x{cols}",
                lineno + 1
            );
            ensure!(
                u32::try_from(rows).is_ok(),
                "Line {}: {rows} rows exceed the u32 index space",
                lineno + 1
            );
            header = Some((rows, nonzeros));
            continue;
        };

        if entries == expected {
            bail!("Line {}: more entries than the {expected} declared", lineno + 1);
        }
        ensure!(
            tokens.len() == 2 || tokens.len() == 3,
            "Line {} does not contain `row col [value]`",
            lineno + 1
        );

        let row = parse_index(tokens[0], num_nodes, lineno)?;
        let col = parse_index(tokens[1], num_nodes, lineno)?;
        let weight = match tokens.get(2) {
            Some(token) => token.parse::<f32>().map_err(|_| {
                anyhow!("Cannot parse value {token} at input line {}", lineno + 1)
            })?,
            None => 1.0,
        };

        sources.push(row);
        targets.push(col);
        weights.push(weight);
        if row != col {
            match symmetry {
                Symmetry::General => {}
                Symmetry::Symmetric => {
                    sources.push(col);
                    targets.push(row);
                    weights.push(weight);
                }
                Symmetry::SkewSymmetric => {
                    sources.push(col);
                    targets.push(row);
                    weights.push(-weight);
                }
            }
        }
        entries += 1;
    }

    let Some((num_nodes, expected)) = header else {
        bail!("Missing `rows cols nonzeros` header");
    };
    ensure!(
        entries == expected,
        "Header declares {expected} entries but {entries} were found"
    );

    CsrGraph::from_arcs(num_nodes, &sources, &targets, Some(&weights), direction)
}

fn parse_count(s: &str, lineno: usize) -> Result<usize> {
    s.parse::<usize>()
        .map_err(|_| anyhow!("Cannot parse count {s} at input line {}", lineno + 1))
}

/// Parse a 1-indexed vertex id into a 0-indexed `u32`
fn parse_index(s: &str, num_nodes: usize, lineno: usize) -> Result<u32> {
    let index = parse_count(s, lineno)?;
    if index == 0 || index > num_nodes {
        bail!(
            "Index {index} at input line {} is outside 1..={num_nodes}",
            lineno + 1
        );
    }
    #[allow(clippy::cast_possible_truncation)] // num_nodes fits in u32 (checked on the header)
    let zero_based = (index - 1) as u32;
    Ok(zero_based)
}
