//! SIF edge-list output

use crate::error::ExportError;
use signet_domain::Relation;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the union of relations as a SIF edge list
///
/// Relations repeated across doses collapse to one line; lines are written
/// in sorted order so output files diff cleanly between runs.
pub fn write_sif<'a, W, I>(writer: &mut W, relations: I) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Relation>,
{
    let lines: BTreeSet<String> = relations.into_iter().map(Relation::sif_line).collect();

    for line in &lines {
        writeln!(writer, "{}", line)?;
    }

    Ok(lines.len())
}

/// Write a SIF edge list to a file path
pub fn write_sif_path<'a, I>(path: impl AsRef<Path>, relations: I) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Relation>,
{
    let path = path.as_ref();
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    let count = write_sif(&mut file, relations)?;

    info!(path = %path.display(), edges = count, "wrote edge list");
    Ok(count)
}
