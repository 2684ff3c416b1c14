//! Output file writer

use crate::model::OutputGraph;
use crate::vocab::OUTPUT_PREFIXES;
use ldgap_common::rdf::to_turtle;
use std::path::Path;
use tracing::info;

/// Write the output graph as UTF-8 Turtle, replacing any existing file
pub async fn write_output(graph: &OutputGraph, path: &Path) -> ldgap_common::Result<()> {
    let bytes = to_turtle(graph.as_graph(), OUTPUT_PREFIXES)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &bytes).await?;

    info!(
        path = %path.display(),
        statements = graph.len(),
        bytes = bytes.len(),
        "Wrote output graph"
    );

    Ok(())
}
