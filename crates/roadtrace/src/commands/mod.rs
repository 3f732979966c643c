pub mod compare;
pub mod completion;
pub mod config;
pub mod inspect;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use roadtrace::{GraphDocument, RoadGraph};

/// Read and build a graph file, failing with the file name in the message.
pub(crate) fn load_graph(path: &Path) -> Result<RoadGraph> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let doc = GraphDocument::read(path)?;
    RoadGraph::from_document(doc).with_context(|| format!("Invalid graph in {}", path.display()))
}
