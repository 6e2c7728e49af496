use std::fs;
use std::path::{Path, PathBuf};

use folio_core::{BlogPost, Catalog, CatalogError, Project};
use folio_logging::folio_info;
use serde::Deserialize;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../../content/catalog.ron");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    posts: Vec<BlogPost>,
    #[serde(default)]
    projects: Vec<Project>,
}

/// Loads the catalog from `path`, or the built-in content when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, ContentError> {
    let Some(path) = path else {
        return parse_catalog(BUILTIN_CATALOG);
    };
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&text)?;
    folio_info!("Loaded catalog from {:?}", path);
    Ok(catalog)
}

pub fn parse_catalog(text: &str) -> Result<Catalog, ContentError> {
    let file: CatalogFile = ron::from_str(text)?;
    Ok(Catalog::new(file.posts, file.projects)?)
}
