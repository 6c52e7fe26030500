use rust_embed::RustEmbed;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::SiteError;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// Copies the embedded static files to `<output_dir>/static`.
pub fn write_assets(output_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let static_dir = output_dir.join("static");
    let mut written = Vec::new();

    for name in Assets::iter() {
        let Some(file) = Assets::get(&name) else {
            continue;
        };

        let path = static_dir.join(&*name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SiteError::io(parent, source))?;
        }

        fs::write(&path, file.data.as_ref()).map_err(|source| SiteError::io(&path, source))?;
        written.push(path);
    }

    tracing::debug!(count = written.len(), "assets copied");

    Ok(written)
}
