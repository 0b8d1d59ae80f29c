use std::path::Path;

use tokio::fs;

use crate::downloader::prober::ProbeResult;
use crate::error::Error;

/// Writes every candidate URL, found or not, one per line. The manifest is a
/// side-channel record for the operator; nothing in-process reads it back.
pub async fn write_manifest(path: &Path, results: &[ProbeResult]) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| Error::filesystem(parent, err))?;
        }
    }

    let mut contents = String::new();
    for result in results {
        contents.push_str(&result.url);
        contents.push('\n');
    }

    fs::write(path, contents)
        .await
        .map_err(|err| Error::filesystem(path, err))
}
