pub mod fetcher;
pub mod prober;

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::concat::Concatenator;
use crate::error::Error;
use crate::manifest;
use crate::sequence::SequenceSpec;
use crate::utils::natsort;

/// Everything a run needs, passed in explicitly so tests can point the whole
/// pipeline at temp directories.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub base_url: String,
    pub start_filename: String,
    pub end_filename: String,
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub output_file: PathBuf,
    pub concurrency: usize,
}

/// Lists the downloaded `.ts` files and orders them naturally, so segment 10
/// lands after segment 9 rather than between 1 and 2.
async fn ordered_segments(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|err| Error::filesystem(dir, err))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|err| Error::filesystem(dir, err))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".ts") {
            names.push(name);
        }
    }
    names.sort_by(|a, b| natsort::natural_cmp(a, b));
    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// Runs the phases strictly in sequence: infer the sequence, probe every
/// candidate URL, write the manifest, download what exists, then hand the
/// naturally-ordered segment files to the concatenator.
pub async fn run(opts: &RunOptions, concatenator: &impl Concatenator) -> Result<(), Error> {
    let spec = SequenceSpec::from_filenames(
        &opts.base_url,
        &opts.start_filename,
        &opts.end_filename,
    )?;
    let urls = spec.urls();

    let client = reqwest::Client::new();
    let results = prober::probe_all(&client, &urls, opts.concurrency).await?;

    // The manifest records every candidate, found or not, before any
    // download starts.
    manifest::write_manifest(&opts.manifest_path, &results).await?;

    fetcher::fetch_all(&client, &results, &opts.output_dir, opts.concurrency).await?;

    let segments = ordered_segments(&opts.output_dir).await?;
    if segments.is_empty() {
        // Never hand ffmpeg an empty concat list.
        return Err(Error::NoSegments);
    }
    println!(
        "combining {} segments into {}",
        segments.len(),
        opts.output_file.display()
    );
    concatenator.concatenate(&segments, &opts.output_file).await
}
