use std::path::{Path, PathBuf};

use tokio::fs;

use crate::downloader::prober::ProbeResult;
use crate::error::Error;
use crate::utils::limited_spawner::LimitedSpawner;

fn basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

async fn fetch_one(client: &reqwest::Client, url: &str, dest: &Path) -> Result<(), Error> {
    println!("downloading {}", url);
    let response = client.get(url).send().await.map_err(|err| Error::Network {
        url: url.to_string(),
        source: err,
    })?;
    // Whatever the second request returns is written as-is; the probe result
    // is not re-checked here. The directory contents are the source of truth.
    let bytes = response.bytes().await.map_err(|err| Error::Network {
        url: url.to_string(),
        source: err,
    })?;
    fs::write(dest, &bytes)
        .await
        .map_err(|err| Error::filesystem(dest, err))
}

/// Downloads every present URL into `output_dir` (created if absent), one
/// file per URL named by its basename. Unlike a failed probe, a failed
/// download aborts the run.
pub async fn fetch_all(
    client: &reqwest::Client,
    results: &[ProbeResult],
    output_dir: &Path,
    concurrency: usize,
) -> Result<(), Error> {
    fs::create_dir_all(output_dir)
        .await
        .map_err(|err| Error::filesystem(output_dir, err))?;

    let spawner = LimitedSpawner::new(concurrency);
    let mut handles = Vec::new();
    for result in results.iter().filter(|r| r.exists) {
        let client = client.clone();
        let url = result.url.clone();
        let dest: PathBuf = output_dir.join(basename(&url));
        let handle = spawner
            .spawn(async move { fetch_one(&client, &url, &dest).await })
            .await?;
        handles.push(handle);
    }

    // Drain every handle before reporting, so no task is left writing into
    // the output directory after an error has already propagated.
    let mut first_err: Option<Error> = None;
    for handle in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(err) => Err(err.into()),
        };
        if let Err(err) = result {
            first_err.get_or_insert(err);
        }
    }
    match first_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
