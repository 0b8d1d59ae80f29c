use crate::error::Error;
use crate::utils::limited_spawner::LimitedSpawner;

/// Outcome of one presence check. Never mutated after creation; the prober
/// returns these in the same order the candidate URLs came in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub exists: bool,
}

async fn probe_one(client: &reqwest::Client, url: &str) -> bool {
    // A transport failure counts as absent, matching a 404. The warning keeps
    // the conflation visible to the operator.
    let exists = match client.get(url).send().await {
        Ok(response) => response.status() == reqwest::StatusCode::OK,
        Err(err) => {
            eprintln!("warning: probe of {} failed, treating as absent: {}", url, err);
            false
        }
    };
    println!("checking {} ... {}", url, if exists { "found" } else { "absent" });
    exists
}

/// Checks every candidate URL once and reports (url, exists) pairs, absent
/// entries included, in input order regardless of completion order.
pub async fn probe_all(
    client: &reqwest::Client,
    urls: &[String],
    concurrency: usize,
) -> Result<Vec<ProbeResult>, Error> {
    let spawner = LimitedSpawner::new(concurrency);

    let mut handles = Vec::with_capacity(urls.len());
    for url in urls {
        // reqwest::Client is a cheap handle to a shared pool.
        let client = client.clone();
        let url = url.clone();
        let handle = spawner
            .spawn(async move {
                let exists = probe_one(&client, &url).await;
                ProbeResult { url, exists }
            })
            .await?;
        handles.push(handle);
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }
    Ok(results)
}
