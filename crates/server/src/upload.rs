use crate::config::UploadConfig;
use chargemap::snapshot::Snapshot;
use reqwest::header::CONTENT_TYPE;
use tracing::{error, info};

/// Posts the snapshot to the configured drive. Failures are logged and dropped.
pub async fn upload_snapshot(client: reqwest::Client, config: UploadConfig, snapshot: Snapshot) {
    let file_name = snapshot.file_name();
    let body = match snapshot.to_bytes() {
        Ok(body) => body,
        Err(err) => {
            error!("Failed to encode snapshot: {err}");
            return;
        }
    };

    let response = client
        .post(&config.url)
        .bearer_auth(&config.token)
        .header(CONTENT_TYPE, "application/json")
        .header("X-File-Name", &file_name)
        .body(body)
        .send()
        .await;

    match response {
        Ok(response) if response.status().is_success() => info!("Uploaded {file_name}"),
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Upload of {file_name} failed with {status}: {body}");
        }
        Err(err) => error!("Failed to upload {file_name}: {err}"),
    }
}
