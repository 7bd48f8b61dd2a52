use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};

pub fn build_client(user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        // Avoid macOS system proxy lookup that can panic in sandboxed contexts.
        .no_proxy()
        .user_agent(user_agent)
        .build()
        .map_err(Error::Client)?;
    Ok(client)
}

/// Single GET. Anything but a 200 response is an error; there are no retries.
pub async fn try_fetch(client: &Client, url: &str) -> Result<Vec<u8>> {
    let transport = |source| Error::Transport {
        url: url.to_string(),
        source,
    };

    let resp = client.get(url).send().await.map_err(transport)?;
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = resp.bytes().await.map_err(transport)?;
    log::info!("Downloaded {} bytes from {url}", bytes.len());
    Ok(bytes.to_vec())
}

/// Downloads the roster, logging and swallowing any failure.
pub async fn fetch_document(client: &Client, url: &str) -> Option<Vec<u8>> {
    match try_fetch(client, url).await {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::error!("Cannot download roster file: {err}");
            None
        }
    }
}
