//! HTTP GET helpers shared by the JSON sources.

use crate::error::{Result, SourceError};
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build the shared client used by every HTTP source.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SourceError::transport("http client", e))
}

/// GET `url` and return the body. Any non-2xx status is a transport error.
pub async fn get_text(client: &reqwest::Client, url: &str) -> Result<String> {
    log::debug!("GET {url}", url = url.on_blue());
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::transport(url, e))?;

    let status = response.status();
    log::debug!("{status} <- {url}");
    if !status.is_success() {
        return Err(SourceError::transport(url, format!("HTTP status {status}")));
    }

    response
        .text()
        .await
        .map_err(|e| SourceError::transport(url, e))
}

/// GET `url` and decode the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let body = get_text(client, url).await?;
    parse_json(url, &body)
}

/// Decode `body`, reporting the JSON path of the first mismatch.
pub fn parse_json<T: DeserializeOwned>(target: &str, body: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::trace!("BODY START:\n\n{body}\n\nBODY END\n");
        SourceError::Decode {
            target: target.to_string(),
            path: e.path().to_string(),
            reason: e.inner().to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Outer {
        inner: Vec<Inner>,
    }

    #[derive(Deserialize, Debug)]
    struct Inner {
        #[allow(dead_code)]
        prefix: String,
    }

    #[test]
    fn test_parse_json_ok() {
        let parsed: Outer = parse_json("t", r#"{"inner":[{"prefix":"1.0.0.0/8"}]}"#).unwrap();
        assert_eq!(parsed.inner.len(), 1);
    }

    #[test]
    fn test_parse_json_reports_path() {
        let err = parse_json::<Outer>("t", r#"{"inner":[{"prefix":"a"},{"nope":1}]}"#)
            .unwrap_err();
        match err {
            SourceError::Decode { path, .. } => assert!(path.starts_with("inner[1]"), "path={path}"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
