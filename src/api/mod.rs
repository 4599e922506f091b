pub(crate) mod matches;
pub(crate) mod tournaments;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, TowerfallError};

pub(crate) const BASE_URL: &str = "https://drunkenfall.com";

/// Fetch a URL and deserialize the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching record");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| TowerfallError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let body = read_body(response, url).await?;
    serde_json::from_str(&body).map_err(|e| TowerfallError::Json {
        url: url.to_owned(),
        source: e,
    })
}

/// Post a urlencoded form and require a success status.
pub(crate) async fn post_form(
    client: &reqwest::Client,
    url: &str,
    form: &[(&str, &str)],
) -> Result<()> {
    debug!(url, "posting form");

    let response = client
        .post(url)
        .form(form)
        .send()
        .await
        .map_err(|e| TowerfallError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    read_body(response, url).await.map(drop)
}

async fn read_body(response: reqwest::Response, url: &str) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(TowerfallError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| TowerfallError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Join `base` and `path` without doubling the slash.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
