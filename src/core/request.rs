use crate::domain::model::QrRequest;
use crate::utils::error::{QrError, Result};
use url::Url;

const RESERVED_KEYS: [&str; 2] = ["size", "data"];

/// Builds `<endpoint>?size=<w>x<h>&data=<payload>` with the payload percent-encoded
/// as a URL component. Other query parameters on the endpoint are kept in front;
/// any `size`/`data` already there and any fragment are dropped.
pub fn build_request_url(endpoint: &str, request: &QrRequest) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(QrError::InvalidConfigValueError {
                field: "endpoint".to_string(),
                value: endpoint.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            })
        }
    }

    let params = format!(
        "size={}&data={}",
        request.size,
        urlencoding::encode(&request.payload)
    );

    let mut pairs: Vec<&str> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty() && !is_reserved_pair(pair))
        .collect();
    pairs.push(&params);

    let query = pairs.join("&");
    url.set_query(Some(&query));
    url.set_fragment(None);

    Ok(url)
}

fn is_reserved_pair(pair: &str) -> bool {
    let key = pair.split('=').next().unwrap_or_default();
    urlencoding::decode(key)
        .map(|key| RESERVED_KEYS.contains(&key.as_ref()))
        .unwrap_or(false)
}
