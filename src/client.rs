use crate::{error::Error, result::Result};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    Client as ReqwestClient, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;

/// Builds the underlying transport with a fixed set of default headers.
///
/// `Authorization` values are marked sensitive so they never show up in
/// `Debug` output.
pub(crate) fn build_http<'a, I>(headers: I) -> Result<ReqwestClient>
where
    I: IntoIterator<Item = (HeaderName, &'a str)>,
{
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let mut value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidArgument(format!("bad value for header `{name}`")))?;
        value.set_sensitive(name == AUTHORIZATION);
        map.insert(name, value);
    }
    ReqwestClient::builder()
        .default_headers(map)
        .build()
        .map_err(Into::into)
}

/// Strips trailing slashes so routes can be appended with a leading `/`.
pub(crate) fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Sends a request and decodes a successful JSON body.
pub(crate) async fn send_json<T>(request: RequestBuilder) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = request.send().await?;
    read_json(response).await
}

/// Decodes a JSON body, failing with [`Error::Response`] on non-success statuses.
pub(crate) async fn read_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    log::info!("response status: {}", status);

    if !status.is_success() {
        let reason = status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), ToString::to_string);
        return Err(Error::Response(reason));
    }

    response.json::<T>().await.map_err(Into::into)
}
