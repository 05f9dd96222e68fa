use crate::{
    client::{build_http, send_json, trim_base},
    error::Error,
    headers::ImageFormat,
    models::image::{Image, ImagesQuery, ImagesResponse, PostImage, UploadResponse},
    result::Result,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{
    header::{HeaderName, USER_AGENT},
    multipart::{Form, Part},
    Client as ReqwestClient,
};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Uploads of this many bytes or more go through multipart and need
/// experimental mode.
pub const MB: usize = 1_000_000;

const TENANCY: &str = "x-miki-tenancy";

/// Construction-time settings for [`ImghoardClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    endpoint: String,
    tenancy: String,
    user_agent: String,
    experimental: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://imgh.miki.ai".to_string(),
            tenancy: "prod".to_string(),
            user_agent: "MikiApiClient/1.0".to_string(),
            experimental: false,
        }
    }
}

impl Config {
    /// Sets the base URL images are listed from and uploaded to.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the value of the `x-miki-tenancy` header.
    #[must_use]
    pub fn tenancy(mut self, tenancy: impl Into<String>) -> Self {
        self.tenancy = tenancy.into();
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enables uploads of 1MB and above.
    #[must_use]
    pub fn experimental(mut self, experimental: bool) -> Self {
        self.experimental = experimental;
        self
    }
}

/// Operations offered by an Imghoard instance.
#[async_trait]
pub trait Imghoard {
    /// Fetches the page of images described by `query`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Response`] on a non-success status, or if the
    /// request or body decoding fails.
    async fn query(&self, query: ImagesQuery) -> Result<ImagesResponse>;

    /// Fetches a single image by its snowflake ID.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Response`] on a non-success status, or if the
    /// request or body decoding fails.
    async fn image(&self, id: u64) -> Result<Image>;

    /// Uploads an image and returns its URL.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotSupported`] for 1MB or more without
    /// experimental mode, [`Error::UnsupportedFormat`] for anything that is
    /// not png, jpeg or gif, and [`Error::Response`] on a non-success status.
    async fn post_image(&self, bytes: &[u8], tags: &[&str]) -> Result<String>;

    /// Fetches the first page of images matching `tags`.
    ///
    /// # Errors
    ///
    /// See [`Imghoard::query`].
    async fn images(&self, tags: &[&str]) -> Result<ImagesResponse> {
        self.images_page(0, tags).await
    }

    /// Fetches `page` of the images matching `tags`.
    ///
    /// # Errors
    ///
    /// See [`Imghoard::query`].
    async fn images_page(&self, page: u32, tags: &[&str]) -> Result<ImagesResponse> {
        self.query(ImagesQuery::new(page, tags)).await
    }

    /// Fetches the page after `response` using the same tags.
    ///
    /// # Errors
    ///
    /// See [`Imghoard::query`].
    async fn next_page(&self, response: &ImagesResponse) -> Result<ImagesResponse> {
        self.query(response.next_page()).await
    }
}

/// HTTP client for an Imghoard instance.
#[derive(Debug)]
pub struct ImghoardClient {
    http: ReqwestClient,
    config: Config,
}

impl ImghoardClient {
    /// Creates a client for the instance described by `config`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] if the tenancy or user agent
    /// cannot be sent as a header, or if the transport cannot be built.
    pub fn new(mut config: Config) -> Result<Self> {
        let http = build_http([
            (HeaderName::from_static(TENANCY), config.tenancy.as_str()),
            (USER_AGENT, config.user_agent.as_str()),
        ])?;
        config.endpoint = trim_base(config.endpoint);
        Ok(Self { http, config })
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Returns whether experimental features are enabled.
    pub fn is_experimental(&self) -> bool {
        self.config.experimental
    }

    /// Reads `reader` to the end and uploads the bytes as an image.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Io`] if reading fails, otherwise as
    /// [`Imghoard::post_image`].
    pub async fn post_image_reader<R>(&self, mut reader: R, tags: &[&str]) -> Result<String>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        self.post_image(&bytes, tags).await
    }

    async fn post_inline(&self, format: ImageFormat, bytes: &[u8], tags: &[&str]) -> Result<String> {
        log::debug!("uploading {} bytes inline", bytes.len());
        let body = PostImage {
            tags,
            data: format!("data:{};base64,{}", format.mime(), STANDARD.encode(bytes)),
        };
        let request = self.http.post(&self.config.endpoint).json(&body);
        log::info!("upload to {} dispatched", self.config.endpoint);
        let reply: UploadResponse = send_json(request).await?;
        Ok(reply.file)
    }

    async fn post_multipart(
        &self,
        format: ImageFormat,
        bytes: &[u8],
        tags: &[&str],
    ) -> Result<String> {
        log::debug!("uploading {} bytes as multipart", bytes.len());
        let form = Form::new()
            .text("data-type", format.mime())
            .part("data", Part::bytes(bytes.to_vec()))
            .text("tags", tags.join(","));
        let request = self.http.post(&self.config.endpoint).multipart(form);
        log::info!("multipart upload to {} dispatched", self.config.endpoint);
        let reply: UploadResponse = send_json(request).await?;
        Ok(reply.file)
    }
}

#[async_trait]
impl Imghoard for ImghoardClient {
    async fn query(&self, query: ImagesQuery) -> Result<ImagesResponse> {
        let url = format!("{}{}", self.config.endpoint, query.query_string());
        log::info!("request for {} dispatched", url);
        let images: Vec<Image> = send_json(self.http.get(&url)).await?;
        Ok(ImagesResponse::new(images, query))
    }

    async fn image(&self, id: u64) -> Result<Image> {
        let url = format!("{}/{id}", self.config.endpoint);
        log::info!("request for {} dispatched", url);
        send_json(self.http.get(&url)).await
    }

    async fn post_image(&self, bytes: &[u8], tags: &[&str]) -> Result<String> {
        if bytes.len() >= MB && !self.config.experimental {
            return Err(Error::NotSupported(
                "in order to upload images larger than 1MB you need to enable experimental features in the config"
                    .to_string(),
            ));
        }

        let format = ImageFormat::detect(bytes).ok_or(Error::UnsupportedFormat)?;

        if bytes.len() < MB {
            self.post_inline(format, bytes, tags).await
        } else {
            self.post_multipart(format, bytes, tags).await
        }
    }
}
