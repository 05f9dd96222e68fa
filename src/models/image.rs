use serde::{Deserialize, Serialize};

/// An image hosted on Imghoard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Snowflake ID of the image.
    #[serde(rename = "ID")]
    id: u64,
    /// Tags attached to the image, in server order.
    #[serde(rename = "Tags", default)]
    tags: Vec<String>,
    /// Where the image can be downloaded from.
    #[serde(rename = "URL")]
    url: String,
}

impl Image {
    /// Returns the snowflake ID of the image.
    pub fn id(&self) -> u64 {
        self.id
    }
    /// Returns the tags attached to the image.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
    /// Returns the URL of the image.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Tags and page number identifying one page of an image search.
///
/// Pagination is rebuilt entirely on the client side: the next page is the
/// same tags with the page number incremented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImagesQuery {
    tags: Vec<String>,
    page: u32,
}

impl ImagesQuery {
    /// Creates a query for `page` filtered by `tags`.
    pub fn new<S: AsRef<str>>(page: u32, tags: &[S]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.as_ref().to_string()).collect(),
            page,
        }
    }

    /// Returns the tag filter.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the page number. Page `0` is the first page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the query for the following page with the same tags.
    ///
    /// The last representable page is its own successor.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            tags: self.tags.clone(),
            page: self.page.saturating_add(1),
        }
    }

    /// Renders the query string appended to the endpoint.
    ///
    /// Page `0` and an empty tag list are left out, so the first unfiltered
    /// page renders as an empty string. Otherwise the result looks like
    /// `?page2&cat+cute`.
    pub fn query_string(&self) -> String {
        let mut args = Vec::with_capacity(2);
        if self.page > 0 {
            args.push(format!("page{}", self.page));
        }
        if !self.tags.is_empty() {
            args.push(self.tags.join("+"));
        }

        if args.is_empty() {
            String::new()
        } else {
            format!("?{}", args.join("&"))
        }
    }
}

/// One page of images together with the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagesResponse {
    images: Vec<Image>,
    query: ImagesQuery,
}

impl ImagesResponse {
    /// Wraps a page of `images` fetched with `query`.
    pub fn new(images: Vec<Image>, query: ImagesQuery) -> Self {
        Self { images, query }
    }

    /// Returns the images on this page.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Returns the tags used to fetch this page.
    pub fn query_tags(&self) -> &[String] {
        self.query.tags()
    }

    /// Returns the page number of this response.
    pub fn page(&self) -> u32 {
        self.query.page()
    }

    /// Returns the query that produced this page.
    pub fn query(&self) -> &ImagesQuery {
        &self.query
    }

    /// Returns the query for the page after this one.
    pub fn next_page(&self) -> ImagesQuery {
        self.query.next_page()
    }
}

impl std::ops::Deref for ImagesResponse {
    type Target = Vec<Image>;

    fn deref(&self) -> &Self::Target {
        &self.images
    }
}

/// JSON body for inline uploads.
#[derive(Debug, Serialize)]
pub(crate) struct PostImage<'a> {
    #[serde(rename = "Tags")]
    pub(crate) tags: &'a [&'a str],
    #[serde(rename = "Data")]
    pub(crate) data: String,
}

/// Body returned after a successful upload.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(rename = "File")]
    pub(crate) file: String,
}
