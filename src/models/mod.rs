/// Imghoard models: [`Image`](image::Image), [`ImagesResponse`](image::ImagesResponse)
/// and the [`ImagesQuery`](image::ImagesQuery) pagination cursor.
pub mod image;

/// Leaderboards models and request options.
pub mod leaderboards;
