use std::fmt;

const PNG: &[u8] = b"\x89PNG";
const JPEG: &[u8] = b"\xFF\xD8";
const GIF87A: &[u8] = b"GIF87a";
const GIF89A: &[u8] = b"GIF89a";

/// Image formats Imghoard accepts for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
    /// JPEG / JFIF.
    Jpeg,
    /// GIF, both the 87a and 89a revisions.
    Gif,
}

impl ImageFormat {
    /// Classifies `bytes` by their leading magic bytes.
    ///
    /// Returns `None` when no supported signature matches.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG) {
            Some(Self::Png)
        } else if bytes.starts_with(JPEG) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(GIF89A) || bytes.starts_with(GIF87A) {
            Some(Self::Gif)
        } else {
            None
        }
    }

    /// Short label used in data URIs, e.g. `png`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// Full content type, e.g. `image/png`.
    pub fn mime(self) -> String {
        format!("image/{}", self.prefix())
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::ImageFormat;

    #[test]
    fn detects_known_signatures() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(ImageFormat::detect(&png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::detect(b"GIF87a\x01\x00"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::detect(b"GIF89a\x01\x00"), Some(ImageFormat::Gif));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(ImageFormat::detect(&[]), None);
        assert_eq!(ImageFormat::detect(&[0xFF]), None);
        assert_eq!(ImageFormat::detect(b"GIF88a"), None);
        assert_eq!(ImageFormat::detect(b"\x89PN"), None);
        assert_eq!(ImageFormat::detect(b"RIFF\0\0\0\0WEBP"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(ImageFormat::Png.prefix(), "png");
        assert_eq!(ImageFormat::Jpeg.to_string(), "jpeg");
        assert_eq!(ImageFormat::Gif.mime(), "image/gif");
    }
}
