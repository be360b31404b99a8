use thiserror::Error;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "avif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "mov"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("no media reference")]
    Missing,
    #[error("unsupported media type: {0}")]
    Unsupported(String),
}

impl MediaKind {
    pub fn classify(src: &str) -> Result<Self, MediaError> {
        let path = src
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        if path.is_empty() {
            return Err(MediaError::Missing);
        }
        let file = path.rsplit('/').next().unwrap_or(path);
        let ext = match file.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => return Err(MediaError::Unsupported(file.to_string())),
        };
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Video)
        } else {
            Err(MediaError::Unsupported(ext))
        }
    }
}

/// Turns a public asset path into a URL, escaping the spaces some gallery
/// file names carry. Absolute URLs pass through untouched.
pub fn asset_url(path: &str) -> String {
    if path.contains("://") {
        return path.to_string();
    }
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(MediaKind::classify("/assets/gallery/Campus Tank Event.png"), Ok(MediaKind::Image));
        assert_eq!(MediaKind::classify("/assets/a.JPEG"), Ok(MediaKind::Image));
        assert_eq!(MediaKind::classify("/assets/clip.mp4?v=2#t=3"), Ok(MediaKind::Video));
        assert_eq!(
            MediaKind::classify("https://cdn.simpleicons.org/c.svg"),
            Ok(MediaKind::Image)
        );
    }

    #[test]
    fn test_classify_failures() {
        assert_eq!(MediaKind::classify(""), Err(MediaError::Missing));
        assert_eq!(MediaKind::classify("  ?x=1"), Err(MediaError::Missing));
        assert_eq!(
            MediaKind::classify("/assets/notes.txt"),
            Err(MediaError::Unsupported("txt".to_string()))
        );
        assert!(MediaKind::classify("/assets/.png").is_err());
        assert!(MediaKind::classify("/assets/README").is_err());
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(
            asset_url("/assets/gallery/Campus Tank Event.png"),
            "/assets/gallery/Campus%20Tank%20Event.png"
        );
        assert_eq!(asset_url("/assets/a-b_c.png"), "/assets/a-b_c.png");
        assert_eq!(
            asset_url("https://cdn.simpleicons.org/c/00599C"),
            "https://cdn.simpleicons.org/c/00599C"
        );
    }
}
