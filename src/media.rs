const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "ogg", "mov"];
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// How a media path should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Video,
    Image,
    Unknown,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Unknown => "unknown",
        }
    }
}

/// Lowercased text after the last `.`, if any.
fn extension(path: &str) -> Option<String> {
    path.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Classify by file extension, case-insensitively. Video wins over image.
pub fn classify(path: &str) -> MediaKind {
    let Some(ext) = extension(path) else {
        return MediaKind::Unknown;
    };
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Video
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Image
    } else {
        MediaKind::Unknown
    }
}

pub fn is_video(path: &str) -> bool {
    classify(path) == MediaKind::Video
}

pub fn is_image(path: &str) -> bool {
    classify(path) == MediaKind::Image
}

/// Poster to show for `video_path`: the candidate itself, unless it is
/// missing, empty, or another video.
pub fn poster_for<'a>(_video_path: &str, candidate: Option<&'a str>) -> Option<&'a str> {
    candidate.filter(|poster| !poster.is_empty() && !is_video(poster))
}

/// Content type for files served from the public directory.
pub fn content_type(path: &str) -> Option<&'static str> {
    match extension(path)?.as_str() {
        "html" | "htm" => Some("text/html; charset=utf-8"),
        "css" => Some("text/css; charset=utf-8"),
        "js" => Some("application/javascript"),
        "json" => Some("application/json"),
        "xml" => Some("application/xml"),
        "txt" => Some("text/plain; charset=utf-8"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "ogg" => Some("video/ogg"),
        "mov" => Some("video/quicktime"),
        "woff" => Some("font/woff"),
        "woff2" => Some("font/woff2"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("a.MP4"), MediaKind::Video);
        assert_eq!(classify("clip.WebM"), MediaKind::Video);
        assert_eq!(classify("a.png"), MediaKind::Image);
        assert_eq!(classify("a.svg"), MediaKind::Image);
        assert_eq!(classify("photo.JPEG"), MediaKind::Image);
        assert_eq!(classify("a.txt"), MediaKind::Unknown);
    }

    #[test]
    fn extension_must_end_the_path() {
        assert_eq!(classify("mp4"), MediaKind::Unknown);
        assert_eq!(classify(""), MediaKind::Unknown);
        assert_eq!(classify("a.mp4.bak"), MediaKind::Unknown);
        assert_eq!(classify("dir.mp4/readme"), MediaKind::Unknown);
        assert_eq!(classify("videos/touchdesigner/TDMovieOut.0.mp4"), MediaKind::Video);
    }

    #[test]
    fn predicates_follow_classification() {
        assert!(is_video("x.mov"));
        assert!(!is_image("x.mov"));
        assert!(is_image("x.gif"));
        assert!(!is_video("x.gif"));
    }

    #[test]
    fn poster_rules() {
        assert_eq!(poster_for("v.mp4", Some("p.png")), Some("p.png"));
        assert_eq!(poster_for("v.mp4", Some("p.mp4")), None);
        assert_eq!(poster_for("v.mp4", None), None);
        assert_eq!(poster_for("v.mp4", Some("")), None);
        assert_eq!(poster_for("v.mp4", Some("notes.txt")), Some("notes.txt"));
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type("/videos/a.MP4"), Some("video/mp4"));
        assert_eq!(content_type("style.css"), Some("text/css; charset=utf-8"));
        assert_eq!(content_type("archive.tar.zst"), None);
        assert_eq!(content_type("README"), None);
    }
}
