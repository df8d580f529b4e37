use std::path::Path;
use url::Url;

pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// Guess the MIME type the receiver should be told about, from the file
/// extension of a URL path or a plain path.
pub fn guess_content_type(source: &str) -> &'static str {
    extension_of(source)
        .as_deref()
        .and_then(content_type_for_extension)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

fn extension_of(source: &str) -> Option<String> {
    let path = match Url::parse(source) {
        Ok(url) if url.cannot_be_a_base() => return None,
        Ok(url) => url.path().to_string(),
        Err(_) => source.to_string(),
    };

    Path::new(&path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    let content_type = match extension {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "mp3" => "audio/mpeg",
        "m4a" | "aac" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "wav" => "audio/wav",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "m3u8" => "application/x-mpegURL",
        "mpd" => "application/dash+xml",
        _ => return None,
    };
    Some(content_type)
}
