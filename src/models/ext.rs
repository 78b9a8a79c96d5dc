use std::path::Path;

use crate::models::mime_type::MimeType;

pub const EXTENSIONS: [(&str, MimeType); 21] = [
    (".txt", MimeType::TextPlain),
    (".log", MimeType::TextPlain),
    (".html", MimeType::TextHtml),
    (".htm", MimeType::TextHtml),
    (".mp3", MimeType::AudioMpeg),
    // Ogg Vorbis
    (".ogg", MimeType::AudioOgg),
    (".wav", MimeType::AudioWav),
    (".mp4", MimeType::VideoMp4),
    (".bmp", MimeType::ImageBmp),
    (".gif", MimeType::ImageGif),
    (".ico", MimeType::ImageIcon),
    (".jpeg", MimeType::ImageJpeg),
    (".jpg", MimeType::ImageJpeg),
    (".png", MimeType::ImagePng),
    (".tiff", MimeType::ImageTiff),
    (".tif", MimeType::ImageTiff),
    (".doc", MimeType::ApplicationMsword),
    (".pdf", MimeType::ApplicationPdf),
    (".rar", MimeType::ApplicationRar),
    (".exe", MimeType::ApplicationDosExec),
    (".dll", MimeType::ApplicationDosExec),
];

/// The dotted, ASCII lower-cased extension of `path`, e.g. ".jpg".
///
/// `None` for an empty path, a path without an extension, a trailing dot, or
/// an extension that isn't valid UTF-8.
pub fn normalized_ext<T: AsRef<Path>>(path: T) -> Option<String> {
    let ext = path.as_ref().extension()?.to_str()?;
    if ext.is_empty() {
        return None;
    }
    let mut key = String::with_capacity(ext.len() + 1);
    key.push('.');
    key.push_str(ext);
    key.make_ascii_lowercase();
    Some(key)
}

pub fn lookup_ext(key: &str) -> MimeType {
    EXTENSIONS
        .iter()
        .find(|(e, _)| key == *e)
        .map(|&(_, mime)| mime)
        .unwrap_or(MimeType::Unknown)
}

pub fn mime_by_extension<T: AsRef<Path>>(path: T) -> MimeType {
    normalized_ext(path)
        .map(|key| lookup_ext(&key))
        .unwrap_or(MimeType::Unknown)
}

pub fn mime_by_extension_fallback<T: AsRef<Path>>(path: T, fallback: MimeType) -> MimeType {
    mime_by_extension(path).or(fallback)
}
