use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Every MIME type this crate can report.
///
/// `Unknown` is what the classifiers return when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum MimeType {
    Unknown,
    TextPlain,
    TextHtml,
    AudioMpeg,
    AudioOgg,
    AudioWav,
    VideoMp4,
    ImageBmp,
    ImageGif,
    ImageIcon,
    ImageJpeg,
    ImagePng,
    ImageTiff,
    ApplicationMsword,
    ApplicationPdf,
    ApplicationRar,
    ApplicationDosExec,
}

pub const ALL: [MimeType; 17] = [
    MimeType::Unknown,
    MimeType::TextPlain,
    MimeType::TextHtml,
    MimeType::AudioMpeg,
    MimeType::AudioOgg,
    MimeType::AudioWav,
    MimeType::VideoMp4,
    MimeType::ImageBmp,
    MimeType::ImageGif,
    MimeType::ImageIcon,
    MimeType::ImageJpeg,
    MimeType::ImagePng,
    MimeType::ImageTiff,
    MimeType::ApplicationMsword,
    MimeType::ApplicationPdf,
    MimeType::ApplicationRar,
    MimeType::ApplicationDosExec,
];

impl MimeType {
    /// Default for the `*_fallback` entry points when the caller has no better
    /// guess. Same as `Unknown`.
    pub const FALLBACK: MimeType = MimeType::Unknown;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::TextPlain => "text/plain",
            Self::TextHtml => "text/html",
            Self::AudioMpeg => "audio/mpeg",
            Self::AudioOgg => "audio/ogg",
            Self::AudioWav => "audio/wav",
            Self::VideoMp4 => "video/mp4",
            Self::ImageBmp => "image/bmp",
            Self::ImageGif => "image/gif",
            Self::ImageIcon => "image/vnd.microsoft.icon",
            Self::ImageJpeg => "image/jpeg",
            Self::ImagePng => "image/png",
            Self::ImageTiff => "image/tiff",
            Self::ApplicationMsword => "application/msword",
            Self::ApplicationPdf => "application/pdf",
            Self::ApplicationRar => "application/vnd.rar",
            Self::ApplicationDosExec => "application/x-dosexec",
        }
    }

    /// The part before the slash, e.g. "image". `Unknown` has none.
    pub fn top_level(self) -> Option<&'static str> {
        self.as_str().split_once('/').map(|(top, _)| top)
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }

    /// Substitute `fallback` when this is `Unknown`.
    pub fn or(self, fallback: MimeType) -> MimeType {
        if self.is_unknown() { fallback } else { self }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MimeType> for &'static str {
    fn from(value: MimeType) -> Self {
        value.as_str()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unrecognized MIME type: {0:?}")]
pub struct ParseMimeError(String);

impl FromStr for MimeType {
    type Err = ParseMimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL.iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMimeError(s.to_owned()))
    }
}

impl TryFrom<String> for MimeType {
    type Error = ParseMimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
