use crate::models::mime_type::MimeType;

pub type Signature = (MimeType, &'static [u8]);

// Order matters: the first prefix the header starts with wins.
// see: https://docs.fileformat.com/
pub const MIME: [Signature; 14] = [
    // Microsoft Word 6.0 / OLE2 compound document
    (
        MimeType::ApplicationMsword,
        &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
    ),
    (MimeType::ApplicationPdf, b"%PDF-1."),
    (MimeType::ApplicationRar, b"Rar!"),
    // DOS/Windows executables and DLLs
    (MimeType::ApplicationDosExec, b"MZ"),
    // MP3 with an ID3 tag
    (MimeType::AudioMpeg, b"ID3"),
    (MimeType::AudioOgg, b"OggS"),
    (MimeType::AudioWav, b"RIFF"),
    (MimeType::ImageBmp, b"BM"),
    (MimeType::ImageGif, b"GIF8"),
    (MimeType::ImageIcon, &[0x00, 0x00, 0x01, 0x00]),
    (MimeType::ImageJpeg, &[0xFF, 0xD8, 0xFF]),
    (
        MimeType::ImagePng,
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
    ),
    // little and big endian
    (MimeType::ImageTiff, b"II*"),
    (MimeType::ImageTiff, b"MM*"),
];

pub const fn bytes_needed(table: &[Signature]) -> usize {
    let mut i = 0;
    let mut max = usize::MIN;
    while i < table.len() {
        let (_, magic) = table[i];
        if max < magic.len() {
            max = magic.len();
        }
        i += 1;
    }
    max
}

/// How many leading bytes of a file are enough to test every signature.
pub const BYTES_NEEDED: usize = bytes_needed(&MIME);

/// First match wins; a header shorter than a signature can't match it.
pub fn match_signature(table: &[Signature], header: &[u8]) -> MimeType {
    table
        .iter()
        .find(|&&(_, magic)| header.starts_with(magic))
        .map(|&(mime, magic)| {
            log::trace!("matched {mime} on {magic:02X?}");
            mime
        })
        .unwrap_or(MimeType::Unknown)
}

/// Attempt to detect a MIME type from the leading bytes of a file.
pub fn detect_mime(header: &[u8]) -> MimeType {
    match_signature(&MIME, header)
}
