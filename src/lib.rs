// Copyright (c) 2026, Anthony DeDominic <adedomin@gmail.com>
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
// ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
// ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
// OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! Guess the MIME type of a file from its extension or from its first few
//! bytes.
//!
//! ```no_run
//! use mime_detect::{MimeType, mime_by_extension, read_mime_fallback};
//!
//! assert_eq!(mime_by_extension("photo.JPG"), MimeType::ImageJpeg);
//! let mime = read_mime_fallback("upload.bin", MimeType::TextPlain)?;
//! println!("{mime}");
//! # Ok::<(), mime_detect::ClassifyError>(())
//! ```
pub mod models;
mod read;

pub use models::{
    ext::{EXTENSIONS, mime_by_extension, mime_by_extension_fallback},
    mime::{BYTES_NEEDED, MIME as SIGNATURES, Signature, detect_mime, match_signature},
    mime_type::{MimeType, ParseMimeError},
};
#[cfg(feature = "tokio")]
pub use read::{read_mime_async, read_mime_fallback_async};
pub use read::{ClassifyError, FileSource, StdFs, read_mime, read_mime_fallback, read_mime_with};
