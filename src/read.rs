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
use std::{
    fs::File,
    io::{self, ErrorKind, Read},
    path::{Path, PathBuf},
};

use crate::models::{
    mime::{BYTES_NEEDED, detect_mime},
    mime_type::MimeType,
};

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("{path:?}: no such file: {source}")]
    NotFound { path: PathBuf, source: io::Error },
    #[error("{path:?}: expected regular file")]
    NotRegularFile { path: PathBuf, source: io::Error },
    #[error("{path:?}: could not open: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("{path:?}: failed to read file header: {source}")]
    Read { path: PathBuf, source: io::Error },
}

impl ClassifyError {
    fn not_found<T: AsRef<Path>>(path: T, source: io::Error) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    fn not_regular<T: AsRef<Path>>(path: T) -> Self {
        Self::NotRegularFile {
            path: path.as_ref().to_path_buf(),
            source: io::Error::new(ErrorKind::NotFound, "expected regular file"),
        }
    }

    fn open<T: AsRef<Path>>(path: T, source: io::Error) -> Self {
        Self::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    fn read<T: AsRef<Path>>(path: T, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::NotRegularFile { path, .. }
            | Self::Open { path, .. }
            | Self::Read { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::NotFound { source, .. }
            | Self::NotRegularFile { source, .. }
            | Self::Open { source, .. }
            | Self::Read { source, .. } => source,
        }
    }

    /// The OS error code behind this failure, when there is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().raw_os_error()
    }
}

impl From<ClassifyError> for io::Error {
    fn from(value: ClassifyError) -> Self {
        io::Error::new(value.io_error().kind(), value)
    }
}

/// Filesystem access needed to sniff a file.
pub trait FileSource {
    type File: Read;

    /// Follows symlinks. `Err` means the path could not be stat'ed at all.
    fn is_regular_file(&self, path: &Path) -> io::Result<bool>;

    fn open(&self, path: &Path) -> io::Result<Self::File>;
}

/// [`FileSource`] backed by [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl FileSource for StdFs {
    type File = File;

    fn is_regular_file(&self, path: &Path) -> io::Result<bool> {
        std::fs::metadata(path).map(|m| m.is_file())
    }

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }
}

/// Reads up to `max` bytes, tolerating short reads and `Interrupted`.
fn read_header<R: Read>(file: R, max: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(max);
    file.take(max as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// An empty header is `Unknown` without consulting the signatures.
fn classify_header(path: &Path, header: &[u8]) -> MimeType {
    if header.is_empty() {
        log::debug!("{path:?}: empty file");
        return MimeType::Unknown;
    }
    let mime = detect_mime(header);
    log::debug!("{path:?}: read {} bytes, detected {mime}", header.len());
    mime
}

pub fn read_mime_with<S, T>(source: &S, path: T) -> Result<MimeType, ClassifyError>
where
    S: FileSource + ?Sized,
    T: AsRef<Path>,
{
    let path = path.as_ref();
    match source.is_regular_file(path) {
        Ok(true) => {}
        Ok(false) => return Err(ClassifyError::not_regular(path)),
        Err(e) => return Err(ClassifyError::not_found(path, e)),
    }
    let header = {
        let file = source.open(path).map_err(|e| ClassifyError::open(path, e))?;
        read_header(file, BYTES_NEEDED).map_err(|e| ClassifyError::read(path, e))?
    };
    Ok(classify_header(path, &header))
}

/// Determine the MIME type of `path` by reading its header.
///
/// `Ok(MimeType::Unknown)` means the file was read but nothing matched,
/// which includes empty files.
pub fn read_mime<T: AsRef<Path>>(path: T) -> Result<MimeType, ClassifyError> {
    read_mime_with(&StdFs, path)
}

/// Like [`read_mime`], but `Unknown` becomes `fallback`. I/O errors are still
/// returned.
pub fn read_mime_fallback<T: AsRef<Path>>(
    path: T,
    fallback: MimeType,
) -> Result<MimeType, ClassifyError> {
    read_mime(path).map(|m| m.or(fallback))
}

#[cfg(feature = "tokio")]
pub async fn read_mime_async<T: AsRef<Path>>(path: T) -> Result<MimeType, ClassifyError> {
    use tokio::io::AsyncReadExt;

    let path = path.as_ref();
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(ClassifyError::not_regular(path)),
        Err(e) => return Err(ClassifyError::not_found(path, e)),
    }
    let mut header = Vec::with_capacity(BYTES_NEEDED);
    {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| ClassifyError::open(path, e))?;
        file.take(BYTES_NEEDED as u64)
            .read_to_end(&mut header)
            .await
            .map_err(|e| ClassifyError::read(path, e))?;
    }
    Ok(classify_header(path, &header))
}

#[cfg(feature = "tokio")]
pub async fn read_mime_fallback_async<T: AsRef<Path>>(
    path: T,
    fallback: MimeType,
) -> Result<MimeType, ClassifyError> {
    read_mime_async(path).await.map(|m| m.or(fallback))
}
