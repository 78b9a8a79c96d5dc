pub mod ext;
pub mod mime;
pub mod mime_type;
