// Resume API: multipart upload, scoped temp-file extraction, and the pure
// section splitter.

pub mod extract;
pub mod handlers;
pub mod sections;
