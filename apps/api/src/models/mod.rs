pub mod job;
pub mod message;
pub mod profile;
pub mod resume;
