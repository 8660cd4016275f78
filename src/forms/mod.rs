pub mod multipart;

pub use multipart::{parse_multipart, ParsedForm};
