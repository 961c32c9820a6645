pub mod format;
pub mod paths;

pub use format::format_size;
pub use paths::{format_path_with_tilde, path_key};
