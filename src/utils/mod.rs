pub mod content;
pub mod environment;
pub mod fs;

pub use content::{extract_text, extract_user_content, truncate_content};
pub use environment::get_claude_dir;
pub use fs::{format_path_with_tilde, validate_file_size};
