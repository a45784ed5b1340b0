pub mod input;

pub use input::{read_viminfo, split_lines, validate_file_size};
