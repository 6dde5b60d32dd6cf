pub mod archive;
pub mod png;
