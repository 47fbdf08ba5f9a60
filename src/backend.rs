//! Background services that talk to the UI thread over channels

pub mod compare_backend;
pub mod loader_backend;

pub use compare_backend::{CompareHandle, spawn_compare_backend};
pub use loader_backend::{LoadError, LoadedFile, read_text_file, spawn_open_dialog};
