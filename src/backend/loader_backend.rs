use crate::constant::TEXT_FILE_EXTENSIONS;
use crate::messages::{Pane, ResponseMessage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{path:?} is {size} bytes, over the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// A text file read into one of the panes
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Read a UTF-8 text file, refusing anything larger than `limit` bytes
pub fn read_text_file(path: &Path, limit: usize) -> Result<LoadedFile, LoadError> {
    let size = fs::metadata(path)?.len();
    let limit = limit as u64;
    if size > limit {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    let content = fs::read_to_string(path)?;
    Ok(LoadedFile {
        path: path.to_path_buf(),
        content,
    })
}

/// Show a file picker and load the chosen file in the background.
/// Nothing is sent if the dialog is cancelled.
pub fn spawn_open_dialog(
    pane: Pane,
    start_dir: PathBuf,
    limit: usize,
    sender: Sender<ResponseMessage>,
) {
    thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&start_dir)
            .add_filter("Text", TEXT_FILE_EXTENSIONS)
            .pick_file()
        else {
            debug!("Open dialog cancelled");
            return;
        };

        let result = match read_text_file(&path, limit) {
            Ok(file) => {
                info!("Loaded {:?} into {:?} pane", file.path, pane);
                Ok(file)
            }
            Err(e) => {
                warn!("Failed to load {:?}: {}", path, e);
                Err(e.to_string())
            }
        };

        if let Err(e) = sender.send(ResponseMessage::FileLoaded { pane, result }) {
            warn!("Failed to send loaded file: {}", e);
        }
    });
}
