//! Reading user-chosen files out of the browser.

use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

use crate::error::{AppError, AppResult};
use crate::types::SelectedFile;

/// First file of a picker or drop selection, if any.
pub fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|list| list.get(0))
}

/// Load the whole file into memory.
pub async fn read_selected_file(file: &File) -> AppResult<SelectedFile> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::FileRead(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    log::debug!("Read {} ({}, {} bytes)", file.name(), file.type_(), bytes.len());

    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}
