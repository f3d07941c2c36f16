//! File Input Helpers
//!
//! Reading the chosen profile picture off a file input.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

use crate::validation::FileMeta;

/// First file of a file input, if any
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

pub fn file_meta(file: &File) -> FileMeta {
    FileMeta {
        mime: file.type_(),
        size: file.size() as u64,
    }
}

/// Read `file` into a `data:` URL for previewing
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| format!("{:?}", e))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(|e| format!("{:?}", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to read file".to_string())?;
    value
        .as_string()
        .ok_or_else(|| "File reader returned no data".to_string())
}
