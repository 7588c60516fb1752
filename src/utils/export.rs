//! CSV export: a file under the export directory on native, a browser
//! download on the web.

use crate::config::CSV_BOM;
use crate::error::AppError;

/// File contents with a UTF-8 BOM so spreadsheet apps pick the right encoding.
pub fn with_bom(content: &str) -> String {
    format!("{}{}", CSV_BOM, content)
}

/// Writes `content` to `<EXPORT_DIR>/<filename>` and returns where it went.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_csv(filename: &str, content: &str) -> Result<String, AppError> {
    save_csv_in(std::path::Path::new(crate::config::EXPORT_DIR), filename, content)
}

#[cfg(not(target_arch = "wasm32"))]
fn save_csv_in(dir: &std::path::Path, filename: &str, content: &str) -> Result<String, AppError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::Export(format!("cannot create {}: {}", dir.display(), e)))?;
    let path = dir.join(filename);
    std::fs::write(&path, with_bom(content))
        .map_err(|e| AppError::Export(format!("cannot write {}: {}", path.display(), e)))?;
    log::info!("Exported {} successfully", path.display());
    Ok(path.display().to_string())
}

/// Hands `content` to the browser as a download named `filename`.
#[cfg(target_arch = "wasm32")]
pub fn save_csv(filename: &str, content: &str) -> Result<String, AppError> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let js_err = |e: JsValue| AppError::Export(format!("{:?}", e));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Export("no document available".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&with_bom(content)));
    let props = BlobPropertyBag::new();
    props.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| AppError::Export("anchor element has the wrong type".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url).map_err(js_err)?;

    log::info!("Exported {} successfully", filename);
    Ok(filename.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_comes_first() {
        let out = with_bom("a,b\n1,2");
        assert!(out.starts_with('\u{FEFF}'));
        assert!(out.ends_with("a,b\n1,2"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn writes_into_the_export_directory() {
        let dir = std::env::temp_dir().join(format!("showcase-export-{}", std::process::id()));
        let path = save_csv_in(&dir, "marks.csv", "name\nWeek 1").unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\u{FEFF}name\nWeek 1");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
