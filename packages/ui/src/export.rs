//! Hand a generated file to the user.

use std::io;

/// Offer `content` as a download named `filename`.
///
/// In the browser this goes through a Blob URL and a temporary anchor. On
/// native targets the file is written to the system temp directory.
#[cfg(target_arch = "wasm32")]
pub fn download_csv(filename: &str, content: &str) -> io::Result<()> {
    use wasm_bindgen::{JsCast, JsValue};

    fn js_err(e: JsValue) -> io::Error {
        io::Error::other(format!("{e:?}"))
    }

    let window = web_sys::window().ok_or_else(|| io::Error::other("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| io::Error::other("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| io::Error::other("not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    tracing::info!("exported {filename}");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_csv(filename: &str, content: &str) -> io::Result<()> {
    let path = std::env::temp_dir().join(filename);
    std::fs::write(&path, content)?;
    tracing::info!("exported {}", path.display());
    Ok(())
}
