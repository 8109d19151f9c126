use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

fn csv_blob(csv_data: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv_data));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_CONTENT_TYPE);
    Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "Could not build the CSV file".to_string())
}

fn hidden_link(document: &Document, href: &str, filename: &str) -> Result<HtmlAnchorElement, String> {
    let link = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or_else(|| "Could not create a download link".to_string())?;
    link.set_href(href);
    link.set_download(filename);
    let _ = link.style().set_property("display", "none");
    Ok(link)
}

/// Saves `csv_data` as `filename` (served as `text/csv`, UTF-8) through a
/// temporary object URL and a hidden anchor click.
pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document to download from".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "Document has no body".to_string())?;

    let blob = csv_blob(csv_data)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Could not create a download URL".to_string())?;

    let result = hidden_link(&document, &url, filename).and_then(|link| {
        body.append_child(&link)
            .map_err(|_| "Could not attach the download link".to_string())?;
        link.click();
        link.remove();
        Ok(())
    });
    let _ = Url::revoke_object_url(&url);
    result
}
