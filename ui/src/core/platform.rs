//! Platform glue: the host page on the web, the process environment elsewhere.

/// Raw `document.cookie` string of the host page.
#[cfg(target_arch = "wasm32")]
pub fn document_cookies() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    html.cookie().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_cookies() -> Option<String> {
    None
}

/// Origin of the host page (`https://host:port`), used to resolve
/// root-relative API URLs.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

/// Looks up a configuration value. On the web this reads
/// `<meta name="catalog:{key}" content="...">` from the host page.
#[cfg(target_arch = "wasm32")]
pub fn config_value(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"catalog:{key}\"]");
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}

/// Looks up a configuration value from `CATALOG_{KEY}` environment variables
/// (`datasource-url` → `CATALOG_DATASOURCE_URL`).
#[cfg(not(target_arch = "wasm32"))]
pub fn config_value(key: &str) -> Option<String> {
    std::env::var(env_var_name(key)).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn env_var_name(key: &str) -> String {
    format!("CATALOG_{}", key.to_ascii_uppercase().replace('-', "_"))
}
