/// Active-tab lookup through the extension's JS bridge
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;
}

/// A tab descriptor from the host's tab registry. Only the URL matters;
/// whatever else the host attaches is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TabDescriptor {
    #[serde(default)]
    pub url: Option<String>,
}

/// URL of the active tab in the focused window, or `None`. A missing tab
/// capability and an empty query result are treated the same: there is no
/// URL to work with. One query per call, no retry.
pub async fn locate_active_tab_url() -> Option<String> {
    let tabs_js = match queryActiveTab().await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Tab query unavailable: {:?}", e);
            return None;
        }
    };

    if !js_sys::Array::is_array(&tabs_js) {
        log::warn!("Tab query returned a non-array value");
        return None;
    }

    let tabs: Vec<TabDescriptor> = match serde_wasm_bindgen::from_value(tabs_js) {
        Ok(tabs) => tabs,
        Err(e) => {
            log::warn!("Failed to parse tab query result: {:?}", e);
            return None;
        }
    };

    first_tab_url(tabs)
}

/// At most the first descriptor's URL is used; a missing or empty URL
/// counts as no result.
fn first_tab_url(tabs: Vec<TabDescriptor>) -> Option<String> {
    tabs.into_iter()
        .next()
        .and_then(|tab| tab.url)
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_url_takes_first_descriptor() {
        let tabs: Vec<TabDescriptor> = serde_json::from_value(serde_json::json!([
            {"url": "https://first.com", "title": "First"},
            {"url": "https://second.com"}
        ]))
        .unwrap();

        assert_eq!(first_tab_url(tabs), Some("https://first.com".to_string()));
    }

    #[test]
    fn test_no_tabs_is_none() {
        assert_eq!(first_tab_url(Vec::new()), None);
    }

    #[test]
    fn test_tab_without_url_is_none() {
        let tabs: Vec<TabDescriptor> =
            serde_json::from_value(serde_json::json!([{"title": "No URL"}])).unwrap();
        assert_eq!(first_tab_url(tabs), None);

        let tabs: Vec<TabDescriptor> =
            serde_json::from_value(serde_json::json!([{"url": ""}])).unwrap();
        assert_eq!(first_tab_url(tabs), None);
    }
}
