/// Presenter view model, kept separate from the Yew component so the
/// render decision is testable without a document.
use url::Url;

pub const NO_RESULTS_MESSAGE: &str = "No similar sites found.";
pub const NO_URL_MESSAGE: &str = "Could not determine the current site.";

/// What the results area should show: either a single status message or an
/// ordered list of links. Order, duplicates, and count are whatever the
/// client produced; nothing is reshaped here.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Message(String),
    Links(Vec<String>),
}

impl ResultsView {
    /// View for a finished lookup. An empty list becomes the fixed
    /// no-results message.
    pub fn from_sites(sites: Vec<String>) -> ResultsView {
        if sites.is_empty() {
            ResultsView::Message(NO_RESULTS_MESSAGE.to_string())
        } else {
            ResultsView::Links(sites)
        }
    }

    /// View for the case where no active-tab URL could be determined.
    pub fn unavailable() -> ResultsView {
        ResultsView::Message(NO_URL_MESSAGE.to_string())
    }
}

/// Host portion of a URL for the popup heading. Unparseable URLs just get
/// no accent.
pub fn display_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sites_is_no_results_message() {
        let view = ResultsView::from_sites(Vec::new());
        assert_eq!(view, ResultsView::Message(NO_RESULTS_MESSAGE.to_string()));
    }

    #[test]
    fn test_sites_render_as_links_in_order() {
        let view = ResultsView::from_sites(vec![
            "https://a.com".to_string(),
            "https://b.com".to_string(),
        ]);
        assert_eq!(
            view,
            ResultsView::Links(vec!["https://a.com".to_string(), "https://b.com".to_string()])
        );
    }

    #[test]
    fn test_single_site_is_single_link() {
        let view = ResultsView::from_sites(vec!["https://x.com".to_string()]);
        match view {
            ResultsView::Links(links) => assert_eq!(links, vec!["https://x.com"]),
            other => panic!("Expected links, got {:?}", other),
        }
    }

    #[test]
    fn test_unavailable_message() {
        assert_eq!(
            ResultsView::unavailable(),
            ResultsView::Message(NO_URL_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_display_host() {
        assert_eq!(
            display_host("https://www.google.com/search?q=rust"),
            Some("www.google.com".to_string())
        );
        assert_eq!(display_host("not a url"), None);
        assert_eq!(display_host(""), None);
    }
}
