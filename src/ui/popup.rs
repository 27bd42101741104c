/// Popup UI for the Similar Sites extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;

use crate::client::{self, ApiConfig};
use crate::tabs;
use crate::ui::view::{display_host, ResultsView};

#[derive(Clone, PartialEq)]
enum AppState {
    Loading(String),
    Idle,
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading("Finding similar sites...".to_string()));
    let current_url = use_state(|| None::<String>);
    let results = use_state(|| None::<ResultsView>);

    // One lookup per popup open: locate the tab, then ask the model.
    {
        let state = state.clone();
        let current_url = current_url.clone();
        let results = results.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let config = ApiConfig::default();

                match tabs::locate_active_tab_url().await {
                    Some(url) => {
                        current_url.set(Some(url.clone()));

                        match client::fetch_similar_sites(&config, &url).await {
                            Ok(sites) => {
                                results.set(Some(ResultsView::from_sites(sites)));
                                state.set(AppState::Idle);
                            }
                            Err(e) => {
                                results.set(Some(ResultsView::from_sites(Vec::new())));
                                state.set(AppState::Error(e));
                            }
                        }
                    }
                    None => {
                        results.set(Some(ResultsView::unavailable()));
                        state.set(AppState::Idle);
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Similar Sites"}</h1>

            // Current site heading
            if let Some(url) = (*current_url).clone() {
                <div class="current-site">
                    if let Some(host) = display_host(&url) {
                        <h2 class="current-site-host">{host}</h2>
                    }
                    <p class="current-site-url" title={url.clone()}>{url.clone()}</p>
                </div>
            }

            // Status display
            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            // Results area
            {match &*results {
                Some(view) => results_html(view),
                None => html! {},
            }}

            <p class="footer-popup">
                {"Similar Sites v0.1.0"}
            </p>
        </div>
    }
}

/// Render the results view. Links keep the client's order and always open
/// a new browsing context, never navigating the popup itself.
fn results_html(view: &ResultsView) -> Html {
    match view {
        ResultsView::Message(msg) => html! {
            <p class="empty-state">{msg}</p>
        },
        ResultsView::Links(sites) => html! {
            <ul class="results-list">
                {for sites.iter().map(|site| html! {
                    <li key={site.clone()} class="result-item">
                        <a
                            href={site.clone()}
                            title={site.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {site}
                        </a>
                    </li>
                })}
            </ul>
        },
    }
}
