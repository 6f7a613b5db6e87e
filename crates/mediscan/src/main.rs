//! MediScan application entry point and route table.

mod components;
mod preview;
mod time;

use dioxus::prelude::*;
use mediscan_core::catalog::CatalogClient;

use components::{DrugDetailPage, DrugListPage, Navigation, ScanPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Navigable routes: scan view at the root, the catalog listing with an
/// optional `search` query parameter, and the per-record detail view.
#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/drugs?:search")]
    DrugList { search: Option<String> },
    #[route("/drugs/:id")]
    DrugDetail { id: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One catalog client for the whole component tree
    use_context_provider(CatalogClient::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn AppShell() -> Element {
    rsx! {
        div { class: "ms-app",
            Navigation {}
            main { class: "ms-main", Outlet::<Route> {} }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        ScanPage {}
    }
}

#[component]
fn DrugList(search: Option<String>) -> Element {
    rsx! {
        DrugListPage { search }
    }
}

#[component]
fn DrugDetail(id: String) -> Element {
    rsx! {
        DrugDetailPage { id }
    }
}
