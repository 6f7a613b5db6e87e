use dioxus::prelude::*;

use crate::Route;

/// Sticky top navigation bar with brand mark and section links.
#[component]
pub fn Navigation() -> Element {
    let route = use_route::<Route>();
    let on_home = matches!(route, Route::Home {});
    let on_drugs = matches!(route, Route::DrugList { .. } | Route::DrugDetail { .. });

    rsx! {
        nav { class: "ms-nav",
            div { class: "ms-nav-inner",
                Link { class: "ms-brand", to: Route::Home {},
                    span { class: "ms-brand-badge", "⌬" }
                    span { class: "ms-brand-name", "MediScan AI" }
                }
                div { class: "ms-nav-links",
                    Link {
                        class: if on_home { "ms-nav-link ms-nav-link--active" } else { "ms-nav-link" },
                        to: Route::Home {},
                        "Home"
                    }
                    Link {
                        class: if on_drugs { "ms-nav-link ms-nav-link--active" } else { "ms-nav-link" },
                        to: Route::DrugList { search: None },
                        "Drug list"
                    }
                }
            }
        }
    }
}
