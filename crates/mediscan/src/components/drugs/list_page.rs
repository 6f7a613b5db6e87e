use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use mediscan_core::catalog::{CatalogClient, DrugRecord};
use mediscan_core::dates::format_long_date;

use crate::components::SearchBar;
use crate::Route;

/// Searchable drug listing.
///
/// The committed search term lives in the URL, so refreshing or sharing the
/// page reruns the same query. The fetch is driven by a resource keyed on
/// the term; navigation to a new term drops the in-flight request.
#[component]
pub fn DrugListPage(search: Option<String>) -> Element {
    let catalog = use_context::<CatalogClient>();
    let term = search.clone().unwrap_or_default();

    let query = term.clone();
    let mut drugs = use_resource(use_reactive!(|(query,)| {
        let catalog = catalog.clone();
        async move {
            catalog
                .list_drugs(Some(&query))
                .await
                .inspect_err(|e| error!("❌ Drug listing failed: {e}"))
        }
    }));

    let body = match drugs() {
        None => rsx! {
            div { class: "ms-loading",
                div { class: "ms-spinner" }
                p { "Loading drugs..." }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "ms-card ms-panel ms-panel--error",
                p { class: "ms-panel-title", "Could not load the drug list" }
                p { class: "ms-panel-detail", "{e}" }
                button {
                    class: "ms-btn ms-btn--primary",
                    onclick: move |_| drugs.restart(),
                    "Retry"
                }
            }
        },
        Some(Ok(records)) if records.is_empty() => rsx! {
            div { class: "ms-card ms-panel",
                p { class: "ms-panel-title", {empty_listing_copy(&term)} }
            }
        },
        Some(Ok(records)) => rsx! {
            if let Some(count_line) = result_count_copy(records.len(), &term) {
                p { class: "ms-result-count", "{count_line}" }
            }
            div { class: "ms-drug-grid",
                for record in records {
                    DrugCard { key: "{record.id.unwrap_or_default()}", record }
                }
            }
        },
    };

    rsx! {
        div { class: "ms-page ms-listing",
            header { class: "ms-listing-head",
                h1 { class: "ms-page-title", "Drug List" }
                SearchBar {
                    placeholder: "Search by name, ingredient, or manufacturer...",
                    initial_value: term.clone(),
                }
            }
            {body}
        }
    }
}

/// One listing card. Records with an id link to the detail page; records
/// without one render as plain cards.
#[component]
fn DrugCard(record: DrugRecord) -> Element {
    let summary = rsx! {
        div { class: "ms-drug-card-body",
            if let Some(image_path) = record.image_path.as_deref() {
                img { class: "ms-drug-card-image", src: "{image_path}", alt: "{record.display_name()}" }
            } else {
                div { class: "ms-drug-card-image ms-drug-card-image--placeholder", "💊" }
            }
            h3 { class: "ms-drug-card-name", "{record.display_name()}" }
            if let Some(ingredient) = record.active_ingredient.as_deref() {
                p { class: "ms-drug-card-line", "{ingredient}" }
            }
            if let Some(manufacturer) = record.manufacturer.as_deref() {
                p { class: "ms-drug-card-line ms-drug-card-line--muted", "{manufacturer}" }
            }
            if let Some(description) = record.description.as_deref() {
                p { class: "ms-drug-card-desc", "{description}" }
            }
            p { class: "ms-drug-card-line ms-drug-card-line--muted",
                "Expires: {format_long_date(record.expiry_date.as_deref())}"
            }
        }
    };

    match record.id {
        Some(id) => rsx! {
            Link { class: "ms-drug-card", to: Route::DrugDetail { id: id.to_string() }, {summary} }
        },
        None => rsx! {
            div { class: "ms-drug-card", {summary} }
        },
    }
}

/// Count line shown above the grid, only while a filter is active.
fn result_count_copy(count: usize, term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }
    let noun = if count == 1 { "drug" } else { "drugs" };
    Some(format!("{count} {noun} found for \"{trimmed}\""))
}

fn empty_listing_copy(term: &str) -> String {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        "The catalog has no drugs yet.".to_string()
    } else {
        format!("No drugs matched \"{trimmed}\". Try a different search.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_count_only_shown_for_active_filter() {
        assert_eq!(result_count_copy(12, ""), None);
        assert_eq!(result_count_copy(12, "   "), None);
        assert_eq!(
            result_count_copy(1, "panadol"),
            Some("1 drug found for \"panadol\"".to_string())
        );
        assert_eq!(
            result_count_copy(3, " aspirin "),
            Some("3 drugs found for \"aspirin\"".to_string())
        );
    }

    #[test]
    fn test_empty_listing_copy_distinguishes_searches() {
        assert_eq!(empty_listing_copy(""), "The catalog has no drugs yet.");
        assert_eq!(empty_listing_copy("   "), "The catalog has no drugs yet.");
        assert_eq!(
            empty_listing_copy("panadol"),
            "No drugs matched \"panadol\". Try a different search."
        );
    }
}
