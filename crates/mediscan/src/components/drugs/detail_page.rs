use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use mediscan_core::catalog::{CatalogClient, DrugRecord};
use mediscan_core::dates::{format_long_date, is_expired_now};

use crate::Route;

/// Full record view for a single drug.
#[component]
pub fn DrugDetailPage(id: String) -> Element {
    let catalog = use_context::<CatalogClient>();

    let mut record = use_resource(use_reactive!(|(id,)| {
        let catalog = catalog.clone();
        async move {
            catalog
                .get_drug(&id)
                .await
                .inspect_err(|e| error!("❌ Drug detail fetch failed: {e}"))
        }
    }));

    let body = match record() {
        None => rsx! {
            div { class: "ms-loading",
                div { class: "ms-spinner" }
                p { "Loading drug details..." }
            }
        },
        Some(Err(e)) if e.is_not_found() => rsx! {
            div { class: "ms-card ms-panel",
                p { class: "ms-panel-title", "Drug not found" }
                p { class: "ms-panel-detail",
                    "No drug with this identifier exists in the catalog."
                }
                Link { class: "ms-btn ms-btn--primary", to: Route::DrugList { search: None },
                    "Back to drug list"
                }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "ms-card ms-panel ms-panel--error",
                p { class: "ms-panel-title", "Could not load this drug" }
                p { class: "ms-panel-detail", "{e}" }
                button {
                    class: "ms-btn ms-btn--primary",
                    onclick: move |_| record.restart(),
                    "Retry"
                }
            }
        },
        Some(Ok(drug)) => rsx! {
            DrugDetailView { drug }
        },
    };

    rsx! {
        div { class: "ms-page ms-detail",
            Link { class: "ms-back-link", to: Route::DrugList { search: None }, "← Back to drug list" }
            {body}
        }
    }
}

#[component]
fn DrugDetailView(drug: DrugRecord) -> Element {
    let expired = is_expired_now(drug.expiry_date.as_deref());
    let expiry_label = format_long_date(drug.expiry_date.as_deref());

    rsx! {
        div { class: "ms-detail-grid",
            div { class: "ms-detail-main",
                div { class: "ms-card",
                    div { class: "ms-detail-head",
                        if let Some(image_path) = drug.image_path.as_deref() {
                            img {
                                class: "ms-detail-image",
                                src: "{image_path}",
                                alt: "{drug.display_name()}",
                            }
                        } else {
                            div { class: "ms-detail-image ms-detail-image--placeholder", "💊" }
                        }
                        div {
                            h1 { class: "ms-detail-name", "{drug.display_name()}" }
                            if let Some(detected_type) = drug.detected_type.as_deref() {
                                span { class: "ms-chip", "{detected_type}" }
                            }
                        }
                    }

                    if let Some(description) = drug.description.as_deref() {
                        section { class: "ms-detail-section",
                            h2 { class: "ms-section-title", "Description" }
                            p { "{description}" }
                        }
                    }

                    section { class: "ms-detail-section",
                        h2 { class: "ms-section-title", "Usage" }
                        if let Some(usage) = drug.usage_text() {
                            p { "{usage}" }
                        } else if drug.description.is_some() {
                            p { class: "ms-muted", "Refer to the description above." }
                        } else {
                            p { class: "ms-muted", "No usage information available." }
                        }
                    }

                    div { class: "ms-disclaimer",
                        strong { "Disclaimer: " }
                        "Consult a doctor before use. This information is not medical advice."
                    }
                }
            }

            aside { class: "ms-detail-side",
                div { class: "ms-card ms-quick-info",
                    h2 { class: "ms-card-title", "Quick Info" }
                    dl {
                        dt { "Active Ingredient" }
                        dd { {drug.active_ingredient.as_deref().unwrap_or("N/A")} }
                        dt { "Manufacturer" }
                        dd { {drug.manufacturer.as_deref().unwrap_or("N/A")} }
                        dt { "Expiry Date" }
                        dd { class: if expired { "ms-field-value--expired" } else { "" }, "{expiry_label}" }
                        if let Some(id) = drug.id {
                            dt { "Record ID" }
                            dd { "#{id}" }
                        }
                        dt { "Added" }
                        dd { {format_long_date(drug.created_at.as_deref())} }
                    }
                    if expired {
                        p { class: "ms-expired-warning", "⚠ This product has expired" }
                    }
                }

                div { class: "ms-card ms-quick-actions",
                    Link {
                        class: "ms-btn ms-btn--primary ms-btn--block",
                        to: Route::Home {},
                        "Scan a drug image"
                    }
                    Link {
                        class: "ms-btn ms-btn--secondary ms-btn--block",
                        to: Route::DrugList { search: None },
                        "Browse all drugs"
                    }
                }
            }
        }
    }
}
