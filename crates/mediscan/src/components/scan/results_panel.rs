use dioxus::prelude::*;
use mediscan_core::analysis::AnalysisResult;
use mediscan_core::dates::{format_long_date, is_expired_now};

/// Two-column result layout: the uploaded image with the detected type on
/// the left, the identified drug's details on the right.
#[component]
pub fn ResultsPanel(
    result: AnalysisResult,
    preview_url: String,
    on_reset: EventHandler<MouseEvent>,
) -> Element {
    let expired = is_expired_now(Some(&result.expiry_date));
    let expiry_label = format_long_date(Some(&result.expiry_date));

    rsx! {
        section { class: "ms-results",
            div { class: "ms-results-grid",
                div { class: "ms-card ms-results-image",
                    if !preview_url.is_empty() {
                        img { class: "ms-preview", src: "{preview_url}", alt: "Uploaded drug image" }
                    }
                    div { class: "ms-detected",
                        p { class: "ms-field-label", "Detected Type:" }
                        p { class: "ms-detected-value",
                            "{result.detected_type} ({result.confidence}% Conf)"
                        }
                    }
                }

                div { class: "ms-card ms-results-info",
                    h2 { class: "ms-card-title", "Drug Information" }

                    div { class: "ms-field",
                        p { class: "ms-field-label", "Drug Name" }
                        p { class: "ms-drug-name", "{result.drug_name}" }
                    }

                    div { class: "ms-field",
                        p { class: "ms-field-label", "Active Ingredients" }
                        div { class: "ms-chips",
                            for (idx , ingredient) in result.active_ingredients.iter().enumerate() {
                                span { key: "{idx}", class: "ms-chip", "{ingredient}" }
                            }
                        }
                    }

                    div { class: "ms-field",
                        p { class: "ms-field-label", "Manufacturer" }
                        p { class: "ms-field-value", "{result.manufacturer}" }
                    }

                    div { class: "ms-field",
                        p { class: "ms-field-label", "Expiry Date" }
                        p {
                            class: if expired { "ms-field-value ms-field-value--expired" } else { "ms-field-value" },
                            "{expiry_label}"
                        }
                        if expired {
                            p { class: "ms-expired-warning", "⚠ This product has expired" }
                        }
                    }

                    div { class: "ms-disclaimer",
                        strong { "Disclaimer: " }
                        "Consult a doctor before use. This result is for identification only and is not medical advice."
                    }

                    button {
                        class: "ms-btn ms-btn--secondary ms-btn--block",
                        onclick: move |evt| on_reset.call(evt),
                        "Analyze Another Drug"
                    }
                }
            }
        }
    }
}
