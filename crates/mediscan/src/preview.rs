//! Revocable preview handles for selected images.
//!
//! On the web each accepted file becomes an object URL that must be revoked
//! when the session ends, or the blob stays alive for the page's lifetime.
//! Native builds render a data URI instead, where release is just a drop.

use mediscan_core::upload::PreviewHandle;

/// A locally viewable URL for a selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    url: String,
    released: bool,
}

impl ImagePreview {
    #[cfg(target_arch = "wasm32")]
    pub fn from_bytes(bytes: &[u8], content_type: &str) -> Self {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(content_type);

        let url = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .and_then(|blob| web_sys::Url::create_object_url_with_blob(&blob))
            .unwrap_or_default();

        Self {
            url,
            released: false,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_bytes(bytes: &[u8], content_type: &str) -> Self {
        use base64::Engine as _;

        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            url: format!("data:{content_type};base64,{encoded}"),
            released: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PreviewHandle for ImagePreview {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        #[cfg(target_arch = "wasm32")]
        if !self.url.is_empty() {
            let _ = web_sys::Url::revoke_object_url(&self.url);
        }

        self.url.clear();
    }
}
