//! Browser capability bridge for clipboard and the Web Share API
//!
//! Pages decide what to do from an explicit `PlatformBridge` value instead
//! of poking at `navigator` mid-handler, so the share fallback chain
//! (native sheet, then clipboard, then an error toast) is a pure decision
//! that tests can cover without a browser.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// How long a "copied" indicator stays up after a successful clipboard write
pub const COPY_INDICATOR_MS: u32 = 2_000;

/// Whether one browser facility can be called at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable,
}

impl Capability {
    pub fn is_available(self) -> bool {
        matches!(self, Capability::Available)
    }

    fn from_flag(found: bool) -> Self {
        if found {
            Capability::Available
        } else {
            Capability::Unavailable
        }
    }
}

/// Snapshot of the sharing facilities the current browser exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformBridge {
    pub clipboard: Capability,
    pub share: Capability,
}

/// How a share request should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareRoute {
    /// The native share sheet
    Native,
    /// No share sheet; copy to the clipboard instead
    CopyFallback,
    /// Neither facility exists; only an error can be reported
    Unsupported,
}

impl PlatformBridge {
    /// Probe `navigator` for clipboard and Web Share support
    pub fn detect() -> Self {
        match web_sys::window() {
            Some(window) => {
                let navigator = window.navigator();
                let nav: &JsValue = navigator.as_ref();
                Self::fixed(
                    Capability::from_flag(has_member(nav, "clipboard")),
                    Capability::from_flag(has_member(nav, "share")),
                )
            }
            None => Self::fixed(Capability::Unavailable, Capability::Unavailable),
        }
    }

    /// Build a bridge with known capabilities
    pub const fn fixed(clipboard: Capability, share: Capability) -> Self {
        Self { clipboard, share }
    }

    /// Pick the delivery route for a share request
    pub fn share_route(&self) -> ShareRoute {
        if self.share.is_available() {
            ShareRoute::Native
        } else if self.clipboard.is_available() {
            ShareRoute::CopyFallback
        } else {
            ShareRoute::Unsupported
        }
    }
}

fn has_member(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// What goes onto the native share sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    /// Payload announcing one receive address
    pub fn for_address(asset_name: &str, symbol: &str, address: &str) -> Self {
        Self {
            title: format!("My {asset_name} Address"),
            text: format!("Here's my {asset_name} ({symbol}) address: {address}"),
        }
    }
}

/// A clipboard or share call that did not go through
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("clipboard is not available in this context")]
    ClipboardUnavailable,
    #[error("share is not available in this context")]
    ShareUnavailable,
    #[error("the platform rejected the request: {0}")]
    Rejected(String),
}

/// Write `value` to the system clipboard
///
/// Callers should check `PlatformBridge::clipboard` first; a missing
/// window still fails cleanly.
pub async fn copy_text(value: &str) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::ClipboardUnavailable)?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(value))
        .await
        .map(|_| ())
        .map_err(|err| PlatformError::Rejected(js_error_message(&err)))
}

/// Open the native share sheet with `payload`
///
/// Rejection covers both missing support and the user dismissing the
/// sheet; callers surface it the same way.
pub async fn share(payload: &SharePayload) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::ShareUnavailable)?;
    let data = web_sys::ShareData::new();
    data.set_title(&payload.title);
    data.set_text(&payload.text);
    JsFuture::from(window.navigator().share_with_data(&data))
        .await
        .map(|_| ())
        .map_err(|err| PlatformError::Rejected(js_error_message(&err)))
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_route_prefers_native() {
        let bridge = PlatformBridge::fixed(Capability::Available, Capability::Available);
        assert_eq!(bridge.share_route(), ShareRoute::Native);

        // the native sheet wins even without a clipboard
        let bridge = PlatformBridge::fixed(Capability::Unavailable, Capability::Available);
        assert_eq!(bridge.share_route(), ShareRoute::Native);
    }

    #[test]
    fn test_share_route_falls_back_to_clipboard() {
        let bridge = PlatformBridge::fixed(Capability::Available, Capability::Unavailable);
        assert_eq!(bridge.share_route(), ShareRoute::CopyFallback);
    }

    #[test]
    fn test_share_route_reports_unsupported() {
        let bridge = PlatformBridge::fixed(Capability::Unavailable, Capability::Unavailable);
        assert_eq!(bridge.share_route(), ShareRoute::Unsupported);
    }

    #[test]
    fn test_share_payload_for_address() {
        let payload = SharePayload::for_address("Bitcoin", "BTC", "1A1zP1");

        assert_eq!(payload.title, "My Bitcoin Address");
        assert_eq!(payload.text, "Here's my Bitcoin (BTC) address: 1A1zP1");
    }

    #[test]
    fn test_capability_flags() {
        assert!(Capability::Available.is_available());
        assert!(!Capability::Unavailable.is_available());
        assert!(Capability::from_flag(true).is_available());
        assert!(!Capability::from_flag(false).is_available());
    }
}
