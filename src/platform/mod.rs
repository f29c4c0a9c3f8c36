//! Platform abstraction layer
//!
//! Browser glue used by the wasm driver:
//! - Viewport size and host clock
//! - Host bridge detection (`window.Telegram.WebApp`)
//! - Background image loading

use crate::report::{NullSink, ScoreSink};

/// Pick the score sink for this page: the host bridge when present,
/// otherwise [`NullSink`]. Detection happens once, at startup.
#[cfg(target_arch = "wasm32")]
pub fn host_sink() -> Box<dyn ScoreSink> {
    match web::TelegramSink::detect() {
        Some(sink) => {
            log::info!("Host bridge found, scores will be reported");
            Box::new(sink)
        }
        None => {
            log::info!("No host bridge, score reporting disabled");
            Box::new(NullSink)
        }
    }
}

/// Native builds never have a host bridge
#[cfg(not(target_arch = "wasm32"))]
pub fn host_sink() -> Box<dyn ScoreSink> {
    Box::new(NullSink)
}

#[cfg(target_arch = "wasm32")]
pub use web::{TelegramSink, load_image, now_ms, viewport_size};

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    use crate::report::{ScorePayload, ScoreSink};

    /// Current window inner size in CSS pixels
    pub fn viewport_size() -> (f32, f32) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (w as f32, h as f32)
    }

    /// High resolution host clock (ms)
    pub fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Load an image and wait until it is decoded.
    ///
    /// Returns `None` on any failure; callers fall back to a flat color.
    pub async fn load_image(src: &str) -> Option<HtmlImageElement> {
        let image = HtmlImageElement::new().ok()?;
        image.set_src(src);
        match JsFuture::from(image.decode()).await {
            Ok(_) => {
                log::info!(
                    "Loaded {} ({}x{})",
                    src,
                    image.natural_width(),
                    image.natural_height()
                );
                Some(image)
            }
            Err(e) => {
                log::warn!("Failed to load {}: {:?}", src, e);
                None
            }
        }
    }

    /// Mini-app host bridge: `Telegram.WebApp.sendData(json)`
    pub struct TelegramSink {
        web_app: JsValue,
        send_data: Function,
    }

    impl TelegramSink {
        /// Look up the bridge on `window`; `None` when the page is not embedded
        pub fn detect() -> Option<Self> {
            let window = web_sys::window()?;
            let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
            if telegram.is_undefined() || telegram.is_null() {
                return None;
            }
            let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
            if web_app.is_undefined() || web_app.is_null() {
                return None;
            }
            let send_data = Reflect::get(&web_app, &JsValue::from_str("sendData"))
                .ok()?
                .dyn_into::<Function>()
                .ok()?;
            Some(Self { web_app, send_data })
        }
    }

    impl ScoreSink for TelegramSink {
        fn report(&mut self, payload: &ScorePayload) {
            let json = match payload.to_json() {
                Ok(json) => json,
                Err(e) => {
                    log::debug!("Failed to encode score payload: {}", e);
                    return;
                }
            };
            if let Err(e) = self.send_data.call1(&self.web_app, &JsValue::from_str(&json)) {
                log::debug!("Host bridge rejected score: {:?}", e);
            }
        }
    }
}
