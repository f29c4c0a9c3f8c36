//! Background music
//!
//! One looping track, started on the first flap. Browsers may reject
//! playback (autoplay policy, missing file); that is logged and ignored.

/// Latch that lets playback be requested at most once per page
#[derive(Debug, Clone, Copy, Default)]
pub struct MusicLatch {
    started: bool,
}

impl MusicLatch {
    /// Returns true only on the first call
    pub fn try_start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BackgroundMusic;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlAudioElement;

    use super::MusicLatch;

    /// Looping music track backed by an `<audio>` element
    pub struct BackgroundMusic {
        element: Option<HtmlAudioElement>,
        latch: MusicLatch,
    }

    impl BackgroundMusic {
        pub fn new(src: &str, volume: f64) -> Self {
            let element = HtmlAudioElement::new_with_src(src).ok();
            match &element {
                Some(el) => {
                    el.set_loop(true);
                    el.set_volume(volume);
                }
                None => log::warn!("Failed to create audio element - music disabled"),
            }
            Self {
                element,
                latch: MusicLatch::default(),
            }
        }

        /// Start playback once; later calls do nothing
        pub fn start(&mut self) {
            if !self.latch.try_start() {
                return;
            }
            let Some(el) = &self.element else { return };
            match el.play() {
                Ok(promise) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::debug!("Music playback rejected: {:?}", e);
                        }
                    });
                }
                Err(e) => log::debug!("Music playback failed: {:?}", e),
            }
        }
    }
}
