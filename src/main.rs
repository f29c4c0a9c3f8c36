//! Flappy Komar entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlCanvasElement,
        KeyboardEvent, MouseEvent, TouchEvent, Window,
    };

    use flappy_komar::audio::BackgroundMusic;
    use flappy_komar::platform;
    use flappy_komar::renderer::{self, CanvasPainter, ImageSize};
    use flappy_komar::report::ScoreSink;
    use flappy_komar::sim::Activation;
    use flappy_komar::{Game, GameConfig};

    /// Page instance: the session plus everything browser-side
    struct App {
        game: Game<Box<dyn ScoreSink>>,
        canvas: HtmlCanvasElement,
        painter: CanvasPainter,
        background: Option<ImageSize>,
        music: BackgroundMusic,
    }

    impl App {
        /// Tap, click or space
        fn activate(&mut self) {
            match self.game.activate(platform::now_ms()) {
                Activation::Flapped => self.music.start(),
                Activation::Restarted => {}
            }
        }

        /// Simulate then paint
        fn frame(&mut self, time: f64) {
            self.game.frame(time);
            renderer::render(
                &mut self.painter,
                self.game.state(),
                self.game.params(),
                self.game.config(),
                self.background,
            );
        }

        /// Match the canvas to the window and rescale physics
        fn resize(&mut self) {
            let (w, h) = platform::viewport_size();
            self.canvas.set_width(w as u32);
            self.canvas.set_height(h as u32);
            self.game.resize(w, h);
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&JsValue::from_str("Logger already initialized"));
        }

        log::info!("Flappy Komar starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or_else(|| JsValue::from_str("no #game canvas"))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let config = GameConfig::load(&canvas);

        let (width, height) = platform::viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let music = BackgroundMusic::new(&config.music_track, config.music_volume);

        // First frame waits for the background; a failed load falls back to a flat color
        let mut painter = CanvasPainter::new(ctx);
        let background = platform::load_image(&config.background_image)
            .await
            .map(|image| {
                let size = ImageSize {
                    width: image.natural_width() as f32,
                    height: image.natural_height() as f32,
                };
                painter.set_background(image);
                size
            });

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(config, width, height, seed, platform::host_sink());
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            canvas,
            painter,
            background,
            music,
        }));

        setup_input_handlers(&window, &document, app.clone())?;
        setup_resize_handler(&window, app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Flappy Komar running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &Window,
        document: &Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Pointer
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().activate();
            });
            document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch: non-passive so the follow-up synthetic mouse events are suppressed
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().activate();
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    app.borrow_mut().activate();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Komar (native) starting...");
    log::info!("Native mode runs a headless autopilot demo");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2024);
    run_headless_demo(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one coin-variant session with the autopilot at 60 fps
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(seed: u64) {
    use flappy_komar::sim::autopilot;
    use flappy_komar::{Game, GameConfig, RecordingSink, Variant};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 60;

    let config = GameConfig {
        variant: Variant::Coins,
        ..GameConfig::load()
    };
    let mut game = Game::new(config, 400.0, 800.0, seed, RecordingSink::new());

    let mut now = 0.0;
    game.activate(now);
    let mut frames = 0;
    while frames < MAX_FRAMES && game.state().phase.is_active() {
        now += FRAME_MS;
        if autopilot::wants_flap(game.state(), game.params()) {
            game.activate(now);
        }
        game.frame(now);
        frames += 1;
    }

    let state = game.state();
    log::info!(
        "Demo finished after {} frames: phase={:?} score={} coins={}",
        frames,
        state.phase,
        state.score,
        state.coin_count
    );
    for payload in &game.sink().payloads {
        match payload.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Failed to encode payload: {}", e),
        }
    }
    println!("Final score: {} coins: {}", state.score, state.coin_count);
}
