//! Flappy Space entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use flappy_space::renderer::CanvasSurface;
    use flappy_space::sim::Viewport;
    use flappy_space::{Session, Settings};

    /// Everything the frame loop and event listeners touch
    struct App {
        session: Session,
        surface: CanvasSurface,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(session: Session, surface: CanvasSurface, settings: Settings) -> Self {
            Self {
                session,
                surface,
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One display frame: advance the active loop and paint it
        fn frame(&mut self, time: f64) {
            let cmds = self.session.advance_frame(&self.settings);
            self.surface.paint(&cmds);
            self.track_fps(time);
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Resize the backing store and every sizing-dependent component
        fn resize(&mut self, width: f32, height: f32) {
            self.surface.resize(width as u32, height as u32);
            self.session.set_viewport(Viewport::new(width, height));
        }

        fn update_hud(&self) {
            if !self.settings.show_fps {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    /// Current window dimensions; zero until the browser reports them
    fn measure(window: &Window) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        (width, height)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Space starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = measure(&window);
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();

        let session = Session::new(seed, Viewport::new(width, height));
        let mut surface = CanvasSurface::new(canvas);
        surface.resize(width as u32, height as u32);

        let app = Rc::new(RefCell::new(App::new(session, surface, settings)));

        log::info!("Mounted at {width}x{height} with seed {seed}");

        setup_resize_listener(&window, app.clone());
        setup_key_listener(&window, app.clone());
        setup_play_button(app.clone());

        request_animation_frame(app);
    }

    fn setup_resize_listener(window: &Window, app: Rc<RefCell<App>>) {
        let window_handle = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = measure(&window_handle);
            app.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_key_listener(window: &Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut app = app.borrow_mut();
            match event.code().as_str() {
                "Space" => {
                    // Ignored while idle; only a live session may swallow
                    // the key's default page scroll
                    if app.session.queue_flap() {
                        event.prevent_default();
                    }
                }
                "KeyD" => {
                    log::debug!("state dump: {}", app.session.debug_dump());
                }
                _ => {}
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_play_button(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(btn) = document.get_element_by_id("play-btn") else {
            log::warn!("no play button in page; session stays idle");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let seed = js_sys::Date::now() as u64;
            app.borrow_mut().session.start(seed);

            // Hide the start overlay now that the game owns the surface
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(overlay) = document.get_element_by_id("start-overlay") {
                    let _ = overlay.set_attribute("class", "hidden");
                }
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut app = app.borrow_mut();
            app.frame(time);
            app.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_space::sim::{GameState, TickInput, Viewport, tick};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    log::info!("Flappy Space (native) - headless demo run with seed {seed}");

    let mut state = GameState::new(seed, Viewport::new(800.0, 600.0));
    for i in 0..1800u32 {
        // Flap on a fixed cadence so the demo ship survives a while
        let input = TickInput { flap: i % 28 == 0 };
        tick(&mut state, &input);
        if state.time_ticks % 300 == 0 {
            log::info!(
                "tick {:4}: ship y {:6.1} vy {:5.2}, {} gates on screen",
                state.time_ticks,
                state.ship.y,
                state.ship.vy,
                state.gates.len()
            );
        }
    }

    println!(
        "simulated {} frames; {} gates on screen at the end",
        state.time_ticks,
        state.gates.len()
    );
    println!("the playable build is the web one - serve with `trunk serve`");
}
