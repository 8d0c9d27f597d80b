//! Kickshot entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement};

    use kickshot::consts::*;
    use kickshot::platform::{self, web};
    use kickshot::renderer::{self, RenderState};
    use kickshot::sim::{FrameClock, MatchSession, SessionEvent, TickInput, tick};
    use kickshot::{MatchConfig, Viewport};

    /// Game instance holding all state
    struct Game {
        session: MatchSession,
        render_state: Option<RenderState>,
        clock: FrameClock,
        last_time: f64,
        input: TickInput,
        /// Last score written to the DOM
        shown_score: Option<u32>,
        /// HUD anchors need moving after a resize
        hud_dirty: bool,
    }

    impl Game {
        fn new(config: MatchConfig, viewport: Viewport) -> Self {
            Self {
                session: MatchSession::new(config, viewport),
                render_state: None,
                clock: FrameClock::default(),
                last_time: 0.0,
                input: TickInput::default(),
                shown_score: None,
                hud_dirty: true,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            for _ in 0..self.clock.advance(dt) {
                let input = self.input.clone();
                tick(&mut self.session, &input, SIM_DT);

                // Clear one-shot inputs after processing
                self.input.shoot = false;
            }

            for event in self.session.drain_events() {
                match event {
                    SessionEvent::GoalScored { score } => log::info!("Goal! ({})", score),
                    SessionEvent::Resized { .. } => self.hud_dirty = true,
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = renderer::scene(&self.session);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let viewport = render_state.viewport;
                        render_state.resize(w, h, viewport);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if self.shown_score != Some(self.session.score) {
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&self.session.score_text()));
                }
                self.shown_score = Some(self.session.score);
            }

            if self.hud_dirty {
                let hud = self.session.hud;
                place(&document, "score", hud.score_text.x, hud.score_text.y);
                place(&document, "shoot-btn", hud.shoot_button.x, hud.shoot_button.y);
                self.hud_dirty = false;
            }
        }

        /// Window changed size: resize canvas, surface and session
        fn handle_resize(&mut self, canvas: &HtmlCanvasElement) {
            let Some(viewport) = web::window_viewport() else {
                log::debug!("Ignoring resize to an empty window");
                return;
            };
            let (width, height) = size_canvas(canvas, viewport);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height, viewport);
            }
            self.session.resize(viewport);
        }
    }

    /// Move a HUD element to a viewport position
    fn place(document: &web_sys::Document, id: &str, x: f32, y: f32) {
        let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("left", &format!("{}px", x));
        let _ = style.set_property("top", &format!("{}px", y));
    }

    /// Match the canvas backing store to the viewport; returns physical size
    fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) -> (u32, u32) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = (viewport.width as f64 * dpr) as u32;
        let height = (viewport.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Kickshot starting...");

        // Landscape only; refusal is expected on desktop browsers
        wasm_bindgen_futures::spawn_local(async {
            platform::report_orientation_lock(web::lock_landscape().await);
        });

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = MatchConfig::load_or_default(web::config_json().as_deref());
        let viewport = web::window_viewport()
            .or_else(|| Viewport::new(config.default_width, config.default_height))
            .unwrap_or(Viewport {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            });
        let (width, height) = size_canvas(&canvas, viewport);

        let game = Rc::new(RefCell::new(Game::new(config, viewport)));
        log::info!("Match created at {}x{}", viewport.width, viewport.height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => {
                log::info!("Using adapter: {:?}", adapter.get_info().name);
                match RenderState::new(surface, &adapter, width, height, viewport).await {
                    Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                    Err(e) => log::error!("Failed to create device: {e}"),
                }
            }
            Err(e) => log::error!("No graphics adapter: {e}"),
        }

        setup_input_handlers(game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Show HUD
        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Kickshot running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Shoot button (pointer covers mouse, touch and pen)
        if let Some(btn) = document.get_element_by_id("shoot-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                event.prevent_default();
                game.borrow_mut().input.shoot = true;
            });
            let _ = btn
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if matches!(event.key().as_str(), " " | "Enter") {
                    game.borrow_mut().input.shoot = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().handle_resize(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kickshot (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    kickshot::platform::report_orientation_lock(kickshot::platform::lock_landscape());
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Shoot every two seconds for a simulated minute and log what happens
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use kickshot::consts::SIM_DT;
    use kickshot::sim::{MatchSession, SessionEvent, TickInput, tick};
    use kickshot::{MatchConfig, Viewport};

    let config = MatchConfig::load_or_default(std::env::var("KICKSHOT_CONFIG").ok().as_deref());
    let Some(viewport) = Viewport::new(config.default_width, config.default_height) else {
        log::error!("Default viewport is empty");
        return;
    };
    let mut session = MatchSession::new(config, viewport);

    let ticks_per_shot = (2.0 / SIM_DT) as u32;
    for i in 0..(60.0 / SIM_DT) as u32 {
        let input = TickInput {
            shoot: i % ticks_per_shot == 0,
        };
        tick(&mut session, &input, SIM_DT);

        for event in session.drain_events() {
            match event {
                SessionEvent::GoalScored { score } => log::info!("Goal! ({})", score),
                SessionEvent::DifficultyRaised { goal_speed, ball_speed } => {
                    log::info!("Faster: goal {} px/s, ball {} px/s", goal_speed, ball_speed)
                }
                _ => {}
            }
        }
    }

    println!("{}", session.score_text());
}
