//! Classic Pong entry point
//!
//! In the browser: wires the session to the page (timer, input, DOM, audio,
//! WebGPU). Natively: plays a headless computer-vs-computer match.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use classic_pong::GameConfig;
    use classic_pong::audio::WebAudio;
    use classic_pong::input::{InputMode, mouse_to_field_y};
    use classic_pong::konami::{CheatFlag, KonamiMatcher};
    use classic_pong::renderer::{RenderState, shapes};
    use classic_pong::sim::GameSession;

    fn now_ms() -> u64 {
        js_sys::Date::now() as u64
    }

    fn document() -> Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("no document")
    }

    fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
        document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = html_element(document, id) {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        audio: WebAudio,
        render_state: Option<RenderState>,
        /// Interval id while the tick timer is installed
        timer_id: Option<i32>,
        /// Callback handed to `setInterval`
        tick_fn: Option<js_sys::Function>,
        konami: KonamiMatcher,
        cheat: CheatFlag,
        board_offset_top: f32,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64) -> Self {
            let cheat = CheatFlag::new(config.cheat_display_ms);
            Self {
                session: GameSession::new(config, seed),
                audio: WebAudio::new(),
                render_state: None,
                timer_id: None,
                tick_fn: None,
                konami: KonamiMatcher::new(),
                cheat,
                board_offset_top: 0.0,
            }
        }

        /// Start button pressed
        fn start(&mut self) {
            if !self.session.start(now_ms()) {
                return;
            }

            if let (Some(window), Some(tick_fn)) = (web_sys::window(), self.tick_fn.as_ref()) {
                let period = self.session.config.tick_period_ms as i32;
                match window.set_interval_with_callback_and_timeout_and_arguments_0(tick_fn, period)
                {
                    Ok(id) => self.timer_id = Some(id),
                    Err(e) => log::error!("Failed to start game timer: {:?}", e),
                }
            }
            self.sync_dom();
        }

        /// Periodic timer fired
        fn on_timer(&mut self) {
            self.session.timer_tick(now_ms(), &mut self.audio);

            if !self.session.timer_running {
                if let (Some(window), Some(id)) = (web_sys::window(), self.timer_id.take()) {
                    window.clear_interval_with_handle(id);
                    log::info!("Game timer stopped");
                }
            }

            self.render();
            self.sync_dom();
        }

        fn move_player(&mut self, y: f32) {
            self.session.move_player(y);
            // The timer is off on the title screen; redraw right away
            if self.timer_id.is_none() {
                self.render();
            }
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = shapes::frame(&self.session);
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Mirror scores and overlays into the page
        fn sync_dom(&self) {
            let document = document();
            let s = &self.session;

            set_text(&document, "score1", &s.p1.score.to_string());
            set_text(&document, "score2", &s.p2.score.to_string());
            set_text(&document, "status", s.status.text);
            set_visible(&document, "status", s.status.visible);
            set_visible(&document, "start", s.start_visible);
        }

        /// Key pressed anywhere on the page
        fn on_key(&mut self, key_code: u32, game: &Rc<RefCell<Game>>) {
            if !self.konami.press_code(key_code) {
                return;
            }

            log::info!("Konami code entered");
            let now = js_sys::Date::now();
            self.cheat.activate(now);
            if let Some(el) = document().get_element_by_id("konami") {
                let _ = el.class_list().add_1("show");
            }

            let game = game.clone();
            let closure = Closure::once(move || {
                let mut g = game.borrow_mut();
                if g.cheat.expire(js_sys::Date::now()) {
                    if let Some(el) = document().get_element_by_id("konami") {
                        let _ = el.class_list().remove_1("show");
                    }
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    self.session.config.cheat_display_ms as i32,
                );
            }
            closure.forget();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Classic Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = GameConfig::load();
        let seed = config.seed.unwrap_or_else(now_ms);
        let game = Rc::new(RefCell::new(Game::new(config, seed)));
        log::info!("Game initialized with seed: {}", seed);

        if let Some(board) = html_element(&document, "board") {
            game.borrow_mut().board_offset_top = board.offset_top() as f32;
        }

        init_renderer(&document, &game).await;
        setup_timer_callback(game.clone());
        setup_buttons(&document, game.clone());
        setup_input_handlers(&window, &document, game.clone());
        setup_keyboard(&window, game.clone());

        {
            let mut g = game.borrow_mut();
            g.render();
            g.sync_dom();
        }

        log::info!("Classic Pong ready!");
    }

    async fn init_renderer(document: &Document, game: &Rc<RefCell<Game>>) {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let field = game.borrow().session.config.field;
        let width = field.width as u32;
        let height = field.height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas)) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("No graphics adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, field).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }
    }

    fn setup_timer_callback(game: Rc<RefCell<Game>>) {
        let handle = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            handle.borrow_mut().on_timer();
        });
        let tick_fn: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        game.borrow_mut().tick_fn = Some(tick_fn);
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Start button
        if let Some(btn) = document.get_element_by_id("start") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Splash overlay
        if let Some(splash) = document.get_element_by_id("splash") {
            let splash_el = splash.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let g = &mut *g;
                g.session.dismiss_splash(&mut g.audio);
                let _ = splash_el.class_list().add_1("hide");
            });
            let _ =
                splash.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_input_handlers(window: &web_sys::Window, document: &Document, game: Rc<RefCell<Game>>) {
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let mode = InputMode::detect(&user_agent);
        log::info!("Input mode: {:?}", mode);

        match mode {
            InputMode::Touch => {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    if let Some(touch) = event.touches().get(0) {
                        game.borrow_mut().move_player(touch.page_y() as f32);
                    }
                    event.prevent_default();
                });
                let _ = document
                    .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            InputMode::Mouse => {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    let y = mouse_to_field_y(event.client_y() as f32, g.board_offset_top);
                    g.move_player(y);
                });
                let _ = document
                    .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let handle = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            handle.borrow_mut().on_key(event.key_code(), &game);
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use classic_pong::audio::{Cue, RecordingCues};
    use classic_pong::sim::{GamePhase, GameSession};
    use classic_pong::GameConfig;

    env_logger::init();
    log::info!("Classic Pong (native) starting...");
    log::info!("Native mode runs a headless demo match - build for wasm32 to play");

    // Give up after an hour of simulated time
    const MAX_SIM_MS: u64 = 60 * 60 * 1000;

    let config = GameConfig::load();
    let seed = config.seed.unwrap_or(0x5EED);
    let period = u64::from(config.tick_period_ms);
    let bot_steps = config.tick_period_ms.div_ceil(config.ai_step_ms);

    let mut cues = RecordingCues::default();
    let mut session = GameSession::new(config, seed);
    session.dismiss_splash(&mut cues);
    session.start(0);

    let mut now = 0;
    let mut final_score = None;
    while session.timer_running && now < MAX_SIM_MS {
        // No pointer here, so the left paddle gets the computer's nudges
        if session.phase == GamePhase::Live {
            for _ in 0..bot_steps {
                session.p1.ai(&session.ball);
            }
        }
        now += period;
        session.timer_tick(now, &mut cues);

        if session.phase == GamePhase::GameOver && final_score.is_none() {
            final_score = Some((session.p1.score, session.p2.score));
            log::debug!(
                "Paddles at game over: {}",
                serde_json::to_string(&[&session.p1, &session.p2]).unwrap_or_default()
            );
        }
    }

    match final_score {
        Some((left, right)) => {
            println!(
                "Final score {} - {} after {:.1}s ({} paddle hits)",
                left,
                right,
                now as f64 / 1000.0,
                cues.count(Cue::Bounce)
            );
        }
        None => log::warn!("Match did not finish within {} ms", MAX_SIM_MS),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
