//! Arena Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use arena_shooter::Settings;
    use arena_shooter::consts::*;
    use arena_shooter::platform::{Autopilot, InputEvent, InputRouter, Key, SecondTimer};
    use arena_shooter::renderer::RenderState;
    use arena_shooter::sim::{FrameSnapshot, GamePhase, GameState, tick};
    use arena_shooter::ui::{self, Align};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        router: InputRouter,
        render_state: Option<RenderState>,
        autopilot: Option<Autopilot>,
        clock: SecondTimer,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        /// Canvas CSS size, for mapping pointer coordinates into the arena
        canvas_css: (f32, f32),
        stopped: bool,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let autopilot = settings.autopilot.then(Autopilot::new);
            Self {
                state: GameState::new(seed, settings.tuning.clone()),
                router: InputRouter::new(),
                render_state: None,
                autopilot,
                clock: SecondTimer::new(),
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                canvas_css: (settings.tuning.arena_width, settings.tuning.arena_height),
                stopped: false,
                settings,
            }
        }

        /// Convert a canvas-relative CSS position to arena coordinates
        fn to_arena(&self, x: f32, y: f32) -> Vec2 {
            let (w, h) = self.canvas_css;
            let arena = self.state.tuning.arena_size();
            Vec2::new(x * arena.x / w.max(1.0), y * arena.y / h.max(1.0))
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            // The wall clock sees the real frame time; only the simulation is clamped
            for _ in 0..self.clock.advance(dt as f64) {
                self.router.push(InputEvent::ClockSecond);
            }

            self.accumulator += dt.min(0.25);
            let frame_dt = self.settings.frame_dt();
            let mut substeps = 0;
            while self.accumulator >= frame_dt && substeps < MAX_SUBSTEPS {
                if let Some(pilot) = self.autopilot.as_mut() {
                    let events = pilot.drive(&self.state);
                    self.router.extend(events);
                }
                let input = self.router.take();
                tick(&mut self.state, &input);
                self.accumulator -= frame_dt;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Drop the backlog rather than spiral
                self.accumulator = 0.0;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = FrameSnapshot::capture(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.draw(&snapshot) {
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
            self.update_overlay(&snapshot);
        }

        /// Rebuild overlay text in the DOM
        fn update_overlay(&self, snapshot: &FrameSnapshot) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(el) = document.get_element_by_id("overlay") else {
                return;
            };

            let fps = self.settings.show_fps.then_some(self.fps);
            let arena = self.state.tuning.arena_size();
            let (sx, sy) = (self.canvas_css.0 / arena.x, self.canvas_css.1 / arena.y);
            let mut html = String::new();
            for item in ui::overlay(snapshot, fps) {
                let shift = match item.align {
                    Align::Left => "0",
                    Align::Center => "-50%",
                    Align::Right => "-100%",
                };
                html.push_str(&format!(
                    "<div class=\"text\" style=\"left:{:.0}px;top:{:.0}px;font-size:{:.0}px;\
                     text-align:{};transform:translate({},-50%)\">{}</div>",
                    item.pos.x * sx,
                    item.pos.y * sy,
                    item.size * sy,
                    item.align.as_css(),
                    shift,
                    item.text
                ));
            }
            el.set_inner_html(&html);
        }

        /// Release the GPU surface and stop the loop
        fn shutdown(&mut self) {
            self.render_state = None;
            self.stopped = true;
            log::info!("Arena Shooter stopped");

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(canvas) = document.get_element_by_id("canvas") {
                    let _ = canvas.set_attribute("class", "hidden");
                }
                if let Some(el) = document.get_element_by_id("overlay") {
                    el.set_inner_html("<div class=\"text goodbye\">Thanks for playing</div>");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("{} starting...", TITLE);

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

        let settings = Settings::load();

        // Canvas backing store matches the arena, scaled by device pixel ratio
        let dpr = window.device_pixel_ratio();
        let width = (settings.tuning.arena_width as f64 * dpr) as u32;
        let height = (settings.tuning.arena_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        game.borrow_mut().canvas_css = (
            canvas.client_width() as f32,
            canvas.client_height() as f32,
        );

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let arena = {
            let g = game.borrow();
            (g.state.tuning.arena_width, g.state.tuning.arena_height)
        };
        match RenderState::new(surface, &adapter, width, height, arena).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("{} running!", TITLE);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - aim point
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.canvas_css = (
                    canvas_clone.client_width() as f32,
                    canvas_clone.client_height() as f32,
                );
                let pos = g.to_arena(event.offset_x() as f32, event.offset_y() as f32);
                g.router.push(InputEvent::PointerMove(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - fire, or pick a menu option
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_arena(event.offset_x() as f32, event.offset_y() as f32);
                g.router.push(InputEvent::PointerDown(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up anywhere stops firing
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().router.push(InputEvent::PointerUp);
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard down
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(key) = Key::from_web_key(&key) {
                    event.prevent_default();
                    g.router.push(InputEvent::KeyDown(key));
                } else if key == "i" || key == "I" {
                    g.autopilot = match g.autopilot.take() {
                        Some(_) => None,
                        None => Some(Autopilot::new()),
                    };
                    log::info!("Autopilot: {}", g.autopilot.is_some());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_web_key(&event.key()) {
                    game.borrow_mut().router.push(InputEvent::KeyUp(key));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.phase == GamePhase::Running {
                        g.router.push(InputEvent::KeyDown(Key::Pause));
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Running {
                    g.router.push(InputEvent::KeyDown(Key::Pause));
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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

            g.update(dt, time);

            if g.state.exit_requested {
                g.shutdown();
                return;
            }

            g.render();
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
    use arena_shooter::Settings;
    use arena_shooter::consts::TITLE;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("{} (native) starting...", TITLE);
    log::info!("Native mode runs headless on autopilot - run with `trunk serve` for the web version");

    let settings = Settings::load();
    run_headless(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Fixed-rate loop driven by the autopilot until `demo_seconds` elapse or it exits
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: &arena_shooter::Settings) {
    use std::time::{SystemTime, UNIX_EPOCH};

    use arena_shooter::platform::{Autopilot, FrameLimiter, InputEvent, InputRouter, SecondTimer};
    use arena_shooter::sim::{FrameSnapshot, GameState, tick};
    use arena_shooter::ui;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::new(seed, settings.tuning.clone());
    let mut router = InputRouter::new();
    let mut pilot = Autopilot::new();
    let mut limiter = FrameLimiter::new(settings.target_fps);
    let mut clock = SecondTimer::new();
    let mut wall = 0.0f64;

    loop {
        let dt = limiter.wait();
        wall += dt;

        let seconds = clock.advance(dt);
        for _ in 0..seconds {
            router.push(InputEvent::ClockSecond);
        }
        router.extend(pilot.drive(&state));
        if wall >= settings.demo_seconds as f64 {
            router.push(InputEvent::Quit);
        }

        let phase = state.phase;
        tick(&mut state, &router.take());

        if seconds > 0 || state.phase != phase {
            let snapshot = FrameSnapshot::capture(&state);
            log::info!("{}", ui::status_line(&snapshot));
        }

        if state.exit_requested {
            break;
        }
    }

    log::info!("Shutting down after {:.1}s", wall);
}
