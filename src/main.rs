//! Gap Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, Window};

    use gap_hopper::platform::{FrameHandle, FrameScheduler, KeyState};
    use gap_hopper::renderer::overlay::{self, LAYER_STYLE, WRAPPER_STYLE};
    use gap_hopper::renderer::{DrawList, RenderState};
    use gap_hopper::sim::PlayArea;
    use gap_hopper::{GameError, GameSession, Tuning};

    const CANVAS_ID: &str = "game";

    /// Everything one running page owns
    struct App {
        session: GameSession,
        renderer: RenderState,
        draw_list: DrawList,
        hud: HudOverlay,
    }

    /// Slot for the single frame callback, shared by every scheduler handle
    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// `requestAnimationFrame` bound as a frame scheduler.
    ///
    /// Every request reuses one owned callback, so a cancelled frame leaves
    /// nothing behind.
    #[derive(Clone)]
    struct AnimationFrames {
        window: Window,
        callback: FrameCallback,
    }

    impl FrameScheduler for AnimationFrames {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            let slot = self.callback.borrow();
            let callback = slot.as_ref()?;
            match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => Some(FrameHandle(id)),
                Err(e) => {
                    log::warn!("requestAnimationFrame failed: {:?}", e);
                    None
                }
            }
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            let _ = self.window.cancel_animation_frame(handle.0);
        }
    }

    /// Absolutely positioned divs standing in for canvas text
    struct HudOverlay {
        document: Document,
        layer: HtmlElement,
        labels: Vec<HtmlElement>,
    }

    impl HudOverlay {
        /// Wrap the canvas so the text layer is laid out against it
        fn new(document: &Document, canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
            let wrapper: HtmlElement = document.create_element("div")?.dyn_into()?;
            apply_static(&wrapper, WRAPPER_STYLE)?;
            let layer: HtmlElement = document.create_element("div")?.dyn_into()?;
            apply_static(&layer, LAYER_STYLE)?;

            let canvas_node: &web_sys::Node = canvas.as_ref();
            if let Some(parent) = canvas.parent_node() {
                parent.insert_before(&wrapper, Some(canvas_node))?;
            }
            wrapper.append_child(canvas)?;
            wrapper.append_child(&layer)?;

            Ok(Self {
                document: document.clone(),
                layer,
                labels: Vec::new(),
            })
        }

        /// Mirror this frame's text commands into the DOM
        fn sync(&mut self, list: &DrawList) -> Result<(), JsValue> {
            let mut count = 0;
            for cmd in list.texts() {
                if count == self.labels.len() {
                    let label: HtmlElement = self.document.create_element("div")?.dyn_into()?;
                    self.layer.append_child(&label)?;
                    self.labels.push(label);
                }
                let label = &self.labels[count];
                label.set_text_content(Some(&cmd.text));
                let style = label.style();
                for (name, value) in overlay::label_style(cmd) {
                    style.set_property(name, &value)?;
                }
                count += 1;
            }

            for label in &self.labels[count..] {
                label.style().set_property("display", "none")?;
            }
            Ok(())
        }
    }

    fn apply_static(el: &HtmlElement, decls: &[(&str, &str)]) -> Result<(), JsValue> {
        let style = el.style();
        for (name, value) in decls {
            style.set_property(name, value)?;
        }
        Ok(())
    }

    fn on_frame(app: &Rc<RefCell<App>>, sched: &mut AnimationFrames) {
        let mut guard = app.borrow_mut();
        let App {
            session,
            renderer,
            draw_list,
            hud,
        } = &mut *guard;

        session.frame(sched, draw_list);

        match renderer.render(draw_list) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                renderer.resize(renderer.size.0, renderer.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if let Err(e) = hud.sync(draw_list) {
            log::warn!("HUD update failed: {:?}", e);
        }
    }

    fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>, frames: AnimationFrames) {
        for (event, state) in [("keydown", KeyState::Pressed), ("keyup", KeyState::Released)] {
            let app = app.clone();
            let mut frames = frames.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Key events never arrive mid-frame, so the app is free here
                let Ok(mut g) = app.try_borrow_mut() else {
                    return;
                };
                if g.session.handle_key(&event.key(), state, &mut frames) {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub async fn run() -> Result<(), GameError> {
        log::info!("Gap Hopper starting...");

        let window = web_sys::window().ok_or(GameError::NoDocument)?;
        let document = window.document().ok_or(GameError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| GameError::MissingCanvas(CANVAS_ID.into()))?
            .dyn_into()
            .map_err(|_| GameError::NotACanvas(CANVAS_ID.into()))?;

        // Size the play area from the window, then the backing store from the DPR
        let outer_width = window
            .outer_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0) as f32;
        let area = PlayArea::from_outer_width(outer_width);
        let dpr = window.device_pixel_ratio();
        let width = (area.width as f64 * dpr) as u32;
        let height = (area.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.style().set_property("width", &format!("{}px", area.width));
        let _ = canvas.style().set_property("height", &format!("{}px", area.height));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| GameError::NoAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = RenderState::new(surface, &adapter, width, height).await?;
        let hud = HudOverlay::new(&document, &canvas)
            .map_err(|e| GameError::Surface(format!("HUD overlay: {:?}", e)))?;

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            session: GameSession::new(area, Tuning::default(), seed),
            renderer,
            draw_list: DrawList::new(),
            hud,
        }));

        let frames = AnimationFrames {
            window: window.clone(),
            callback: Rc::new(RefCell::new(None)),
        };
        {
            let app = app.clone();
            let mut sched = frames.clone();
            // The callback holds a handle to its own slot; it lives as long as the page
            *frames.callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                on_frame(&app, &mut sched);
            }));
        }

        setup_input_handlers(&window, app.clone(), frames.clone());

        let mut sched = frames;
        app.borrow_mut().session.start(&mut sched);

        log::info!("Gap Hopper running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {e}").into());
    }

    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Upper bound on frames for the headless run
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u32 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gap_hopper::platform::ManualScheduler;
    use gap_hopper::renderer::DrawList;
    use gap_hopper::sim::{PlayArea, autopilot_input};
    use gap_hopper::{GameSession, Tuning};

    env_logger::init();
    log::info!("Gap Hopper (native) starting...");
    log::info!("Native mode runs headless on autopilot - serve the wasm build for the playable game");

    let tuning = match std::env::args_os().nth(1) {
        Some(path) => match Tuning::load(std::path::Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut session = GameSession::new(PlayArea::default(), tuning, seed);
    let mut sched = ManualScheduler::new();
    let mut draw_list = DrawList::new();
    session.start(&mut sched);

    let mut frames = 0;
    while frames < MAX_HEADLESS_FRAMES && sched.fire().is_some() {
        let input = autopilot_input(session.world());
        session.set_jump(input.jump);
        session.frame(&mut sched, &mut draw_list);
        frames += 1;
    }
    session.stop(&mut sched);

    let world = session.world();
    log::info!("Headless run finished after {} frames", frames);
    println!(
        "seed {} | frames {} | score {} | {}",
        world.seed,
        frames,
        world.score,
        if world.is_running() { "still running" } else { "game over" }
    );
}
