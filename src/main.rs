//! Ball Mitosis entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::{Clamped, JsCast};
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData, KeyboardEvent,
        PointerEvent, Window,
    };

    use ball_mitosis::platform::Input;
    use ball_mitosis::renderer::Viewport;
    use ball_mitosis::sim::{CancelHandle, Composer, Scheduler};
    use ball_mitosis::{Settings, build_composer};

    /// Game instance holding all state
    struct Game {
        scheduler: Scheduler<Composer>,
        ctx: CanvasRenderingContext2d,
        cancel: CancelHandle,
        last_population: usize,
    }

    impl Game {
        /// Step the world and present the composed surface
        ///
        /// Returns false once the loop has been cancelled; nothing is stepped
        /// or presented in that case.
        fn render(&mut self, time: f64) -> bool {
            let Some(el) = self.scheduler.try_frame(time) else {
                return false;
            };
            let surface = el.visual;
            if surface.width() > 0 && surface.height() > 0 {
                match ImageData::new_with_u8_clamped_array_and_sh(
                    Clamped(surface.as_bytes()),
                    surface.width(),
                    surface.height(),
                ) {
                    Ok(image) => {
                        if let Err(e) = self.ctx.put_image_data(&image, 0.0, 0.0) {
                            log::warn!("putImageData failed: {:?}", e);
                        }
                    }
                    Err(e) => log::warn!("ImageData failed: {:?}", e),
                }
            }

            let population = self.scheduler.driven().len();
            if population != self.last_population {
                log::debug!("Population: {}", population);
                self.last_population = population;
            }
            true
        }
    }

    fn window_size(window: &Window) -> (u32, u32) {
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
        (w as u32, h as u32)
    }

    /// Full-window canvas kept in sync with resize events
    ///
    /// Resizing resets the canvas, which clears it; the next frame repaints.
    fn create_main_canvas(
        window: &Window,
        document: &Document,
        viewport: &Viewport,
    ) -> Result<HtmlCanvasElement, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        body.append_child(&canvas)?;

        let resize = {
            let window = window.clone();
            let canvas = canvas.clone();
            let viewport = viewport.clone();
            move || {
                let (w, h) = window_size(&window);
                canvas.set_width(w);
                canvas.set_height(h);
                viewport.resize(w, h);
            }
        };
        resize();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| resize());
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(canvas)
    }

    fn setup_input_handlers(window: &Window, input: &Input, cancel: &CancelHandle) {
        // Pointer press: record position until release
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                input.pointer_down(event.client_x() as f32, event.client_y() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                input.pointer_up();
            });
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let input = input.clone();
            let cancel = cancel.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Escape" {
                    cancel.cancel();
                } else {
                    input.key(&key, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                input.key(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            if !g.render(time) || g.cancel.is_cancelled() {
                log::info!("Stopped after {} frames", g.scheduler.frames());
                return;
            }
        }

        request_animation_frame(game);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ball Mitosis starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let settings = Settings::load();

        let viewport = Viewport::new(0, 0);
        let canvas = match create_main_canvas(&window, &document, &viewport) {
            Ok(canvas) => canvas,
            Err(e) => {
                log::error!("Could not create canvas: {:?}", e);
                return;
            }
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("2D canvas context unavailable");
            return;
        };

        let input = Input::new();
        let composer = build_composer(&settings, viewport.clone(), &input);
        let scheduler = Scheduler::new(composer).with_input(input.clone());
        let cancel = scheduler.cancel_handle();
        setup_input_handlers(&window, &input, &cancel);

        let game = Rc::new(RefCell::new(Game {
            scheduler,
            ctx,
            cancel,
            last_population: 0,
        }));

        request_animation_frame(game);

        log::info!(
            "Ball Mitosis running at {}x{} (Escape stops the loop)",
            viewport.width(),
            viewport.height()
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ball_mitosis::platform::{Input, IntervalClock};
    use ball_mitosis::renderer::{Viewport, colors};
    use ball_mitosis::sim::Scheduler;
    use ball_mitosis::{Settings, build_composer};

    env_logger::init();
    log::info!("Ball Mitosis (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path),
        None => Settings::load(),
    };

    let viewport = Viewport::new(settings.world_width, settings.world_height);
    let input = Input::new();
    let composer = build_composer(&settings, viewport, &input);
    let mut scheduler = Scheduler::new(composer).with_input(input);

    let clock = IntervalClock::new(settings.frame_interval_ms, settings.realtime);
    let frames: Box<dyn Iterator<Item = f64>> = match settings.max_frames {
        Some(n) => Box::new(clock.take(n as usize)),
        None => Box::new(clock),
    };

    let log_every = settings.log_every;
    let mut frame_index: u64 = 0;
    scheduler.run(frames, |time, el| {
        frame_index += 1;
        if log_every > 0 && frame_index % log_every == 0 {
            let covered = el
                .visual
                .pixels()
                .iter()
                .filter(|p| **p != colors::BACKGROUND)
                .count();
            log::info!(
                "Frame {} at {:.0}ms: {} pixels covered",
                frame_index,
                time.total_progress,
                covered
            );
        }
    });

    log::info!(
        "Finished after {} frames with {} entities",
        scheduler.frames(),
        scheduler.driven().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
