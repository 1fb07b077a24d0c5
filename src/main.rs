//! Tile Slide entry point
//!
//! Handles platform-specific initialization. On wasm32 this is the
//! presentation adapter: DOM event wiring, the animation frame loop, and
//! re-parenting tiles between cell containers. On native it runs a small
//! logging demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use tile_slide::anim::SlideQueue;
    use tile_slide::board::{self, MoveResult, PuzzleState};
    use tile_slide::consts::*;

    /// App instance owning the puzzle state and the animation queue
    struct App {
        state: PuzzleState,
        queue: SlideQueue,
        last_time: f64,
    }

    impl App {
        fn new(seed: u64, cell_size: f32) -> Self {
            Self {
                state: PuzzleState::new(seed),
                queue: SlideQueue::new(cell_size, SLIDE_DURATION),
                last_time: 0.0,
            }
        }

        /// Advance animations and sync the DOM
        fn update(&mut self, dt: f32) {
            if let Some(done) = self.queue.advance(dt) {
                place_tile(done.tile, done.to);
            }
            if let Some(anim) = self.queue.active() {
                let offset = anim.offset();
                if let Some(tile) = tile_element(anim.slide().tile) {
                    let style = tile.style();
                    let _ = style.set_property("left", &format!("{}px", offset.x));
                    let _ = style.set_property("top", &format!("{}px", offset.y));
                }
            }
        }

        /// Handle a click on the tile currently at `pos`
        fn tile_clicked(&mut self, pos: usize) {
            if self.queue.busy() {
                log::debug!("Ignoring click at {pos} mid-slide");
                return;
            }
            if let MoveResult::Moved(mv) = board::request_move(&mut self.state, pos) {
                self.queue.push(mv);
            }
        }

        fn shuffle(&mut self) {
            if self.queue.busy() {
                return;
            }
            let moves = board::shuffle(&mut self.state, SHUFFLE_MOVES);
            self.queue.extend(moves);
        }

        fn reset(&mut self) {
            self.queue.clear();
            self.state.reset();
            for tile in self.state.tiles() {
                place_tile(tile.home, tile.home);
            }
        }
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    /// Cell container element for a grid position
    fn container_element(pos: usize) -> Option<Element> {
        document().get_element_by_id(&format!("pos{pos}"))
    }

    /// Tile element by home index
    fn tile_element(tile: usize) -> Option<HtmlElement> {
        document()
            .get_element_by_id(&format!("tile{tile}"))
            .and_then(|el| el.dyn_into().ok())
    }

    /// Re-parent a tile element under a cell container and zero its offsets
    fn place_tile(tile: usize, pos: usize) {
        let (Some(el), Some(container)) = (tile_element(tile), container_element(pos)) else {
            log::warn!("Missing DOM node for tile {tile} or cell {pos}");
            return;
        };
        let _ = container.append_child(&el);
        let style = el.style();
        let _ = style.set_property("left", "0px");
        let _ = style.set_property("top", "0px");
    }

    fn setup_tile_handlers(app: Rc<RefCell<App>>) {
        for tile in 0..TILE_COUNT {
            let Some(el) = tile_element(tile) else {
                log::warn!("Tile element tile{tile} not found");
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut app = app.borrow_mut();
                let pos = app.state.tile(tile).pos;
                app.tile_clicked(pos);
            });
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        if let Some(btn) = document().get_element_by_id("shuffle-board") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().shuffle();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document().get_element_by_id("show-finished") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            a.last_time = time;
            a.update(dt);
        }
        request_animation_frame(app);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tile Slide starting...");

        // Measure the real tile size; fall back to the stylesheet default
        let cell_size = tile_element(0)
            .map(|el| el.offset_width() as f32)
            .filter(|w| *w > 0.0)
            .unwrap_or(TILE_SIZE_PX);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, cell_size)));

        log::info!("Board initialized with seed: {}", seed);

        setup_tile_handlers(app.clone());
        setup_buttons(app.clone());

        // Scramble on load, animated like any other shuffle
        app.borrow_mut().shuffle();

        request_animation_frame(app);

        log::info!("Tile Slide running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tile_slide::board::{self, PuzzleState};
    use tile_slide::consts::SHUFFLE_MOVES;

    env_logger::init();
    log::info!("Tile Slide (native) starting...");
    log::info!("The playable build targets wasm32 - run with `trunk serve` for the web version");

    // Seeded shuffle demo
    let mut state = PuzzleState::new(0xC0FFEE);
    let moves = board::shuffle(&mut state, SHUFFLE_MOVES);
    for mv in &moves {
        log::debug!("tile {} slid {} -> {}", mv.tile + 1, mv.from, mv.to);
    }
    println!("Scrambled board after {} moves:\n{}", moves.len(), state);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
