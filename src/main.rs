//! Astro Dodge entry point
//!
//! Handles platform-specific initialization: DOM/canvas wiring and the
//! animation-frame loop in the browser, a headless demo run natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use astro_dodge::Session;
    use astro_dodge::consts::*;
    use astro_dodge::leaderboard::{self, LeaderboardClient};
    use astro_dodge::renderer::CanvasPainter;
    use astro_dodge::sim::{GamePhase, InputState};

    /// Game instance holding all state
    struct Game {
        session: Session,
        input: InputState,
        painter: Option<CanvasPainter>,
        leaderboard: LeaderboardClient,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                session: Session::new(seed),
                input: InputState::default(),
                painter: None,
                leaderboard: LeaderboardClient::default(),
            }
        }

        /// Start a run (from the start button or the restart button)
        fn start_run(&mut self, now_ms: f64) {
            self.session.dismiss_game_over();
            self.input = InputState::default();
            self.session.start(now_ms);
        }

        /// Close the game-over presentation without restarting
        fn dismiss(&mut self) {
            self.session.dismiss_game_over();
            self.input = InputState::default();
        }

        /// One animation frame: drain due ticks, repaint while live
        fn frame(&mut self, now_ms: f64) {
            let input = self.input;
            self.session.advance(now_ms, &input);

            if let Some(ref painter) = self.painter {
                if self.session.state.is_running() {
                    painter.draw_frame(&self.session.state, now_ms);
                }
            }
        }

        /// Mirror game state into the DOM
        fn update_hud(&self, document: &Document) {
            let state = &self.session.state;

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("high-score") {
                el.set_text_content(Some(&state.high_score.to_string()));
            }

            let game_over = state.phase == GamePhase::GameOver;
            if game_over {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&state.score.to_string()));
                }
            }
            set_active(document, "game-over-modal", game_over);
            set_active(document, "overlay", game_over);

            // Start control is visible whenever no run is live
            if let Some(el) = document.get_element_by_id("start-btn") {
                if state.is_running() {
                    let _ = el.class_list().add_1("hidden");
                } else {
                    let _ = el.class_list().remove_1("hidden");
                }
            }
        }
    }

    fn set_active(document: &Document, id: &str, active: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            if active {
                let _ = el.class_list().add_1("active");
            } else {
                let _ = el.class_list().remove_1("active");
            }
        }
    }

    fn clear_name_input(document: &Document) {
        if let Some(input) = document
            .get_element_by_id("name-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Rebuild the leaderboard list from display rows
    fn render_ranking_rows(document: &Document, lines: &[String]) {
        let Some(list) = document.get_element_by_id("leaderboard-list") else {
            return;
        };
        list.set_inner_html("");
        for line in lines {
            if let Ok(li) = document.create_element("li") {
                li.set_text_content(Some(line));
                let _ = list.append_child(&li);
            }
        }
    }

    /// Fetch rankings and render them; a failure renders one error row
    fn refresh_leaderboard(client: LeaderboardClient) {
        wasm_bindgen_futures::spawn_local(async move {
            let document = web_sys::window().unwrap().document().unwrap();
            match client.fetch_rankings().await {
                Ok(response) => {
                    render_ranking_rows(&document, &leaderboard::ranking_lines(&response.rankings));
                }
                Err(err) => {
                    log::error!("rankings fetch failed: {err}");
                    render_ranking_rows(
                        &document,
                        &[leaderboard::FAILED_RANKINGS_ROW.to_string()],
                    );
                }
            }
        });
    }

    /// Validate the name field and submit the frozen score
    fn submit_score(game: &Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let raw_name = document
            .get_element_by_id("name-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        // An empty name never reaches the network
        let name = match leaderboard::validate_name(&raw_name) {
            Ok(name) => name.to_string(),
            Err(_) => {
                alert("Please enter your name");
                return;
            }
        };

        let (client, score) = {
            let g = game.borrow();
            (g.leaderboard.clone(), g.session.state.score)
        };

        let game = game.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match client.submit(&name, score).await {
                Ok(_) => {
                    let document = web_sys::window().unwrap().document().unwrap();
                    game.borrow_mut().dismiss();
                    clear_name_input(&document);
                    refresh_leaderboard(game.borrow().leaderboard.clone());
                }
                Err(err) => {
                    log::error!("score submission failed: {err}");
                    alert("Failed to submit score");
                }
            }
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        match CanvasPainter::new(&canvas) {
            Ok(painter) => {
                // Idle backdrop until the first run starts
                painter.draw_backdrop(&game.borrow().session.state, js_sys::Date::now());
                game.borrow_mut().painter = Some(painter);
            }
            Err(err) => log::error!("canvas init failed: {err:?}"),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        refresh_leaderboard(game.borrow().leaderboard.clone());
        game.borrow().update_hud(&document);

        request_animation_frame(game);

        log::info!("Astro Dodge running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard held state, sampled by the update tick
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left_held = true,
                    "ArrowRight" => g.input.right_held = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left_held = false,
                    "ArrowRight" => g.input.right_held = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse: absolute horizontal positioning centered on the cursor
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .session
                    .point_player_to(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: same, with default scrolling suppressed
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut().session.point_player_to(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start_run(js_sys::Date::now());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                clear_name_input(&document);
                game.borrow_mut().start_run(js_sys::Date::now());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Clicking the overlay dismisses the game-over modal
        if let Some(overlay) = document.get_element_by_id("overlay") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                clear_name_input(&document);
                game.borrow_mut().dismiss();
            });
            let _ = overlay
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("submit-score-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                submit_score(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter in the name field submits too
        if let Some(input) = document.get_element_by_id("name-input") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    submit_score(&game);
                }
            });
            let _ =
                input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            // Session deadlines are armed against Date::now, so the loop
            // reads the same clock rather than the frame timestamp.
            let now = js_sys::Date::now();
            g.frame(now);

            let document = web_sys::window().unwrap().document().unwrap();
            g.update_hud(&document);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Astro Dodge (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use astro_dodge::Session;
    use astro_dodge::consts::UPDATE_INTERVAL_MS;
    use astro_dodge::sim::InputState;

    let mut session = Session::new(0xD0D6E);
    session.start(0.0);

    // Ship parked in the center; obstacles rain until one connects
    let input = InputState::default();
    let mut now = 0.0;
    while session.state.is_running() && now < 60_000.0 {
        now += UPDATE_INTERVAL_MS;
        session.advance(now, &input);
    }

    println!(
        "✓ demo run ended after {:.1}s at score {} (high score {})",
        now / 1000.0,
        session.state.score,
        session.state.high_score
    );
}
