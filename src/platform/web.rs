//! Browser host: DOM surface and event wiring
//!
//! Expects a page with `#gameContainer`, `#basket`, `#scoreBoard`,
//! `#gameOver` and `#restartBtn`. Items are `div.fallingItem` children of the
//! container, positioned with `left`/`top`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, TouchEvent, Window};

use super::{Surface, score_text};
use crate::Game;
use crate::settings::Settings;
use crate::sim::{BasketMetrics, InputEvent, ItemId, Key, Viewport};

type SharedGame = Rc<RefCell<Game<DomSurface>>>;

/// Surface backed by DOM elements
pub struct DomSurface {
    document: Document,
    container: Element,
    basket: HtmlElement,
    score_board: Option<Element>,
    game_over: Option<HtmlElement>,
    items: HashMap<ItemId, HtmlElement>,
    item_size: f32,
}

impl DomSurface {
    pub fn new(document: &Document, settings: &Settings) -> Result<Self, JsValue> {
        let container = document
            .get_element_by_id("gameContainer")
            .ok_or_else(|| JsValue::from_str("missing #gameContainer"))?;
        let basket: HtmlElement = document
            .get_element_by_id("basket")
            .ok_or_else(|| JsValue::from_str("missing #basket"))?
            .dyn_into()?;

        let score_board = document.get_element_by_id("scoreBoard");
        if score_board.is_none() {
            log::warn!("No #scoreBoard element, score won't be shown");
        }
        let game_over = document
            .get_element_by_id("gameOver")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if game_over.is_none() {
            log::warn!("No #gameOver element, game over won't be shown");
        }

        Ok(Self {
            document: document.clone(),
            container,
            basket,
            score_board,
            game_over,
            items: HashMap::new(),
            item_size: settings.item_size,
        })
    }

    /// Basket size and placement as laid out by CSS
    pub fn basket_metrics(&self, viewport: Viewport) -> BasketMetrics {
        let width = self.basket.offset_width() as f32;
        if width <= 0.0 {
            return BasketMetrics::bottom_aligned(viewport);
        }
        BasketMetrics {
            width,
            height: self.basket.offset_height() as f32,
            top: self.basket.offset_top() as f32,
        }
    }

    fn create_item(&self, x: f32, y: f32) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        el.class_list().add_1("fallingItem")?;
        let style = el.style();
        style.set_property("width", &px(self.item_size))?;
        style.set_property("height", &px(self.item_size))?;
        style.set_property("left", &px(x))?;
        style.set_property("top", &px(y))?;
        self.container.append_child(&el)?;
        Ok(el)
    }
}

fn px(v: f32) -> String {
    format!("{}px", v)
}

impl Surface for DomSurface {
    fn place_basket(&mut self, x: f32) {
        let _ = self.basket.style().set_property("left", &px(x));
    }

    fn attach_item(&mut self, id: ItemId, x: f32, y: f32) {
        match self.create_item(x, y) {
            Ok(el) => {
                self.items.insert(id, el);
            }
            Err(e) => log::warn!("Failed to create {}: {:?}", id, e),
        }
    }

    fn move_item(&mut self, id: ItemId, x: f32, y: f32) {
        if let Some(el) = self.items.get(&id) {
            let style = el.style();
            let _ = style.set_property("left", &px(x));
            let _ = style.set_property("top", &px(y));
        }
    }

    fn detach_item(&mut self, id: ItemId) {
        if let Some(el) = self.items.remove(&id) {
            el.remove();
        }
    }

    fn set_score(&mut self, score: u32) {
        if let Some(el) = &self.score_board {
            el.set_text_content(Some(&score_text(score)));
        }
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        if let Some(el) = &self.game_over {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Build the game and hook it up to the page
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Basket Catch starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let settings = Settings::load();
    let surface = DomSurface::new(&document, &settings)?;
    let basket = surface.basket.clone();
    let viewport = viewport_of(&window);
    let metrics = surface.basket_metrics(viewport);
    let seed = settings
        .seed
        .unwrap_or_else(|| js_sys::Date::now() as u64);
    let spawn_interval_ms = settings.spawn_interval_ms;

    let game = Rc::new(RefCell::new(Game::new(
        settings, viewport, metrics, seed, surface,
    )));

    setup_touch_handlers(&basket, game.clone())?;
    setup_keyboard(&window, game.clone())?;
    setup_resize(&window, game.clone())?;
    setup_restart_button(&document, game.clone())?;
    start_spawn_timer(&window, game.clone(), spawn_interval_ms)?;

    request_animation_frame(game);

    log::info!("Basket Catch running!");
    Ok(())
}

fn first_touch_x(event: &TouchEvent) -> Option<f32> {
    event.touches().get(0).map(|touch| touch.client_x() as f32)
}

fn setup_touch_handlers(basket: &HtmlElement, game: SharedGame) -> Result<(), JsValue> {
    // Touch start: enter drag mode
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                game.borrow_mut().handle_input(InputEvent::DragStart { x });
            }
        });
        basket.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch move
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                game.borrow_mut().handle_input(InputEvent::DragMove { x });
            }
        });
        basket.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch end
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
            game.borrow_mut().handle_input(InputEvent::DragEnd);
        });
        basket.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn setup_keyboard(window: &Window, game: SharedGame) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if let Some(key) = Key::from_key_name(&event.key()) {
            game.borrow_mut().handle_input(InputEvent::KeyDown(key));
        }
    });
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_resize(window: &Window, game: SharedGame) -> Result<(), JsValue> {
    let window_clone = window.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let viewport = viewport_of(&window_clone);
        let mut g = game.borrow_mut();
        let metrics = g.surface().basket_metrics(viewport);
        g.handle_input(InputEvent::Resize { viewport, metrics });
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_restart_button(document: &Document, game: SharedGame) -> Result<(), JsValue> {
    let Some(btn) = document.get_element_by_id("restartBtn") else {
        log::warn!("No #restartBtn element, restart disabled");
        return Ok(());
    };
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        let reschedule = game.borrow_mut().restart();
        if reschedule {
            request_animation_frame(game.clone());
        }
    });
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// The spawn timer runs for the life of the page; stopped games ignore it
fn start_spawn_timer(window: &Window, game: SharedGame, interval_ms: u32) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        game.borrow_mut().on_spawn_timer();
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        i32::try_from(interval_ms).unwrap_or(i32::MAX),
    )?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(game: SharedGame) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn game_loop(game: SharedGame) {
    let reschedule = game.borrow_mut().on_frame();
    if reschedule {
        request_animation_frame(game);
    }
}
