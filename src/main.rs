mod game;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use game::state::TICKS_PER_SEC;
use game::ClickerGame;
use input::{pixel_to_cell, ClickState, InputEvent};
use time::GameTime;

/// Convert browser mouse coordinates to a terminal cell using the grid
/// container's bounding rect. DomBackend renders into a `<div>` under `<body>`.
fn grid_cell_at(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    pixel_to_cell(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
        cs.terminal_cols,
        cs.terminal_rows,
    )
}

/// Wall-clock timestamp in milliseconds for the game clock.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Save on page unload so closing the tab never loses more progress than
/// the debounce window.
fn install_unload_save(game: Rc<RefCell<ClickerGame>>) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let closure = Closure::<dyn FnMut()>::new(move || {
        game.borrow().save_now();
    });
    let handler: &js_sys::Function = closure.as_ref().unchecked_ref();
    window.set_onbeforeunload(Some(handler));
    // The handler lives for the whole page lifetime.
    closure.forget();
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let game = Rc::new(RefCell::new(ClickerGame::restore_or_new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch handler: pixel → cell → registered action ID
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let action = grid_cell_at(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(id) = action {
                game.borrow_mut().handle_input(&InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let key = match key_event.code {
                KeyCode::Char(c) => c.to_ascii_lowercase(),
                // Esc closes whatever overlay is open
                KeyCode::Esc => 'q',
                _ => return,
            };
            game.borrow_mut().handle_input(&InputEvent::Key(key));
        }
    });

    install_unload_save(game.clone());

    let clock = RefCell::new(GameTime::new(TICKS_PER_SEC));

    terminal.draw_web({
        let game = game.clone();
        let click_state = click_state.clone();
        move |f| {
            let ticks = clock.borrow_mut().advance(now_ms());
            let mut g = game.borrow_mut();
            if ticks > 0 {
                g.tick(ticks);
            }

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            g.render(f, size, &click_state);
        }
    });

    Ok(())
}
