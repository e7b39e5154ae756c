use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Element, Event, KeyboardEvent, MouseEvent, TouchEvent};

use super::App;
use crate::error::{Error, Result};
use crate::session::Tap;

/// Route pointer-down (primary button), touch-start and space-bar presses
/// into the session. Listeners are non-passive so the default action can be
/// suppressed.
pub fn listen(app: &Rc<RefCell<App>>) -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let a = app.clone();
    let touchstart = Closure::wrap(Box::new(move |e: TouchEvent| {
        handle(&a, &e);
    }) as Box<dyn FnMut(TouchEvent)>);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        touchstart.as_ref().unchecked_ref(),
        &options,
    )?;
    touchstart.forget();

    let a = app.clone();
    let mousedown = Closure::wrap(Box::new(move |e: MouseEvent| {
        if e.button() == 0 {
            handle(&a, &e);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "mousedown",
        mousedown.as_ref().unchecked_ref(),
        &options,
    )?;
    mousedown.forget();

    let a = app.clone();
    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == " " {
            handle(&a, &e);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "keydown",
        keydown.as_ref().unchecked_ref(),
        &options,
    )?;
    keydown.forget();

    Ok(())
}

fn handle(app: &Rc<RefCell<App>>, event: &Event) {
    let at = web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(|| event.time_stamp(), |p| p.now());
    let on_link = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some();

    match app.borrow_mut().tap(Tap { at, on_link }) {
        Ok(disposition) => {
            if disposition.suppresses_default() {
                event.prevent_default();
            }
        }
        Err(e) => {
            event.prevent_default();
            warn!("tap: {e}");
        }
    }
}
