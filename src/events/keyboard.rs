use crate::controls;
use polygon_core::{control_for_key, RenderState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    state: &Rc<RefCell<RenderState>>,
) {
    // Leave browser shortcuts alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(control) = control_for_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    if ev.repeat() {
        return;
    }
    controls::apply(document, state, control);
}

pub fn wire_global_keydown(document: &web::Document, state: Rc<RefCell<RenderState>>) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &doc, &state);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
