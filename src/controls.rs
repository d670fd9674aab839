use crate::constants::{CONTROL_BUTTONS, PAUSE_BUTTON_ID};
use crate::{dom, overlay};
use polygon_core::{Control, ControlOutcome, RenderState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Apply a control to the shared state and mirror the result in the DOM.
pub fn apply(document: &web::Document, state: &Rc<RefCell<RenderState>>, control: Control) {
    let outcome = state.borrow_mut().apply(control);
    match outcome {
        ControlOutcome::ModeChanged(mode) => {
            log::info!("[controls] mode={:?}", mode);
            dom::set_text(document, PAUSE_BUTTON_ID, state.borrow().pause_label());
        }
        ControlOutcome::Updated => {
            let st = state.borrow();
            log::info!(
                "[controls] {:?} color={:?} rot=({:.3},{:.3})",
                control,
                st.color,
                st.rotation_x,
                st.rotation_y
            );
        }
        ControlOutcome::ToggleShareInfo => {
            let visible = overlay::toggle(document);
            log::info!("[controls] share visible={}", visible);
        }
    }
}

pub fn wire_buttons(document: &web::Document, state: &Rc<RefCell<RenderState>>) {
    for (id, control) in CONTROL_BUTTONS {
        let doc = document.clone();
        let st = state.clone();
        dom::add_click_listener(document, id, move || apply(&doc, &st, control));
    }
    dom::set_text(document, PAUSE_BUTTON_ID, state.borrow().pause_label());
    overlay::hide(document);
}
