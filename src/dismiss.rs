use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

/// Closes the drawer on a pointer press outside `region` or on Escape.
///
/// While `open`, one pair of document-level listeners ("pointerdown",
/// "keydown") is registered; the effect cleanup drops both as soon as
/// `open` flips or the owning component unmounts, so repeated open/close
/// cycles never accumulate listeners.
#[hook]
pub(crate) fn use_close_on_outside_or_esc(open: bool, region: NodeRef, on_close: Callback<()>) {
    use_effect_with(open, move |open| {
        let mut listeners = None;
        if *open {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let pointer = {
                    let region = region.clone();
                    let on_close = on_close.clone();
                    EventListener::new(&document, "pointerdown", move |event| {
                        let Some(region_node) = region.get() else {
                            return;
                        };
                        let Some(target) = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok())
                        else {
                            return;
                        };
                        if !region_node.contains(Some(&target)) {
                            on_close.emit(());
                        }
                    })
                };
                let keys = EventListener::new(&document, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                });
                listeners = Some((pointer, keys));
            }
        }
        move || drop(listeners)
    });
}
