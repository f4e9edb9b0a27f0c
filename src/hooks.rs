use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

// Margin (px) an element must clear above the fold before it counts as
// seen, so reveals start slightly after the edge crosses the viewport.
const REVEAL_MARGIN_PX: f64 = 100.0;

/// Reports whether `node` has entered the viewport. Latches on first
/// entry: scrolling back up does not un-reveal a section, and consumers
/// only ever see a single false-to-true transition.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let window = web_sys::window().unwrap();
                let seen = Cell::new(false);

                let check = {
                    let window = window.clone();
                    let node = node.clone();
                    move || {
                        if seen.get() {
                            return;
                        }
                        if let Some(element) = node.cast::<Element>() {
                            let viewport = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            let top = element.get_bounding_client_rect().top();
                            if top < viewport - REVEAL_MARGIN_PX {
                                seen.set(true);
                                visible.set(true);
                            }
                        }
                    }
                };

                // Sections already on screen reveal without any scrolling.
                check();

                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            node,
        );
    }

    *visible
}
