use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::config::ENTRANCE_STAGGER_MS;
use crate::state::{Entrance, RevealState};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub entrance: Entrance,
    /// Position among sibling blocks; each step delays the entrance a little.
    #[prop_or_default]
    pub order: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Whatever keeps a pending entrance alive. Dropping it cancels any queued
/// frame or disconnects the observer.
enum RevealWatch {
    Idle,
    Frames {
        _first: AnimationFrame,
        _second: Rc<RefCell<Option<AnimationFrame>>>,
    },
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        if let RevealWatch::Observer { observer, .. } = self {
            observer.disconnect();
        }
    }
}

/// Reveals on the second animation frame after mount. The first frame paints
/// the hidden state, so the transition has a starting point.
fn reveal_after_first_paint(reveal: UseStateSetter<RevealState>) -> RevealWatch {
    let second = Rc::new(RefCell::new(None));
    let slot = second.clone();
    let first = request_animation_frame(move |_| {
        *slot.borrow_mut() = Some(request_animation_frame(move |_| {
            reveal.set(RevealState::Revealed);
        }));
    });
    RevealWatch::Frames {
        _first: first,
        _second: second,
    }
}

fn watch_intersection(node: &NodeRef, reveal: UseStateSetter<RevealState>) -> RevealWatch {
    let Some(element) = node.cast::<Element>() else {
        reveal.set(RevealState::Revealed);
        return RevealWatch::Idle;
    };

    let mut seen = RevealState::Pending;
    let on_reveal = reveal.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        seen = seen.observe(intersecting);
        if seen.is_revealed() {
            on_reveal.set(seen);
            // Played once; later scroll-ins are not interesting.
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&element);
            RevealWatch::Observer {
                observer,
                _callback: callback,
            }
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, revealing block right away: {:?}", err);
            reveal.set(RevealState::Revealed);
            RevealWatch::Idle
        }
    }
}

/// Fades and slides its children into place once, either right after mount
/// or the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::default);

    {
        let node = node.clone();
        let reveal = state.setter();
        let entrance = props.entrance;
        use_effect_with_deps(
            move |_| {
                let watch = match entrance {
                    Entrance::Immediate => reveal_after_first_paint(reveal),
                    Entrance::OnScroll => watch_intersection(&node, reveal),
                };
                move || drop(watch)
            },
            (),
        );
    }

    let delay = format!("transition-delay: {}ms;", props.order * ENTRANCE_STAGGER_MS);

    html! {
        <div ref={node} class={classes!(state.class(), props.class.clone())} style={delay}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(entrance: Entrance, order: u32) -> String {
        ServerRenderer::<Reveal>::with_props(move || RevealProps {
            entrance,
            order,
            class: Classes::from("hero__title"),
            children: Children::new(vec![html! { <h1>{ "Smart Farming" }</h1> }]),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn immediate_entrance_is_first_rendered_hidden() {
        let html = render(Entrance::Immediate, 0).await;
        assert!(html.contains("class=\"reveal hero__title\""), "{html}");
        assert!(!html.contains("reveal--shown"));
        assert!(html.contains("Smart Farming"));
    }

    #[tokio::test]
    async fn stagger_is_per_block_order() {
        assert!(render(Entrance::OnScroll, 0).await.contains("transition-delay: 0ms;"));
        let delay = format!("transition-delay: {}ms;", 3 * ENTRANCE_STAGGER_MS);
        assert!(render(Entrance::OnScroll, 3).await.contains(&delay));
    }
}
