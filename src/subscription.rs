use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::state::{HeaderTone, ScrollState};

/// Something that reports vertical scroll offsets to registered listeners.
pub trait ScrollHost {
    type Listener;

    /// Registers `on_scroll`, called with the raw offset on every scroll event.
    /// Returns `None` when the host refuses the registration.
    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Option<Self::Listener>;

    fn unlisten(&self, listener: Self::Listener);
}

/// The browser window as a scroll host.
pub struct WindowScrollHost {
    window: Window,
}

impl WindowScrollHost {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollHost for WindowScrollHost {
    type Listener = Closure<dyn FnMut()>;

    fn listen(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Option<Self::Listener> {
        let window = self.window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            let offset = window.scroll_y().unwrap_or_default();
            on_scroll(offset);
        }) as Box<dyn FnMut()>);

        match self
            .window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            Ok(()) => Some(scroll_callback),
            Err(err) => {
                warn!("Failed to register scroll listener: {:?}", err);
                None
            }
        }
    }

    fn unlisten(&self, listener: Self::Listener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

/// A scroll listener scoped to the lifetime of this value.
///
/// The raw offset stays inside the listener; subscribers only ever see the
/// derived [`HeaderTone`], reported after every scroll event. Dropping the
/// subscription deregisters the listener.
pub struct ScrollSubscription<H: ScrollHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H: ScrollHost> ScrollSubscription<H> {
    pub fn open(host: H, on_tone: impl Fn(HeaderTone) + 'static) -> Self {
        let mut state = ScrollState::default();
        let mut last_tone = state.tone();
        let listener = host.listen(Box::new(move |raw_offset| {
            state.record(raw_offset);
            let tone = state.tone();
            if tone != last_tone {
                debug!("Header {:?} at {}px", tone, state.offset());
                last_tone = tone;
            }
            on_tone(tone);
        }));
        if listener.is_some() {
            debug!("Scroll subscription opened");
        }
        Self { host, listener }
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

impl<H: ScrollHost> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
            debug!("Scroll subscription closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Listeners = Rc<RefCell<Vec<(usize, Box<dyn FnMut(f64)>)>>>;

    #[derive(Clone, Default)]
    struct RecordingHost {
        listeners: Listeners,
        next_id: Rc<Cell<usize>>,
        refuse: bool,
    }

    impl RecordingHost {
        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        fn scroll_to(&self, offset: f64) {
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener(offset);
            }
        }
    }

    impl ScrollHost for RecordingHost {
        type Listener = usize;

        fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Option<usize> {
            if self.refuse {
                return None;
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_scroll));
            Some(id)
        }

        fn unlisten(&self, listener: usize) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != listener);
        }
    }

    fn tone_recorder() -> (Rc<Cell<Option<HeaderTone>>>, impl Fn(HeaderTone)) {
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        (seen, move |tone| sink.set(Some(tone)))
    }

    #[test]
    fn open_registers_exactly_one_listener() {
        let host = RecordingHost::default();
        let subscription = ScrollSubscription::open(host.clone(), |_| {});
        assert!(subscription.is_listening());
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn drop_removes_the_listener() {
        let host = RecordingHost::default();
        let subscription = ScrollSubscription::open(host.clone(), |_| {});
        drop(subscription);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn repeated_mount_cycles_do_not_accumulate() {
        let host = RecordingHost::default();
        for _ in 0..5 {
            let subscription = ScrollSubscription::open(host.clone(), |_| {});
            assert_eq!(host.listener_count(), 1);
            drop(subscription);
        }
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn reports_derived_tone_on_every_scroll() {
        let host = RecordingHost::default();
        let (seen, on_tone) = tone_recorder();
        let _subscription = ScrollSubscription::open(host.clone(), on_tone);
        assert_eq!(seen.get(), None);

        host.scroll_to(50.0);
        assert_eq!(seen.get(), Some(HeaderTone::Transparent));
        host.scroll_to(51.0);
        assert_eq!(seen.get(), Some(HeaderTone::Elevated));
        host.scroll_to(50.0);
        assert_eq!(seen.get(), Some(HeaderTone::Transparent));
        host.scroll_to(50.5);
        assert_eq!(seen.get(), Some(HeaderTone::Elevated));
        host.scroll_to(0.0);
        assert_eq!(seen.get(), Some(HeaderTone::Transparent));
    }

    #[test]
    fn closed_subscription_stops_reporting() {
        let host = RecordingHost::default();
        let (seen, on_tone) = tone_recorder();
        let subscription = ScrollSubscription::open(host.clone(), on_tone);
        drop(subscription);
        host.scroll_to(400.0);
        assert_eq!(seen.get(), None);
    }

    #[test]
    fn refused_registration_is_not_released_twice() {
        let host = RecordingHost {
            refuse: true,
            ..RecordingHost::default()
        };
        let subscription = ScrollSubscription::open(host.clone(), |_| {});
        assert!(!subscription.is_listening());
        drop(subscription);
        assert_eq!(host.listener_count(), 0);
    }
}
