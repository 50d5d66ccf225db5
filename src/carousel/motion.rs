//! Reduced-motion preference.
//!
//! [`MediaQuery`] is the environment's `prefers-reduced-motion` signal. The
//! carousel reads it once on mount and then holds a [`Subscription`] that
//! collects every later change until the carousel drains it. Dropping the
//! subscription detaches it from the query.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

type Mailbox = Rc<Cell<Option<bool>>>;

#[derive(Debug, Default)]
struct Inner {
    matches: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Mailbox)>>,
}

/// Shared handle to the reduced-motion preference. Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    inner: Rc<Inner>,
}

impl MediaQuery {
    pub fn new(matches: bool) -> Self {
        let query = Self::default();
        query.inner.matches.set(matches);
        query
    }

    /// Current value of the preference.
    pub fn matches(&self) -> bool {
        self.inner.matches.get()
    }

    /// Changes the preference and notifies every subscriber. Setting the same
    /// value again is not a change.
    pub fn set_matches(&self, matches: bool) {
        if self.inner.matches.replace(matches) == matches {
            return;
        }
        debug!(matches, "reduced-motion preference changed");
        for (_, mailbox) in self.inner.listeners.borrow().iter() {
            mailbox.set(Some(matches));
        }
    }

    pub fn subscribe(&self) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let mailbox: Mailbox = Rc::default();
        self.inner.listeners.borrow_mut().push((id, Rc::clone(&mailbox)));
        Subscription { id, mailbox, query: Rc::clone(&self.inner) }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Change listener on a [`MediaQuery`], removed when dropped.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    mailbox: Mailbox,
    query: Rc<Inner>,
}

impl Subscription {
    /// Latest value published since the previous call, if any.
    pub fn take(&self) -> Option<bool> {
        self.mailbox.take()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.query.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}
