use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gloo::history::{HashHistory, History, HistoryListener};

pub type LocationListener = Rc<dyn Fn(String)>;

/// Where the active location lives. Locations are paths with an optional
/// query, e.g. `/submissions?user_id=1`.
pub trait HistoryDriver {
    fn current(&self) -> String;
    fn push(&self, location: &str);
    fn replace(&self, location: &str);
    /// `listener` receives the new location on every change, including ones
    /// the user makes with back/forward or by editing the address.
    fn listen(&self, listener: LocationListener);
}

/// Location kept in the address fragment (`index.html#/problem/1`).
pub struct HashHistoryDriver {
    history: HashHistory,
    listeners: RefCell<Vec<HistoryListener>>,
}

impl HashHistoryDriver {
    pub fn new() -> Self {
        Self {
            history: HashHistory::new(),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl Default for HashHistoryDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn location_of(history: &HashHistory) -> String {
    let location = history.location();
    let path = match location.path() {
        "" => "/",
        path => path,
    };
    match location.query_str() {
        "" | "?" => path.to_owned(),
        query if query.starts_with('?') => format!("{path}{query}"),
        query => format!("{path}?{query}"),
    }
}

impl HistoryDriver for HashHistoryDriver {
    fn current(&self) -> String {
        location_of(&self.history)
    }

    fn push(&self, location: &str) {
        self.history.push(location.to_owned());
    }

    fn replace(&self, location: &str) {
        self.history.replace(location.to_owned());
    }

    fn listen(&self, listener: LocationListener) {
        let history = self.history.clone();
        let handle = self
            .history
            .listen(move || listener(location_of(&history)));
        self.listeners.borrow_mut().push(handle);
    }
}

/// In-memory stack, for tests and targets without a window.
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    listeners: RefCell<Vec<LocationListener>>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(vec![initial.into()]),
            index: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Step back like the browser's back button. Returns false at the start.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    fn go(&self, delta: isize) -> bool {
        let Some(index) = self.index.get().checked_add_signed(delta) else {
            return false;
        };
        if index >= self.len() {
            return false;
        }
        self.index.set(index);
        self.notify();
        true
    }

    fn notify(&self) {
        let current = self.current();
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(current.clone());
        }
    }
}

impl HistoryDriver for MemoryHistory {
    fn current(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    fn push(&self, location: &str) {
        {
            let mut entries = self.entries.borrow_mut();
            entries.truncate(self.index.get() + 1);
            entries.push(location.to_owned());
            self.index.set(entries.len() - 1);
        }
        self.notify();
    }

    fn replace(&self, location: &str) {
        self.entries.borrow_mut()[self.index.get()] = location.to_owned();
        self.notify();
    }

    fn listen(&self, listener: LocationListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn memory_stack() {
        let history = MemoryHistory::new("/");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        history.listen(Rc::new(move |location| sink.borrow_mut().push(location)));

        history.push("/problems");
        history.push("/problem/1");
        assert!(history.back());
        assert_eq!(history.current(), "/problems");
        history.push("/contests");
        assert_eq!(history.len(), 3);
        assert!(!history.forward());
        history.replace("/ranklist");
        assert!(history.back());
        assert!(history.back());
        assert!(!history.back());

        assert_eq!(
            *seen.borrow(),
            vec![
                "/problems",
                "/problem/1",
                "/problems",
                "/contests",
                "/ranklist",
                "/problems",
                "/",
            ]
        );
    }
}
