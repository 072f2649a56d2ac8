// ============================================================================
// REACTIVITY - Shared state cell with change subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Shared mutable state; every clone points at the same value and subscribers
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    version: Rc<Cell<u64>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            version: Rc::new(Cell::new(0)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Read the value without notifying anyone
    pub fn read<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Mutate the value, bump the version and notify subscribers.
    /// The borrow is released before subscribers run.
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.value.borrow_mut();
            updater(&mut value)
        };
        self.version.set(self.version.get().wrapping_add(1));
        self.notify();
        result
    }

    /// Incremented on every `update`
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    fn notify(&self) {
        // Snapshot so a subscriber may subscribe again without a double borrow
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            version: self.version.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_bumps_version_and_notifies() {
        let state = ReactiveState::new(0u32);
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1));
        }

        let doubled = state.update(|v| {
            *v += 21;
            *v * 2
        });

        assert_eq!(doubled, 42);
        assert_eq!(state.get(), 21);
        assert_eq!(state.version(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::new());
        let alias = state.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let reader = state.clone();
            state.subscribe(move || seen.borrow_mut().push(reader.get()));
        }

        alias.update(|s| s.push_str("hello"));

        assert!(state.ptr_eq(&alias));
        assert_eq!(state.read(|s| s.len()), 5);
        assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
    }
}
