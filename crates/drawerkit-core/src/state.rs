//! Observable value holders.
//!
//! `MutableState` is the writable side kept by a component; `State` is the
//! read-only view handed to observers (hosts reading the animated position
//! every frame). Both are thin `Rc<RefCell>` wrappers: single-threaded shared
//! ownership, no snapshot system.

use std::cell::RefCell;
use std::rc::Rc;

pub struct MutableState<T> {
    inner: Rc<RefCell<T>>,
}

impl<T: Clone> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }

    pub fn set_value(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    inner: Rc<RefCell<T>>,
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
