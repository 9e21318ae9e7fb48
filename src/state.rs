//! Observable in-memory state.
//!
//! [`State`] keeps an ordered list of items and a list of listeners. Every
//! mutation hands each listener the same snapshot, in subscription order.
//! [`ProjectStore`] is the project-specific layer on top; one instance is
//! created by the root component and shared through the Dioxus context.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use uuid::Uuid;

use crate::models::{Project, ProjectStatus};

type Listener<T> = Rc<dyn Fn(&[T])>;

struct Shared<T> {
    items: Vec<T>,
    listeners: Vec<(u64, Listener<T>)>,
    next_listener_id: u64,
}

pub struct State<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                items: Vec::new(),
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`. It stays registered until the returned handle is
    /// dropped or [`Subscription::unsubscribe`] is called.
    pub fn subscribe(&self, listener: impl Fn(&[T]) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(listener);
        let id = {
            let mut shared = self.shared.borrow_mut();
            let id = shared.next_listener_id;
            shared.next_listener_id += 1;
            shared.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<Shared<T>>> = Rc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    /// Appends `item` and broadcasts the new snapshot.
    pub fn push(&self, item: T) {
        self.shared.borrow_mut().items.push(item);
        self.broadcast();
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.shared.borrow().items.clone()
    }

    pub fn len(&self) -> usize {
        self.shared.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.borrow().items.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.shared.borrow().listeners.len()
    }

    // The borrow is released before any listener runs, so listeners may read,
    // subscribe or push again.
    fn broadcast(&self) {
        let (snapshot, listeners) = {
            let shared = self.shared.borrow();
            let listeners: Vec<Listener<T>> =
                shared.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (shared.items.clone(), listeners)
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Handle returned by [`State::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct ProjectStore {
    state: State<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&[Project]) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    /// Creates an active project with a fresh random id, appends it and
    /// notifies every listener before returning it.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        manday: f64,
    ) -> Project {
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            manday,
            status: ProjectStatus::Active,
        };
        tracing::info!(id = %project.id, title = %project.title, manday, "project added");
        self.state.push(project.clone());
        project
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.state.snapshot()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }
}
