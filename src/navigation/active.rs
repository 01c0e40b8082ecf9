use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::registry::RegionId;

type Listener = Rc<dyn Fn(Option<&RegionId>)>;

struct Shared {
    current: RefCell<Option<RegionId>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// Creates the active-section cell. The writer goes to the visibility
/// tracker; readers can be cloned freely.
pub fn active_section() -> (ActiveSectionWriter, ActiveSectionReader) {
    let shared = Rc::new(Shared {
        current: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
        next_id: Cell::new(0),
    });
    (
        ActiveSectionWriter { shared: shared.clone() },
        ActiveSectionReader { shared },
    )
}

/// The only handle allowed to change the active section. Not `Clone`.
pub struct ActiveSectionWriter {
    shared: Rc<Shared>,
}

impl ActiveSectionWriter {
    /// Returns true when the value changed. Listeners only hear about changes.
    pub fn set(&self, next: Option<RegionId>) -> bool {
        if *self.shared.current.borrow() == next {
            return false;
        }
        *self.shared.current.borrow_mut() = next.clone();

        // Snapshot so a listener may subscribe or unsubscribe while notified.
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(next.as_ref());
        }
        true
    }

    pub fn reader(&self) -> ActiveSectionReader {
        ActiveSectionReader { shared: self.shared.clone() }
    }
}

#[derive(Clone)]
pub struct ActiveSectionReader {
    shared: Rc<Shared>,
}

impl ActiveSectionReader {
    #[cfg(test)]
    pub fn get(&self) -> Option<RegionId> {
        self.shared.current.borrow().clone()
    }

    /// The listener stays registered until the returned guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(Option<&RegionId>) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }
}

pub struct Subscription {
    shared: Weak<Shared>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let (_writer, reader) = active_section();
        assert_eq!(reader.get(), None);
    }

    #[test]
    fn listeners_hear_changes_only() {
        let (writer, reader) = active_section();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = reader.subscribe(move |id| {
            sink.borrow_mut().push(id.map(|id| id.to_string()));
        });

        assert!(writer.set(Some(RegionId::new("features"))));
        assert!(!writer.set(Some(RegionId::new("features"))));
        assert!(writer.set(Some(RegionId::new("contact"))));

        assert_eq!(
            *seen.borrow(),
            vec![Some("features".to_string()), Some("contact".to_string())]
        );
        assert_eq!(reader.get(), Some(RegionId::new("contact")));
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let (writer, reader) = active_section();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let sub = reader.subscribe(move |_| counter.set(counter.get() + 1));

        writer.set(Some(RegionId::new("features")));
        drop(sub);
        writer.set(Some(RegionId::new("security")));

        assert_eq!(count.get(), 1);
    }
}
