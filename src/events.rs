//! Change notifications.
//!
//! Observers are called after a mutation has completed, never part way
//! through one.  Removing a vertex reports only the vertex; the incident
//! edges removed along with it are not reported one by one.  Clearing a
//! collection reports nothing.

use std::fmt::{self, Debug};

use crate::ids::{EdgeId, EdgeKey, VertexId, VertexKey};

/// A change to a graph's membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphEvent {
    VertexAdded { vertex: VertexKey, id: VertexId },
    /// The key is no longer valid when this is delivered.
    VertexRemoved { vertex: VertexKey, id: VertexId },
    EdgeAdded { edge: EdgeKey, id: EdgeId },
    /// The key is no longer valid when this is delivered.
    EdgeRemoved { edge: EdgeKey, id: EdgeId },
}

/// Identifies a subscription so that it can be cancelled.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(&GraphEvent) + Send>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(ObserverId, Callback)>,
}

impl Observers {
    pub fn subscribe(&mut self, callback: Callback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(observer, _)| *observer != id);
        self.callbacks.len() != before
    }

    /// Delivers `event` to every observer in subscription order.
    pub fn notify(&mut self, event: GraphEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observers({})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_subscribe_notify_unsubscribe() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();
        let sink = Arc::clone(&seen);
        let first = observers.subscribe(Box::new(move |event| {
            sink.lock().unwrap().push(("first", *event))
        }));
        let sink = Arc::clone(&seen);
        observers.subscribe(Box::new(move |event| {
            sink.lock().unwrap().push(("second", *event))
        }));
        assert_eq!(observers.len(), 2);

        let event = GraphEvent::EdgeRemoved {
            edge: {
                let mut slots = crate::id_vec::IdVec::new();
                EdgeKey::new(slots.insert(()), crate::graph_id::GraphId::new())
            },
            id: EdgeId(3),
        };
        observers.notify(event);
        assert_eq!(*seen.lock().unwrap(), vec![("first", event), ("second", event)]);

        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        seen.lock().unwrap().clear();
        observers.notify(event);
        assert_eq!(*seen.lock().unwrap(), vec![("second", event)]);
    }
}
