//! Contact id generation capability.
//!
//! The store never invents ids itself; it asks an injected generator so tests
//! can substitute a deterministic sequence.

use crate::model::contact::ContactId;
use uuid::Uuid;

/// Supplier of opaque contact ids.
///
/// Implementations should not repeat ids. The store still rejects repeats, so
/// a misbehaving generator cannot break the uniqueness invariant.
pub trait ContactIdGenerator {
    fn next_id(&mut self) -> ContactId;
}

/// Random UUID v4 generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl ContactIdGenerator for UuidV4Generator {
    fn next_id(&mut self) -> ContactId {
        Uuid::new_v4()
    }
}

/// Deterministic generator yielding `Uuid::from_u128(start)`, `start + 1`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn new(start: u128) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ContactIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ContactId {
        let id = Uuid::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl<G: ContactIdGenerator + ?Sized> ContactIdGenerator for Box<G> {
    fn next_id(&mut self) -> ContactId {
        (**self).next_id()
    }
}
