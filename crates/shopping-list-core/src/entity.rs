//! Core Entity Trait
//!
//! Anything the list stores and looks up by identifier.

/// An object with a stable, unique identifier
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find an entity by ID in a slice
pub fn find_by_id<T: Entity>(entities: &[T], id: T::Id) -> Option<&T> {
    entities.iter().find(|e| e.id() == id)
}

/// Find an entity by ID in a slice, mutably
pub fn find_by_id_mut<T: Entity>(entities: &mut [T], id: T::Id) -> Option<&mut T> {
    entities.iter_mut().find(|e| e.id() == id)
}
