//! Repository layer.
//!
//! [`PetRepo`] talks to PostgreSQL; [`MemoryPetStore`] keeps rows in process
//! memory. Both implement [`crate::PetStore`].

pub mod memory_pet_store;
pub mod pet_repo;

pub use memory_pet_store::MemoryPetStore;
pub use pet_repo::PetRepo;
