//! Core domain models for persona-chat.
//!
//! Turns, the conversation store, the memory window, personas and models.
//! These are pure domain types with no I/O dependencies.

pub mod conversation;
pub mod memory;
pub mod model;
pub mod persona;
pub mod turn;

pub use conversation::Conversation;
pub use memory::{DEFAULT_MEMORY_WINDOW, MAX_MEMORY_WINDOW, MemoryWindow, render};
pub use model::Model;
pub use persona::Persona;
pub use turn::Turn;
