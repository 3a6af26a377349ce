//! Storage layer for persisted controller state.
//!
//! This module provides the key-value storage abstraction and the favorites set
//! that persists through it.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait implemented by every backend
//! - `memory`: non-durable `HashMap` backend
//! - `json`: JSON file backend with atomic writes
//! - `favorites`: favorited event ids mirrored to a backend

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
