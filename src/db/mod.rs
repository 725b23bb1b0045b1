pub mod codec;
pub mod db_utils;
pub mod entity;
pub mod events;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod organizations;
pub mod records;
pub mod stats;
pub mod store;
pub mod users;

pub use entity::{Entity, EntityKind};
pub use store::EntityStore;
