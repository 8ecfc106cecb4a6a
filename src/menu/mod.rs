// Menu domain module
// Contains the item model, the file-backed store, and the CRUD service

pub mod item;
pub mod service;
pub mod store;

pub use item::{ItemId, MenuItem, MenuItemPatch, NewMenuItem};
pub use service::{MenuService, ServiceError};
pub use store::{MenuStore, StoreError};
