pub mod repository;
pub mod storage;
pub mod view;

pub use repository::{CART_STORAGE_KEY, CartLine, CartRepository, Subscription, product_id};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use view::{CartBadge, CartRow, CartView};
