pub mod input;
pub mod state;
pub mod store;

pub use state::{ActivityState, PointerButton, TOP_KEYS_LIMIT};
pub use store::ActivityStore;
