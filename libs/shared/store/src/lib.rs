pub mod state;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use state::AppState;
pub use store::{Store, StoreCounts};
