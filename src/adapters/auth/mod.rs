//! Authentication adapters.

mod mock;

pub use mock::{MockAuthBackend, MOCK_USER_ID, MOCK_USER_NAME};
