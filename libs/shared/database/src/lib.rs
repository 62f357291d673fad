pub mod error;
pub mod pool;
pub mod store;

pub use error::StoreError;
pub use pool::{connect, connect_in_memory};
pub use store::{ClinicStore, StoreTransaction};
