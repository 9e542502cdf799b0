//! Version source implementations

pub mod appstore;
pub mod local;

pub use appstore::AppStoreVersionSource;
pub use local::LocalVersionSource;
