pub mod layout;
pub mod version_store;

pub use layout::default_root;
pub use version_store::VersionStore;
