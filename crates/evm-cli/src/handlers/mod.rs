pub mod install;
pub mod list;
pub mod plugin;
pub mod remove;
pub mod start;
pub mod switch;
pub mod version;
pub mod which;

pub use install::InstallHandler;
pub use list::ListHandler;
pub use plugin::PluginHandler;
pub use remove::RemoveHandler;
pub use start::StartHandler;
pub use switch::UseHandler;
pub use version::VersionHandler;
pub use which::WhichHandler;
