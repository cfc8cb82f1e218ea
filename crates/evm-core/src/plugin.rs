use evm_error::{Result, VersionManagerError};
use evm_store::VersionStore;
use evm_version::{Epoch, Version};

use crate::tool::ExternalTool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginAction {
    List,
    Install,
    Remove,
}

/// Delegates plugin management to the active version's own plugin tool.
/// Both the tool path and the flag style depend on the epoch: 1.x ships
/// `bin/plugin` with long-form flags, 2.x the same tool with bare
/// subcommands, 5.x+ renamed it to `bin/elasticsearch-plugin`.
pub struct PluginBridge;

impl PluginBridge {
    pub fn run(store: &VersionStore, action: PluginAction, name: Option<&str>) -> Result<i32> {
        let version = store
            .current_version()
            .ok_or(VersionManagerError::NoActiveVersion)?;

        let tool = Self::build_invocation(store, &version, action, name)?;
        tool.ensure_executable()?;
        tool.run_foreground()
    }

    pub fn build_invocation(
        store: &VersionStore,
        version: &Version,
        action: PluginAction,
        name: Option<&str>,
    ) -> Result<ExternalTool> {
        let name = match action {
            PluginAction::List => None,
            PluginAction::Install | PluginAction::Remove => Some(
                name.filter(|n| !n.is_empty())
                    .ok_or_else(|| VersionManagerError::MissingArgument("plugin name".into()))?,
            ),
        };

        let bin = store.install_dir(version).join("bin");
        let tool_path = match version.epoch() {
            Epoch::Legacy | Epoch::Mid => bin.join("plugin"),
            Epoch::Modern => bin.join("elasticsearch-plugin"),
        };

        let flag = match (version.epoch(), action) {
            (Epoch::Legacy, PluginAction::List) => "--list",
            (Epoch::Legacy, PluginAction::Install) => "--install",
            (Epoch::Legacy, PluginAction::Remove) => "--remove",
            (_, PluginAction::List) => "list",
            (_, PluginAction::Install) => "install",
            (_, PluginAction::Remove) => "remove",
        };

        let mut tool = ExternalTool::new(tool_path).arg(flag);
        if let Some(name) = name {
            tool = tool.arg(name);
        }
        Ok(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    fn empty_store() -> (TempDir, VersionStore) {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::at(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn legacy_epoch_uses_long_form_flags_on_the_old_tool() {
        let (_dir, store) = empty_store();
        let version = v("1.7.2");

        let tool =
            PluginBridge::build_invocation(&store, &version, PluginAction::Install, Some("head"))
                .unwrap();
        assert_eq!(
            tool.path(),
            store.install_dir(&version).join("bin").join("plugin")
        );
        assert_eq!(tool.args(), ["--install", "head"]);

        let tool =
            PluginBridge::build_invocation(&store, &version, PluginAction::List, None).unwrap();
        assert_eq!(tool.args(), ["--list"]);
    }

    #[test]
    fn mid_epoch_keeps_the_old_tool_with_bare_subcommands() {
        let (_dir, store) = empty_store();
        let version = v("2.4.6");

        let tool =
            PluginBridge::build_invocation(&store, &version, PluginAction::Remove, Some("head"))
                .unwrap();
        assert_eq!(
            tool.path(),
            store.install_dir(&version).join("bin").join("plugin")
        );
        assert_eq!(tool.args(), ["remove", "head"]);
    }

    #[test]
    fn modern_epoch_uses_the_renamed_tool() {
        let (_dir, store) = empty_store();
        let version = v("5.3.1");

        let tool =
            PluginBridge::build_invocation(&store, &version, PluginAction::List, None).unwrap();
        assert_eq!(
            tool.path(),
            store
                .install_dir(&version)
                .join("bin")
                .join("elasticsearch-plugin")
        );
        assert_eq!(tool.args(), ["list"]);
    }

    #[test]
    fn install_and_remove_require_a_plugin_name() {
        let (_dir, store) = empty_store();
        let version = v("5.3.1");

        for action in [PluginAction::Install, PluginAction::Remove] {
            for name in [None, Some("")] {
                let err =
                    PluginBridge::build_invocation(&store, &version, action, name).unwrap_err();
                assert!(matches!(err, VersionManagerError::MissingArgument(_)));
            }
        }
    }

    #[test]
    fn running_without_an_active_version_is_rejected() {
        let (_dir, store) = empty_store();
        let err = PluginBridge::run(&store, PluginAction::List, None).unwrap_err();
        assert!(matches!(err, VersionManagerError::NoActiveVersion));
    }

    #[test]
    fn missing_plugin_tool_is_reported() {
        let (_dir, store) = empty_store();
        let version = v("5.3.1");
        fs::create_dir_all(store.install_dir(&version)).unwrap();
        store.activate(&version).unwrap();

        let err = PluginBridge::run(&store, PluginAction::List, None).unwrap_err();
        assert!(matches!(err, VersionManagerError::ToolNotFound(_)));
    }
}
