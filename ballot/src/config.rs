//! Start-up configuration.

use ballot_std::strict::StrictChecks;

/// Identifier of the element the application mounts into by default.
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Settings for [`start`](crate::start).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    mount_id: String,
    strict: StrictChecks,
}

impl ShellConfig {
    /// Default configuration: mount into `#root` with every strict check.
    pub fn new() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            strict: StrictChecks::all(),
        }
    }

    /// Mount into a different element.
    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    /// Choose which strict-mode checks run.
    pub fn with_strict(mut self, checks: StrictChecks) -> Self {
        self.strict = checks;
        self
    }

    /// The element identifier to mount into.
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// The enabled strict-mode checks.
    pub fn strict(&self) -> StrictChecks {
        self.strict
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.mount_id(), "root");
        assert_eq!(config.strict(), StrictChecks::all());
    }

    #[test]
    fn test_overrides() {
        let config = ShellConfig::new()
            .with_mount_id("app")
            .with_strict(StrictChecks::UNIQUE_ROUTES);
        assert_eq!(config.mount_id(), "app");
        assert!(!config.strict().contains(StrictChecks::DOUBLE_RENDER));
    }
}
