// file: src/config.rs
// version: 1.0.0
// guid: eb7bbfa4-26bc-46b1-a379-0fc2fdca144b

use tracing::debug;

/// Title shown between the top separators of the menu
pub const DEFAULT_TITLE: &str = "Linux Utilities Menu";

/// Width of every separator line
pub const DEFAULT_SEPARATOR_WIDTH: usize = 50;

/// Shell used to run action commands (`<shell> -c <command>`)
pub const DEFAULT_SHELL: &str = "sh";

/// Application configuration
///
/// There are no configuration files; this only gathers the fixed presentation
/// and execution settings in one place so they can be swapped in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub title: String,
    pub separator_width: usize,
    pub shell: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

impl MenuConfig {
    /// Use a different shell program for action commands
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        debug!("Configured shell: {}", self.shell);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MenuConfig::default();
        assert_eq!(config.title, "Linux Utilities Menu");
        assert_eq!(config.separator_width, 50);
        assert_eq!(config.shell, "sh");
    }

    #[test]
    fn test_with_shell() {
        let config = MenuConfig::default().with_shell("/bin/bash");
        assert_eq!(config.shell, "/bin/bash");
        assert_eq!(config.title, DEFAULT_TITLE);
    }
}
