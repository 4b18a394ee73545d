// file: src/menu/registry.rs
// version: 1.0.0
// guid: 6a9122e6-9f36-4a59-95e9-56c610f1c99d

//! Ordered registry of menu option labels

use crate::config::MenuConfig;
use crate::Result;
use std::io::Write;

/// Labels registered at startup, in display order. The last one is the exit.
pub const DEFAULT_OPTIONS: [&str; 4] = [
    "Display running processes (ps)",
    "Display disk usage (df)",
    "Display system uptime",
    "Exit",
];

/// An ordered, append-only list of option labels
///
/// Options are numbered from 1 in insertion order. The last option added is
/// the exit option, so the exit selection always equals [`Menu::len`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    separator_width: usize,
    options: Vec<String>,
}

impl Menu {
    /// Create an empty menu with the default title
    pub fn new() -> Self {
        Self::from_config(&MenuConfig::default())
    }

    /// Create an empty menu using the configured title and separator width
    pub fn from_config(config: &MenuConfig) -> Self {
        Self {
            title: config.title.clone(),
            separator_width: config.separator_width,
            options: Vec::new(),
        }
    }

    /// Create the standard four-option utilities menu
    pub fn default_utilities(config: &MenuConfig) -> Self {
        let mut menu = Self::from_config(config);
        for label in DEFAULT_OPTIONS {
            menu.add_option(label);
        }
        menu
    }

    /// Append an option. Labels are not validated or deduplicated.
    pub fn add_option(&mut self, label: impl Into<String>) {
        self.options.push(label.into());
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Selection value that means "Exit"
    pub fn exit_selection(&self) -> usize {
        self.options.len()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A separator line made of `fill`
    pub fn separator(&self, fill: char) -> String {
        std::iter::repeat(fill).take(self.separator_width).collect()
    }

    /// Write the numbered listing
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let rule = self.separator('=');

        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{}", rule)?;
        for (i, option) in self.options.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, option)?;
        }
        writeln!(out, "{}", rule)?;

        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(menu: &Menu) -> String {
        let mut out = Vec::new();
        menu.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_option_appends_in_order() {
        let mut menu = Menu::new();
        assert!(menu.is_empty());

        menu.add_option("first");
        menu.add_option("second");
        menu.add_option("first");

        assert_eq!(menu.len(), 3);
        assert_eq!(menu.options(), ["first", "second", "first"]);
        assert_eq!(menu.exit_selection(), 3);
    }

    #[test]
    fn test_default_utilities() {
        let menu = Menu::default_utilities(&MenuConfig::default());
        assert_eq!(menu.len(), 4);
        assert_eq!(menu.options()[3], "Exit");
        assert_eq!(menu.exit_selection(), 4);
    }

    #[test]
    fn test_render_layout() {
        let menu = Menu::default_utilities(&MenuConfig::default());
        let text = rendered(&menu);
        let rule = "=".repeat(50);

        let expected = format!(
            "\n{rule}\nLinux Utilities Menu\n{rule}\n\
             1. Display running processes (ps)\n\
             2. Display disk usage (df)\n\
             3. Display system uptime\n\
             4. Exit\n{rule}\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_numbers_follow_append_order() {
        let mut menu = Menu::new();
        let labels: Vec<String> = (0..12).map(|i| format!("option {}", i)).collect();
        for label in &labels {
            menu.add_option(label.clone());
        }

        let text = rendered(&menu);
        let listed: Vec<&str> = text.lines().filter(|l| l.contains(". option")).collect();

        assert_eq!(listed.len(), labels.len());
        for (i, line) in listed.iter().enumerate() {
            assert_eq!(*line, format!("{}. {}", i + 1, labels[i]));
        }
    }

    #[test]
    fn test_render_does_not_mutate() {
        let menu = Menu::default_utilities(&MenuConfig::default());
        let before = menu.clone();

        let first = rendered(&menu);
        let second = rendered(&menu);

        assert_eq!(first, second);
        assert_eq!(menu, before);
    }

    #[test]
    fn test_separator_uses_configured_width() {
        let config = MenuConfig {
            separator_width: 8,
            ..MenuConfig::default()
        };
        let menu = Menu::from_config(&config);
        assert_eq!(menu.separator('-'), "--------");
    }
}
