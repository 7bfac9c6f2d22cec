//! Browser-list table rendering.

use bstart::BrowserRegistry;

const NAME_COLUMN: &str = "browser-name";

/// Render the registry as an aligned two-column table.
pub fn render(registry: &BrowserRegistry) -> String {
    if registry.is_empty() {
        return "No browsers registered.\n".to_string();
    }

    let path_column = if cfg!(windows) {
        r"path\to\browser"
    } else {
        "path/to/browser"
    };

    // Widths in characters, not bytes; format padding counts characters.
    let name_width = registry
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain([NAME_COLUMN.chars().count()])
        .max()
        .unwrap_or(0);
    let path_width = registry
        .iter()
        .map(|(_, path)| path.display().to_string().chars().count())
        .chain([path_column.chars().count()])
        .max()
        .unwrap_or(0);

    let mut out = String::from("Browser list\n");
    out.push_str(&format!("  {NAME_COLUMN:<name_width$} |>  {path_column}\n"));
    out.push_str(&"-".repeat(name_width + path_width + 10));
    out.push('\n');

    for (name, path) in registry.iter() {
        out.push_str(&format!("  {name:<name_width$} |>  {}\n", path.display()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_renders_placeholder() {
        let registry = BrowserRegistry::new();
        assert_eq!(render(&registry), "No browsers registered.\n");
    }

    #[test]
    fn table_aligns_names_and_lists_paths() {
        let mut registry = BrowserRegistry::new();
        registry.register("firefox", "/usr/bin/firefox");
        registry.register("google-chrome-stable-long", "/usr/bin/google-chrome");

        let table = render(&registry);
        assert!(table.starts_with("Browser list\n"));
        assert!(table.contains("browser-name"));

        // Both separators line up on the widest name.
        let lines: Vec<&str> = table
            .lines()
            .filter(|line| line.contains("|>"))
            .collect();
        assert_eq!(lines.len(), 3);
        let positions: Vec<usize> = lines.iter().map(|line| line.find("|>").unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] == pair[1]));

        assert!(table.contains("/usr/bin/firefox"));
        assert!(table.contains("/usr/bin/google-chrome"));
    }

    #[test]
    fn non_ascii_names_pad_by_character_count() {
        let mut registry = BrowserRegistry::new();
        registry.register("firefox", "/usr/bin/firefox");
        registry.register("日本語のブラウザ", "/usr/bin/browser");

        let table = render(&registry);
        let prefix_chars: Vec<usize> = table
            .lines()
            .filter(|line| line.contains("|>"))
            .map(|line| line.split("|>").next().unwrap().chars().count())
            .collect();

        // Header "browser-name" (12 chars) is the widest name column entry,
        // so every row is two spaces + 12 padded chars + one space.
        assert_eq!(prefix_chars.len(), 3);
        assert!(prefix_chars.iter().all(|&count| count == 15));
    }
}
