//! Template document handling: loading, global token substitution, and
//! per-entry rendering.
//!
//! The template document is one block of text used twice: the interactive
//! picker renders it as the detail view for the highlighted entry, and the
//! final oneliner printed to stdout is the same render for the confirmed
//! entry. Before either render, three literal tokens (`[IP]`, `[PORT]`,
//! `[PROTO]`) are substituted once from the process-wide configuration.

pub mod engine;

pub use engine::Engine;

use crate::config::Config;
use crate::error::{Result, SnagError};
use crate::scan::FileEntry;
use std::path::Path;

/// The built-in oneliners template, embedded at compile time.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/oneliners.tpl");

/// Load the template document.
///
/// With no override path the embedded default is returned and loading cannot
/// fail. A read failure on an override path is fatal; there is no retry.
pub fn load(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            SnagError::Template(format!(
                "fail to read template '{}': {}",
                path.display(),
                e
            ))
        }),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Substitute the global placeholder tokens from the configuration.
///
/// Replaces every literal `[IP]`, `[PORT]`, and `[PROTO]` occurrence. The
/// tokens are disjoint so substitution order does not matter; once no tokens
/// remain, re-applying is a no-op. No other text is touched and no error
/// condition exists.
pub fn substitute_globals(template: &str, config: &Config) -> String {
    template
        .replace("[IP]", &config.ip)
        .replace("[PORT]", &config.port.to_string())
        .replace("[PROTO]", config.proto())
}

/// Render the template document for a single file entry.
///
/// Exposes the `name` and `path` fields bound to the entry. Parse and render
/// errors are fatal.
pub fn render_entry(engine: &Engine, template: &str, entry: &FileEntry) -> Result<String> {
    let fields = engine::fields([("name", entry.name.as_str()), ("path", entry.path.as_str())]);
    engine
        .render(template, &fields)
        .map_err(|e| SnagError::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(ip: &str, port: u16, tls: bool) -> Config {
        Config {
            ip: ip.to_string(),
            port,
            tls,
            ..Config::default()
        }
    }

    fn entry(name: &str, path: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn load_default_template() {
        let text = load(None).unwrap();
        assert_eq!(text, DEFAULT_TEMPLATE);
        assert!(text.contains("[IP]"));
        assert!(text.contains("[PORT]"));
        assert!(text.contains("[PROTO]"));
    }

    #[test]
    fn load_override_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.tpl");
        std::fs::write(&path, "curl [PROTO]://[IP]:[PORT]/{path}\n").unwrap();

        let text = load(Some(&path)).unwrap();
        assert_eq!(text, "curl [PROTO]://[IP]:[PORT]/{path}\n");
    }

    #[test]
    fn load_missing_override_is_fatal() {
        let err = load(Some(Path::new("/nonexistent/custom.tpl"))).unwrap_err();
        assert!(err.to_string().starts_with("oneliners: fail to read template"));
    }

    #[test]
    fn substitute_replaces_all_tokens() {
        let config = test_config("10.0.0.5", 4444, false);
        let text = "a [IP] b [PORT] c [PROTO] d [IP]";
        let result = substitute_globals(text, &config);
        assert_eq!(result, "a 10.0.0.5 b 4444 c http d 10.0.0.5");
        assert!(!result.contains("[IP]"));
        assert!(!result.contains("[PORT]"));
        assert!(!result.contains("[PROTO]"));
    }

    #[test]
    fn substitute_is_idempotent() {
        let config = test_config("10.0.0.5", 4444, false);
        let once = substitute_globals("curl [PROTO]://[IP]:[PORT]/x", &config);
        let twice = substitute_globals(&once, &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn substitute_respects_tls_flag() {
        let text = "[PROTO]";
        assert_eq!(substitute_globals(text, &test_config("1.2.3.4", 80, false)), "http");
        assert_eq!(substitute_globals(text, &test_config("1.2.3.4", 443, true)), "https");
    }

    #[test]
    fn substitute_touches_no_other_tokens() {
        let config = test_config("10.0.0.5", 4444, false);
        let result = substitute_globals("[HOST] {name} [ip]", &config);
        assert_eq!(result, "[HOST] {name} [ip]");
    }

    #[test]
    fn render_entry_binds_name_and_path() {
        let engine = Engine::new();
        let result = render_entry(
            &engine,
            "curl http://10.0.0.5:4444/{path} -o {name}",
            &entry("b.txt", "a/b.txt"),
        )
        .unwrap();
        assert_eq!(result, "curl http://10.0.0.5:4444/a/b.txt -o b.txt");
    }

    #[test]
    fn render_entry_parse_error_is_fatal() {
        let engine = Engine::new();
        let err = render_entry(&engine, "curl {path", &entry("b.txt", "a/b.txt")).unwrap_err();
        assert!(matches!(err, SnagError::Template(_)));
        assert!(err.to_string().contains("unmatched"));
    }

    #[test]
    fn default_template_renders_without_error() {
        let engine = Engine::new();
        let config = test_config("10.0.0.5", 4444, true);
        let doc = substitute_globals(DEFAULT_TEMPLATE, &config);
        let result = render_entry(&engine, &doc, &entry("b.txt", "a/b.txt")).unwrap();
        assert!(result.contains("https://10.0.0.5:4444/a/b.txt"));
        assert!(!result.contains('{'));
    }

    #[test]
    fn end_to_end_substitute_then_render() {
        // Matches the scenario from the original tool: pick a/b.txt and get
        // a pasteable curl command.
        let engine = Engine::new();
        let config = test_config("10.0.0.5", 4444, false);
        let doc = substitute_globals("curl http://[IP]:[PORT]/{path}", &config);
        let result = render_entry(&engine, &doc, &entry("b.txt", "a/b.txt")).unwrap();
        assert_eq!(result, "curl http://10.0.0.5:4444/a/b.txt");
    }
}
