// Integration tests for tool-links

use std::fs;
use tempfile::TempDir;
use tool_links::{Config, Error, LinkEntry, LinkTable, MarkdownConfig, MarkdownGenerator};

fn generator_in(dir: &TempDir, name: &str) -> MarkdownGenerator {
    MarkdownGenerator::new(MarkdownConfig {
        output_path: dir.path().join(name),
    })
}

// ============================================================================
// Generation Tests
// ============================================================================

#[test]
fn test_generate_example_scenario() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir, "TOOLS_LINKS.md");
    let entries = vec![
        LinkEntry::new("A", "http://a.test"),
        LinkEntry::new("B", "http://b.test"),
    ];

    generator.generate(&entries).expect("Generation failed");

    let written = fs::read_to_string(generator.output_path()).unwrap();
    assert_eq!(
        written.lines().collect::<Vec<_>>(),
        vec![
            "# Tool Links (Source of Truth)",
            "Official / primary references used in this environment.",
            "- A: http://a.test",
            "- B: http://b.test",
        ]
    );
}

#[test]
fn test_generate_empty_table() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir, "empty.md");

    let report = generator.generate(&[]).expect("Generation failed");

    let written = fs::read_to_string(generator.output_path()).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert_eq!(report.entries, 0);
}

#[test]
fn test_generate_builtin_table() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir, "TOOLS_LINKS.md");
    let table = LinkTable::builtin();

    generator.generate(table.entries()).expect("Generation failed");

    let written = fs::read_to_string(generator.output_path()).unwrap();
    assert_eq!(written.lines().count(), 2 + table.entries().len());
    assert!(written.contains("- WezTerm Docs: https://wezfurlong.org/wezterm/\n"));
    assert!(written.ends_with("- Git for Windows: https://gitforwindows.org/\n"));
}

#[test]
fn test_generate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let generator = generator_in(&dir, "links.md");
    let table = LinkTable::builtin();

    generator.generate(table.entries()).unwrap();
    let first = fs::read(generator.output_path()).unwrap();
    generator.generate(table.entries()).unwrap();
    let second = fs::read(generator.output_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let generator = MarkdownGenerator::new(MarkdownConfig {
        output_path: dir.path().join("missing/links.md"),
    });

    let result = generator.generate(LinkTable::builtin().entries());

    assert!(matches!(result, Err(Error::Io(_))));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_generate_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("tool-links.toml");
    let output_path = dir.path().join("refs.md");
    fs::write(
        &config_path,
        format!(
            r#"
[output]
path = '{}'

[[links]]
label = "Only"
url = "https://only.test/"
"#,
            output_path.display()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).expect("Config load failed");
    let generator = MarkdownGenerator::new(MarkdownConfig {
        output_path: config.output.path.clone(),
    });
    generator.generate(&config.links).unwrap();

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.ends_with("- Only: https://only.test/\n"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("tool-links.toml");
    fs::write(&config_path, "[[links]]\nlabel = \"No url\"\nurl = \"\"\n").unwrap();

    let result = Config::load(&config_path);
    assert!(matches!(result, Err(Error::ConfigValidation(_))));
}
