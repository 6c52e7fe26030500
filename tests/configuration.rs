//! Tests for configuration system

use folio::config::Config;
use std::io::Write;
use temp_dir::TempDir;

#[test]
fn test_config_loads_defaults() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.site.brand, "ARS");
    assert_eq!(config.site.output_dir.to_str(), Some("dist"));
    assert_eq!(config.emailjs.endpoint, "https://api.emailjs.com");
    assert_eq!(config.emailjs.timeout_secs, 10);
    assert_eq!(config.viewport.pointer_throttle_ms, 100);
    assert_eq!(config.viewport.reveal_threshold, 0.3);
    assert_eq!(config.viewport.header_elevation_offset, 50.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("site.toml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(
        file,
        r#"
[site]
output_dir = "public"
owner = "Jane Doe"

[emailjs]
service_id = "service_file"
timeout_secs = 0
"#
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.site.owner, "Jane Doe");
    assert_eq!(config.site.brand, "ARS");
    assert_eq!(config.site.output_dir.to_str(), Some("public"));
    assert_eq!(config.emailjs.service_id.as_deref(), Some("service_file"));
    assert!(config.validate().is_err());

    Ok(())
}
