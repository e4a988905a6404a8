//! Test fixtures - reusable config documents.

/// Build a config document with one `<add>` per pair
pub fn settings(entries: &[(&str, &str)]) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<configuration>\n  <appSettings>\n");
    for (key, value) in entries {
        doc.push_str(&format!("    <add key=\"{}\" value=\"{}\" />\n", key, value));
    }
    doc.push_str("  </appSettings>\n</configuration>\n");
    doc
}

/// A typical web.config with a nested section that must be ignored
pub const WEB_CONFIG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<configuration>
  <configSections>
    <section name="custom" type="Custom.Section" />
  </configSections>
  <appSettings>
    <add key="ApiUrl" value="https://api.example.test/v2" />
    <add key="Feature.Search-Enabled" value="true" />
    <add value="no key here" />
    <add key="1stRunBanner" value="Welcome &amp; hello" />
  </appSettings>
  <system.web>
    <compilation debug="true" />
  </system.web>
</configuration>
"#;

/// A document that ends in the middle of a tag
pub const TRUNCATED_CONFIG: &str = "<configuration>\n  <appSettings>\n    <add key=\"A\" value=";
