//! Template constants for the Windows bundle artifacts.

/// win32 application manifest describing the bundle.
///
/// `version` must carry exactly four numeric parts.
pub const APP_MANIFEST_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
  <assemblyIdentity name="com.visu.{{product_name}}" version="{{version_quad}}" type="win32"/>
  <description>{{product_name}}</description>
</assembly>
"#;

/// Batch launcher placed at the bundle root.
///
/// `%~dp0` expands to the script's own directory, so the bundle stays
/// relocatable. `entry` carries the full `resources\...` path: a literal
/// backslash before a mustache would read as an escaped `\{{` to the
/// template engine.
pub const LAUNCHER_TEMPLATE: &str = "@echo off\r\n\"%~dp0{{runtime}}\" \"%~dp0{{entry}}\"\r\n";
