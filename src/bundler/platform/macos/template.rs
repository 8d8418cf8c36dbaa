//! Template constants for the macOS bundle artifacts.

/// Info.plist property list, rendered with the resolved identity.
///
/// The bundle identifier interpolates the raw product name; names with
/// spaces or dots produce an identifier Apple's tooling would reject. Legacy
/// behavior, kept as is.
pub const INFO_PLIST_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
  <key>CFBundleExecutable</key>
  <string>{{executable}}</string>
  <key>CFBundleIconFile</key>
  <string>icon.icns</string>
  <key>CFBundleIdentifier</key>
  <string>com.visu.{{product_name}}</string>
  <key>CFBundleName</key>
  <string>{{product_name}}</string>
  <key>CFBundlePackageType</key>
  <string>APPL</string>
  <key>CFBundleShortVersionString</key>
  <string>{{version}}</string>
  <key>CFBundleVersion</key>
  <string>{{version}}</string>
  <key>LSMinimumSystemVersion</key>
  <string>10.11</string>
  <key>NSHighResolutionCapable</key>
  <true/>
</dict>
</plist>
"#;

/// Launcher shell script placed in `Contents/MacOS`.
///
/// Resolves its own containing directory so the bundle stays relocatable,
/// then execs the bundled runtime against the fixed entry resource.
pub const LAUNCHER_TEMPLATE: &str = r#"#!/bin/sh
HERE=$(cd "$(dirname "$0")" && pwd)
exec "$HERE/{{runtime}}" "$HERE/../Resources/{{entry}}"
"#;

/// PkgInfo marker: package type `APPL` with an unregistered creator code.
pub const PKG_INFO: &str = "APPL????";
