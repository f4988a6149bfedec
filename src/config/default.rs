// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example configuration written by `checklicenses init`.

/// File name used by `init`.
pub const DEFAULT_CONFIG_FILE: &str = "checklicenses.json";

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"{
  "Licenses": [
    [
      "// Copyright 20[0-9]{2}(-20[0-9]{2})? .+\\. All rights reserved\\.?",
      "// Use of this source code is governed by a BSD-style",
      "// license that can be found in the LICENSE file\\."
    ],
    [
      "// SPDX-License-Identifier: [A-Za-z0-9.+-]+"
    ]
  ],
  "GoPkg": "",
  "Accept": [
    ".*\\.(go|rs|c|h)"
  ],
  "Reject": [
    "vendor/.*",
    "third_party/.*",
    ".*\\.pb\\.go"
  ]
}
"#
}
