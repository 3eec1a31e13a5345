//! Defaults for the safelist generator.
//!
//! The defaults target a Rust frontend crate: every `.rs` file under `./src` is
//! scanned and the result lands in `tailwind_safelist.json` next to the
//! Tailwind configuration that consumes it.

/// Directory scanned when `--root` is not given
pub const DEFAULT_ROOT: &str = "src";

/// Safelist artifact written when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "tailwind_safelist.json";

/// Source extension scanned when `--ext` is not given
pub const DEFAULT_EXTENSION: &str = "rs";

/// Characters treated as whitespace when a captured segment is split into tokens
pub const SEGMENT_SEPARATORS: &[char] = &['"', '\'', ','];
