//! Type generation for the web shell happens in `build.rs`.
