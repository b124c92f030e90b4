//! Command implementations
//!
//! `import` and `test` load their input with [`hypotest::analysis::Analysis::load`].
//! The export commands and the interactive session go through a
//! [`hypotest::session::Session`].

pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod session;
