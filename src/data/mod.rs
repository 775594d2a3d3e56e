//! Static data tables used by the transpiler.

pub mod maps;
