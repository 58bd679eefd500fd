pub mod diagnostics;
pub mod pet;
