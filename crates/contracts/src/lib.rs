//! Wire types shared with the Merenda REST backend.

pub mod domain;
pub mod shared;
pub mod system;
