//! Top-level facade crate for cartcap.
//!
//! Re-exports the core types and the extension runtime so hosts can depend
//! on a single crate.

pub mod core {
    pub use cartcap_core::*;
}

pub mod ext {
    pub use cartcap_ext::*;
}
