//! Items used by the code generated in `vc_reflect_derive`.

pub mod macro_utils {
    pub use alloc::borrow::{Cow, ToOwned};
    pub use alloc::boxed::Box;
    pub use alloc::string::{String, ToString};

    pub use crate::impls::concat as __concat;
}
