#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use linviz_linalg as linalg;

#[doc(inline)]
pub use linviz_span as span;
