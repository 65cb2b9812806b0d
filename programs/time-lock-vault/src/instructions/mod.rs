pub mod contribute;
pub mod initialize;
pub mod status;
pub mod withdraw;

pub use contribute::*;
pub use initialize::*;
pub use status::*;
pub use withdraw::*;
