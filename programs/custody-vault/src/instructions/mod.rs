pub mod deposit;
pub mod initialize;
pub mod operations;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use operations::*;
pub use withdraw::*;
