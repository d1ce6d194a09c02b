pub mod abi_encoding;
pub mod big_num;
pub mod fixed_point;
pub mod float_math;

pub use abi_encoding::*;
pub use big_num::*;
pub use fixed_point::*;
pub use float_math::*;
