pub mod measurement;
pub mod period;
pub mod station;

pub use measurement::*;
pub use period::*;
pub use station::*;
