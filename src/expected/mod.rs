mod expected;
mod unexpected;

pub use expected::Expected;
pub use unexpected::{make_unexpected, Unexpected};
