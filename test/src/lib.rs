pub mod helpers;
pub mod local_channel;
pub mod test_oracle;

pub use helpers::*;
pub use local_channel::{LinkConditionerConfig, LocalChannel};
pub use test_oracle::TestOracle;
pub use test_world::{TestBody, TestWorld};
