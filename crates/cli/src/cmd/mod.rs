mod benchmark;
mod sdk;

pub use benchmark::cmd_benchmark;
pub use sdk::cmd_sdk;
