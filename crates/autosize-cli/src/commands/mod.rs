//! Command implementations.

pub mod check;
pub mod configs;
pub mod external;
pub mod utils;

pub use check::execute as check_execute;
pub use configs::execute as configs_execute;
pub use external::execute as external_execute;
