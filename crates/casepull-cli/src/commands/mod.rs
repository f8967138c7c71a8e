//! Command implementations.

pub mod batch;
pub mod columns;
pub mod fetch;
pub mod init;
pub mod inspect;
pub mod run;

pub use self::columns::execute_columns;
pub use self::fetch::execute_fetch;
pub use self::init::execute_init;
pub use self::inspect::execute_inspect;
pub use self::run::execute_run;
