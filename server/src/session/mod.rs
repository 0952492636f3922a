pub(crate) mod session;
pub(crate) mod session_store;

pub use session::*;
pub use session_store::*;
