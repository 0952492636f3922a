pub(crate) mod builder_events;

pub use builder_events::*;
