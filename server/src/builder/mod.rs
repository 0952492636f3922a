mod builder_registry;
pub use builder_registry::{BuilderRegistry, Demotion};
