pub mod dimension;
pub mod property;
pub mod world_type;
