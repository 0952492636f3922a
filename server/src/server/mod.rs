mod builder_server;
pub use builder_server::BuilderServer;

mod server_config;
pub use server_config::ServerConfig;

mod task_queue;
pub(crate) use task_queue::{ScheduledTask, TaskQueue};
