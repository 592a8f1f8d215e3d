pub mod config;
pub mod job_store;
pub mod work_dir;

pub use config::ShopConfig;
pub use job_store::YamlJobStore;
pub use work_dir::WorkDir;
