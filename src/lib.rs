// Library for tests to access modules

pub mod config;
pub mod docker_repo;
pub mod ini_repo;
pub mod models;
pub mod routes;
pub mod smart_repo;
pub mod snapshot;
pub mod sysinfo_repo;
pub mod version;
