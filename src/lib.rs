pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod submission_client;
pub mod telemetry;
