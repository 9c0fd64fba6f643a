pub mod gateway;

pub use gateway::HttpRegistrationGateway;
