pub mod contract;
pub mod login;
pub mod profile;
pub mod recovery_password;
