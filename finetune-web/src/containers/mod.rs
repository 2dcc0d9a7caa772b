pub mod auth_provider;
pub mod header;
pub mod layout;
