pub mod handler;
pub mod public_ip_handler;
