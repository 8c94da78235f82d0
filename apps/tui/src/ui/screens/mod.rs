pub mod filter;
pub mod help;
pub mod home;
pub mod manage;
