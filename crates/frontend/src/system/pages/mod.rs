pub mod login;
pub mod register;
pub mod splash;
