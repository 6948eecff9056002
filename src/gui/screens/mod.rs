pub mod about;
pub mod admin;
pub mod blog;
pub mod contact;
pub mod donate;
pub mod home;
pub mod projects;
