mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod not_found;
pub use not_found::PageNotFound;
