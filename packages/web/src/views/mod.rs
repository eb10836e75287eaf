mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod protected;
pub use protected::Protected;

mod not_found;
pub use not_found::NotFound;
