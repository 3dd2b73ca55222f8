mod landing;
mod login;
mod not_found;
mod profile;
mod register;

pub use landing::Landing;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use profile::ProfilePage;
pub use register::RegisterPage;
