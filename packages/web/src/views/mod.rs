mod home;
pub use home::Home;

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
