pub mod landing_components;
pub mod profile_components;
pub mod theme_switcher;
pub mod ui_components;

pub use landing_components::{CtaSection, Features, Hero, LandingFooter, Navbar, Testimonials};
pub use profile_components::{
    NotesOverview, ProfileFooter, ProfileHero, ProfileNav, QuickActions, StatCards,
};
pub use theme_switcher::ThemeSwitcher;
pub use ui_components::{ErrorToast, SuccessToast};
