//! UI Components

mod back_to_top;
mod contact_form;
mod filter_bar;
mod navbar;
mod portfolio_grid;
mod project_modal;
mod toast;

pub use back_to_top::BackToTop;
pub use contact_form::ContactForm;
pub use filter_bar::FilterBar;
pub use navbar::Navbar;
pub use portfolio_grid::PortfolioGrid;
pub use project_modal::ProjectModal;
pub use toast::ToastHost;
