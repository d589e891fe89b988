//! Dashboard tab/filter/sort state and the table view rendered from it

pub mod state;
pub mod view;

pub use state::DashboardState;
pub use view::{capability_counts, category_listing, render};
