// Atomic API modules
pub mod account;
pub mod client;
pub mod droplets;
pub mod floating_ips;
pub mod images;
pub mod pagination;
pub mod provider;
pub mod regions;
pub mod sizes;
pub mod volumes;

// Re-export commonly used items
pub use account::check_account;
pub use client::{set_verbose, DoClient};
pub use pagination::{Page, FIRST_PAGE};
pub use provider::CloudProvider;
