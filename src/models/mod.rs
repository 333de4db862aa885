pub mod account;
pub mod droplet;
pub mod droplet_config;
pub mod floating_ip;
pub mod image;
pub mod region;
pub mod size;
pub mod volume;

pub use account::Account;
pub use droplet::Droplet;
pub use droplet_config::{Configuration, DropletConfig};
pub use floating_ip::FloatingIp;
pub use image::Image;
pub use region::{Region, RegionRef};
pub use size::Size;
pub use volume::Volume;
