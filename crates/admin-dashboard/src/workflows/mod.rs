pub mod banner;
pub mod employee;
pub mod vendor;
pub mod view;

pub use banner::{Banner, BannerBoard, BannerTone};
pub use view::{Panel, ScreenView};
