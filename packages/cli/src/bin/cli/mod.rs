pub mod battery;
pub mod device;
pub mod overlays;
pub mod raw;
pub mod theme;
pub mod udfps;
pub mod utils;
