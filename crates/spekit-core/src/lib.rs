pub mod config;
pub mod consts;
pub mod error;
pub mod extract;
pub mod frame;
pub mod io;
pub mod normalize;
pub mod quality;
