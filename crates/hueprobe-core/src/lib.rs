pub mod config;
pub mod consts;
pub mod decode;
pub mod error;
pub mod pixel;
pub mod provider;
pub mod sampler;
pub mod session;
