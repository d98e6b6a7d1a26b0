#[macro_use]
extern crate tracing;

pub mod cascade;
pub mod cli;
pub mod download;
pub mod logging;
pub mod util;

pub use cascade::{
    DEFAULT_CASCADE_PATH, HAARCASCADE_URL, ensure_asset, ensure_default_haarcascade,
    ensure_haarcascade,
};
pub use util::ensure_dir;
