use std::sync::LazyLock;

use web_time::Instant;

pub mod config;
pub mod io;
pub mod run;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
