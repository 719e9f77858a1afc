// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod context;
mod loader;

pub mod consts;

pub use context::AppContext;
pub use loader::{load_config, SinkConfig, TracerConfig};
