// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! Locate translatable files in a source tree and propose file masks,
//! templates and formats for them.

pub mod api;
pub mod charset;
pub mod cli;
pub mod data;
pub mod discovery;
pub mod finder;
pub mod language;

pub use api::{DiscoverError, DiscoverySettings, backends, discover, discover_in};
pub use discovery::DiscoveryResult;
pub use finder::Finder;
