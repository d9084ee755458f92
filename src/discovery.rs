// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

pub mod base;
pub mod files;
pub mod result;
pub mod sniff;
pub mod transifex;
pub mod wildcard;

pub use base::{Discovery, DiscoveryContext, DiscoveryOptions, run_discovery};
pub use result::{DiscoveryMeta, DiscoveryResult, MaskRecord, sort_results};
