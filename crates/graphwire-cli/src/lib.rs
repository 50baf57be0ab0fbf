// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! graphwire-cli: the `graphwire` developer tool.
//!
//! `cli` holds the clap surface and command handlers, `config` the
//! persisted preferences and their storage port, and `fs_store` the
//! filesystem adapter behind that port.

pub mod cli;
pub mod config;
pub mod fs_store;
