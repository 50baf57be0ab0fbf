// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CLI entry point for graphwire.

use anyhow::Result;
use graphwire_cli::cli::entrypoint;

fn main() -> Result<()> {
    entrypoint()
}
