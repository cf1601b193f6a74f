// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration specs for the triage rule evaluators.
//!
//! These drive the public `triage-core` API end to end through fake
//! collaborators, the way the surrounding bot wires it up.

#[cfg(test)]
mod bot;
