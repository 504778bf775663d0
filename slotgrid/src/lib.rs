/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! slotgrid – resource-by-time scheduling grid
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── time          – explicit time-of-day formats (parse / strict parse / format)
//! ├── model         – rows, events, ids
//! ├── slots/        – slot label generation
//! ├── placement/    – anchor / span / suppression engine + diagnostics
//! ├── render/       – cell strategies, text + HTML surfaces, click routing
//! └── config/       – YAML schedule files
//! ```

pub mod config;
pub mod model;
pub mod placement;
pub mod render;
pub mod slots;
pub mod time;
