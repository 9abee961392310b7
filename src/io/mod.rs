// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for background images and theme files.

pub mod media;
pub mod serialization;
pub mod store;
