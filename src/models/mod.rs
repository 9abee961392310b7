// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for themes and their markers.

pub mod marker;
pub mod theme;
