//! Base types shared by the pplot crates: colors and geometry.
// pplot is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

pub mod color;
pub mod geom;
