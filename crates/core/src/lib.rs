// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Core foundational types and utilities for the quant-tools workspace.
//!
//! The `quanttools-core` crate is deliberately small. It supplies the building blocks the
//! analysis crate composes its time-series transformations from:
//!
//! - A strongly-typed timestamp ([`UnixNanos`]) used as the row index of every table.
//! - Calendar helpers for producing daily and month-end index sequences.
//! - Floating-point helpers (approximate equality, sample statistics).
//! - Correctness validation functions for configuration values.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod datetime;
pub mod math;
pub mod nanos;

// Re-exports
pub use crate::nanos::UnixNanos;
