// Copyright 2026 The morphoscope authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'format/file.rs' uses mmap to map an SWC file into memory

//! # morphoscope
//!
//! A framework for parsing and analyzing neuron skeletal morphologies in the SWC format.
//! `morphoscope` maintains an in-memory graph of a neuron's reconstruction, converts it
//! losslessly to and from SWC text, and provides topological and geometric analysis:
//! branch detection, branch angles, path and segment lengths, affine transforms, and
//! tree simplification.
//!
//! ## Features
//!
//! - **Strict SWC codec** - All-or-nothing parsing with precise per-line diagnostics,
//!   lossless insertion-order serialization
//! - **Explicit graph model** - An owned node store with parent/children adjacency,
//!   cycle and referential-integrity checks on every edge insertion
//! - **Topology queries** - Branch points, pass-through angles, leaves, roots
//! - **Geometry** - Euclidean distances, unique-path lengths, total cable length,
//!   nearest-sample lookup
//! - **Transforms** - Translation, uniform or per-axis scaling, Euler-angle rotation,
//!   each in borrowing and in-place forms
//! - **Simplification** - Confluent collapsing of pass-through chains down to the
//!   topological skeleton
//!
//! ## Quick Start
//!
//! Add `morphoscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! morphoscope = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use morphoscope::prelude::*;
//!
//! let morphology = parse_swc("1 1 0 0 0 4 -1\n2 3 0 0 5 1 1\n3 3 0 3 9 1 2\n")?;
//! println!("total cable length: {}", morphology.total_length());
//! # Ok::<(), morphoscope::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust,no_run
//! use morphoscope::format;
//!
//! // Load a reconstruction from disk
//! let morphology = format::load("neuron.swc")?;
//!
//! // Topological analysis
//! println!("{} samples, {} branch points", morphology.len(), morphology.branch_points().len());
//!
//! // Normalize its placement, then keep only the skeleton
//! let skeleton = morphology.translated(-10.0, 0.0, 0.0).smoothed();
//! format::save("skeleton.swc", &skeleton)?;
//! # Ok::<(), morphoscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `morphoscope` is organized into two modules:
//!
//! - [`morphology`] - The [`NeuronMorphology`] graph, its queries, transforms, and
//!   simplification
//! - [`format`] - The SWC text codec and file persistence
//!
//! Remote morphology catalogs (such as NeuroMorpho.Org) are deliberately outside this
//! crate: whatever SWC text such a client downloads is consumed through the same
//! [`format::parse_swc`] entry point used for local files.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result) with specific error variants:
//!
//! ```rust
//! use morphoscope::{format::parse_swc, Error};
//!
//! match parse_swc("1 1 zero 0 0 1 -1\n") {
//!     Ok(_) => unreachable!(),
//!     Err(Error::MalformedLine { number, line }) => {
//!         println!("bad record at line {}: {}", number, line);
//!     }
//!     Err(e) => println!("error: {}", e),
//! }
//! ```
//!
//! Parsing is strict by default: malformed records are always reported, never skipped,
//! and a failed parse leaves no partial morphology behind.

pub mod format;
pub mod morphology;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and functions.
pub mod prelude;

/// `morphoscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `morphoscope` Error type
///
/// The main error type for all operations in this crate. Provides detailed error
/// information for SWC parsing, graph construction, and analysis.
pub use error::Error;

/// The in-memory representation of a neuron's skeletal morphology.
///
/// See [`morphology::NeuronMorphology`] for the graph model, topology queries,
/// transforms, and simplification.
pub use morphology::NeuronMorphology;
