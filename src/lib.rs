//! `phasebench` is a small toolkit for validating gp3m2 phase-space output
//! against reference inputs
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use phasebench_format as format;

#[cfg(feature = "phasespace")]
#[cfg_attr(docsrs, doc(cfg(feature = "phasespace")))]
#[doc(inline)]
pub use phasebench_phasespace as phasespace;

#[cfg(feature = "validate")]
#[cfg_attr(docsrs, doc(cfg(feature = "validate")))]
#[doc(inline)]
pub use phasebench_validate as validate;

#[cfg(feature = "bench")]
#[cfg_attr(docsrs, doc(cfg(feature = "bench")))]
#[doc(inline)]
pub use phasebench_bench as bench;
