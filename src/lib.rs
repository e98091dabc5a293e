//! pngsweep library.
//!
//! This crate provides the scanning and verification machinery behind the
//! `pngsweep` binary: a recursive sweep over a directory tree that reports
//! every `.png` file failing structural verification.

pub mod commands;
pub mod verify;
