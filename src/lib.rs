//! # stata-bridge
//!
//! A bridge between an interactive notebook front-end and a long-running
//! Stata subprocess. The crate decides whether a buffer of Stata source is
//! complete enough to execute, splits complete input into dispatchable
//! statements, and relays each statement through a synchronous session
//! capability.
//!
//! The interesting part lives in [`stata::lexing`]: a lossless tokenizer
//! that tracks string, comment, and brace context so that completeness and
//! segmentation decisions never misread a brace inside a string or a
//! continuation marker inside a comment.

#![allow(rustdoc::invalid_html_tags)]

pub mod stata;
