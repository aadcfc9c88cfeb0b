#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

#[macro_use]
mod macros;

mod data;
pub use data::*;

mod directive;
pub use directive::*;

pub mod de;
pub mod error;
pub mod ser;

pub use de::{ParseMode, ParseOptions, Parser};
pub use error::{LineError, LineErrorKind, ParseError};
pub use objtext_common::{ArrayIndex, Real, Shortest};
