#![doc = include_str!("../README.md")]

pub mod arena;
pub mod err;
pub mod escape;
pub mod render;
pub mod segment;

pub use arena::{ChainBuilder, ChainIter, GroupIter, SegmentArena, SegmentId};
pub use err::{RenderError, Result};
pub use render::{RenderFlags, fuse, is_simple, measure, render, render_avt, render_concat};
pub use segment::{QuoteFlags, Segment, TokenKind};
