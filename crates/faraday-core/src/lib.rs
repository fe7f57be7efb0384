//! Faraday Core Types and Definitions
//!
//! This crate provides the foundational types for the Faraday circuit
//! diagram library. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, axis masks, affine transforms and bounds ([`geometry`] module)
//! - **Draw**: Path construction primitives, stroke definitions and terminal
//!   markers ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
