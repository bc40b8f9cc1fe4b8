//! Stateless text helpers consumed by the cipher.

pub mod alphabet;
pub mod text;
