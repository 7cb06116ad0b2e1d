#![allow(clippy::approx_constant)]

#[path = "../test_helpers.rs"]
mod test_helpers;

mod pow;
