// Fee Router Math Package

#![no_std]

pub mod constants;
pub mod fee;
pub mod mul_div;

pub use constants::*;

pub use fee::{compute_fee, is_valid_fee_rate, split_fee, FeeSplit};

pub use mul_div::{i128_to_u128_checked, mul_div_floor};
