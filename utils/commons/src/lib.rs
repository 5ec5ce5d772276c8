//! Types shared by the probe node contracts: errors, token type aliases,
//! event tags and single-owner access control.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, ownership::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod errors;
mod ownership;
mod types;
