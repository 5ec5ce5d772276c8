//! A probe node registry implemented as an NFT smart contract. Token events
//! follow the Concordium Token Standard CIS2.
//!
//! # Description
//! Every token represents one registered probe node and carries the
//! off-chain identifier of that node (its uclid address). Tokens are
//! numbered by a counter starting at 1 and ids are never reused.
//!
//! Anyone can mint a token through the `mint` contract function by attaching
//! exactly the configured minting fee. The token owner can burn it through
//! `burn`. Burnt tokens keep their record, marked inactive, so the registry
//! can still be paged through with `getTokenDataPaginated`.
//!
//! The contract owner collects the minting fees with `withdraw` and manages
//! the fee and the metadata URIs. The metadata URI of every token is the
//! base URI followed by the meta URI.
//!
//! Tokens cannot be transferred.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]

mod constants;
mod contract;
mod events;
mod external;
mod state;
