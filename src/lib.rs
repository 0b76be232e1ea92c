//! Parking Charge Engine
//!
//! This crate provides functionality for calculating parking charges from
//! tariffs, subscription plans and reservations, including multi-tier rate
//! optimization, grace periods and overtime penalties.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod models;
pub mod money;
