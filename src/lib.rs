//! Travel Type - Travel personality questionnaire
//!
//! This crate scores an 18-question travel questionnaire along the four
//! MBTI-style dimensions, resolves a four-letter type code and pairs it with
//! a travel profile that can be shared as a link.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
