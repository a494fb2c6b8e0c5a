//! Diary Guide - Guided composition for diary entries
//!
//! A branching selection wizard turns topic and detail picks into a prompt,
//! and a cancellable streaming consumer appends the generated draft to the
//! diary's content field.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
