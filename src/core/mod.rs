//! # Core Application Logic
//!
//! This module contains Drumboy's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Kit (pad bindings)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Audio    │      │   Config   │
//!     │  Adapter   │      │  (rodio)   │      │   (toml)   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all machine state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`kit`]: The nine pad definitions and the key dispatcher
//! - [`config`]: Layered configuration loading and resolution

pub mod action;
pub mod config;
pub mod kit;
pub mod state;
