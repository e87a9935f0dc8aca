//! # Galaxy Browser
//!
//! Search, filter and chart a frozen dataset of completed Factorio galaxy
//! stars.
//!
//! The dataset is a JSON file of parallel sequences (colors, names,
//! completion dates, users, optional detail records). Galaxy Browser zips
//! them into star records, precomputes a lowercase search haystack per star,
//! and serves substring search plus two aggregations via a CLI and a
//! read-only HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌───────────┐   ┌──────────────┐
//! │  Dataset  │──▶│ Assembler │──▶│ Search index │──┐
//! │  (JSON)   │   │  (Star)   │   │  + Stats     │  │
//! └───────────┘   └───────────┘   └──────────────┘  │
//!                                    ┌──────────────┤
//!                                    ▼              ▼
//!                               ┌─────────┐   ┌──────────┐
//!                               │   CLI   │   │   HTTP   │
//!                               │(galaxy) │   │  (JSON)  │
//!                               └─────────┘   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! galaxy info                         # dataset summary
//! galaxy search "speedrun" --hide-empty
//! galaxy get 42                       # full record incl. comment
//! galaxy stats                        # histogram + daily completions
//! galaxy serve                        # start HTTP API
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`dataset`] | Dataset loading and validation |
//! | [`models`] | Core data types |
//! | [`records`] | Record assembly from parallel sequences |
//! | [`format`] | Elapsed time, play time, color and link formatting |
//! | [`index`] | Search index and filter engine |
//! | [`stats`] | Play-time histogram and daily completions |
//! | [`catalog`] | The loaded, indexed collection |
//! | [`server`] | HTTP API |

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod export;
pub mod format;
pub mod get;
pub mod index;
pub mod info;
pub mod logging;
pub mod models;
pub mod records;
pub mod search;
pub mod server;
pub mod stats;
pub mod view;
