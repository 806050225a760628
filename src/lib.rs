// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod defaults;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod validate;
