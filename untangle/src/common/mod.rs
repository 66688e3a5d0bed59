/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! Provides the actuator, its slots and construction helpers, and configuration.
//!
//! # Key Re-exported Components:
//!
//! *   [`Actuator`]: The registry of actions, triggered as a whole or by name.
//! *   [`Slot`]: Caller-owned storage for one action, linked weakly by actuators.
//! *   [`Outcome`]: Classifies action returns for result collection.
//! *   [`connect`], [`connect_named`]: Build a ready-to-use actuator from slots.
//! *   [`config::UntangleConfig`]: Settings loaded from the XDG config directory.

// --- Public Re-exports ---
pub use actuator::{ActionId, Actuator};
pub use connect::{connect, connect_named};
pub use outcome::Outcome;
pub use slot::Slot;

// --- Submodules ---

/// Defines the [`Actuator`] and its registries.
mod actuator;
/// Defines the bulk construction helpers.
mod connect;
mod outcome;
/// Defines [`Slot`] and the shared storage behind it.
mod slot;
/// Defines the configuration system for untangle.
pub mod config;
