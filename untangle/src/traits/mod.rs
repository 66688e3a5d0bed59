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

//! Defines the core traits that make up untangle's calling contract.
//!
//! # Key Traits
//!
//! *   [`Action`]: The single-method capability every actuator entry implements.
//! *   [`Method`], [`MethodMut`], [`Function`]: Calling conventions that let method paths,
//!     free functions and closures be bound with tuple-packed arguments.
//! *   [`SharedHandle`], [`WeakHandle`]: The resolve-or-fail liveness primitive used by
//!     checked bindings, implemented for `Rc` and `Arc`.

// --- Public Re-exports ---
pub use action::Action;
pub use handle::{SharedHandle, WeakHandle};
pub use method::{Function, Method, MethodMut};

// --- Submodules ---

/// Defines the [`Action`] trait.
mod action;
/// Defines the [`SharedHandle`] and [`WeakHandle`] traits.
mod handle;
mod method;
