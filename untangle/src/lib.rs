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

#![forbid(unsafe_code)]
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Untangle
//!
//! Untangle provides *actuators*: runtime-mutable lists of actions that are triggered
//! together (broadcast) or one at a time by name. An actuator lets objects of unrelated
//! concrete types answer a common call through method bindings instead of a shared trait
//! object, and it heals itself when a bound object goes away.
//!
//! ## Key Concepts
//!
//! - **Actions (`Action`)**: Callables with a fixed signature `(Args, R)`, where `Args` is a
//!   tuple of argument types and `R` the return type.
//! - **Binders (`bind`, `bind_ref`, ...)**: Turn an object and one of its methods into an
//!   action. Checked binders hold a weak handle and fail with `InvalidAction::DeadTarget`
//!   once the object is dropped; unchecked binders borrow the object.
//! - **Slots (`Slot`)**: Caller-owned storage for an action. Actuators link slots weakly, so
//!   clearing or dropping a slot quietly takes it out of every actuator.
//! - **Actuator (`Actuator`)**: An ordered registry and a named registry of actions, with
//!   broadcast and by-name invocation, result collection and automatic pruning of stale
//!   entries.
//! - **Configuration (`UntangleConfig`)**: How failures are reported through `tracing`.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use untangle::prelude::*;
//!
//! #[derive(Default)]
//! struct Triangle { angle: Cell<i32> }
//! #[derive(Default)]
//! struct Circle { angle: Cell<i32> }
//!
//! impl Triangle { fn rotate(&self, by: i32) { self.angle.set(self.angle.get() + by) } }
//! impl Circle { fn rotate(&self, by: i32) { self.angle.set(self.angle.get() + by) } }
//!
//! let triangle = Rc::new(Triangle::default());
//! let circle = Rc::new(Circle::default());
//!
//! let rotate_triangle = Slot::new(bind(&triangle, Triangle::rotate));
//! let rotate_circle = Slot::new(bind(&circle, Circle::rotate));
//!
//! let mut rotate = connect!(rotate_triangle, rotate_circle);
//! rotate.invoke((20,));
//!
//! assert_eq!(triangle.angle.get(), 20);
//! assert_eq!(circle.angle.get(), 20);
//! ```

/// Internal utilities and structures: the actuator, slots and configuration.
pub(crate) mod common;

/// Binders that turn objects and methods into actions.
pub mod binding;

/// Error types.
pub(crate) mod error;

/// Defines core traits used throughout untangle.
pub(crate) mod traits;

/// Configuration loaded from XDG-compliant locations.
pub mod config {
    pub use crate::common::config::{ReportLevel, ReportingConfig, UntangleConfig, CONFIG};
}

/// Builds an [`Actuator`](crate::prelude::Actuator) from slots.
///
/// `connect!(a, b, c)` links the slots into the ordered registry;
/// `connect!("a" => a, "b" => b)` links them into the named registry.
/// Empty slots are left out, and for repeated names the first one wins.
#[macro_export]
macro_rules! connect {
    ($($name:expr => $slot:expr),+ $(,)?) => {
        $crate::prelude::connect_named(&[$(($name, &$slot)),+])
    };
    ($($slot:expr),+ $(,)?) => {
        $crate::prelude::connect(&[$(&$slot),+])
    };
}

/// A prelude module for conveniently importing the most commonly used items.
///
/// # Re-exports
///
/// ## Core Types
/// *   [`crate::common::Actuator`]: The registry of actions.
/// *   [`crate::common::ActionId`]: Token for an action owned by an actuator.
/// *   [`crate::common::Slot`]: Caller-owned storage for one action.
/// *   [`crate::common::Outcome`]: Classification of an action's return value.
/// *   [`crate::error::InvalidAction`]: Why an action could not be carried out.
/// *   [`crate::error::ConfigError`]: Why a configuration file could not be loaded.
///
/// ## Traits
/// *   [`crate::traits::Action`]: The capability every actuator entry implements.
/// *   [`crate::traits::Method`], [`crate::traits::MethodMut`], [`crate::traits::Function`]:
///     Calling conventions for bound methods and plain functions.
/// *   [`crate::traits::SharedHandle`], [`crate::traits::WeakHandle`]: Liveness primitives.
///
/// ## Functions
/// *   [`crate::binding::bind`], [`crate::binding::bind_mut`]: Checked binders.
/// *   [`crate::binding::bind_ref`], [`crate::binding::bind_ref_mut`]: Unchecked binders.
/// *   [`crate::binding::from_fn`]: Free functions and closures as actions.
/// *   [`crate::common::connect`], [`crate::common::connect_named`]: Bulk construction.
pub mod prelude {
    pub use crate::connect;

    pub use crate::binding::{bind, bind_mut, bind_ref, bind_ref_mut, from_fn};
    pub use crate::binding::{Exclusive, FnAction, Forward, RefBinding, Shared, WeakBinding};
    pub use crate::common::config::{ReportLevel, ReportingConfig, UntangleConfig};
    pub use crate::common::{connect, connect_named, ActionId, Actuator, Outcome, Slot};
    pub use crate::error::{ConfigError, InvalidAction};
    pub use crate::traits::{Action, Function, Method, MethodMut, SharedHandle, WeakHandle};
}
