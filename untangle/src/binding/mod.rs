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

//! Binders: turn an object and one of its methods into an [`Action`](crate::traits::Action).
//!
//! Two ownership variants exist, matching the two ways an object can be reached:
//!
//! *   Checked ([`bind`], [`bind_mut`]): the object lives behind an `Rc` or `Arc`. Only a weak
//!     handle is kept, and each call verifies the object is still alive, failing with
//!     [`InvalidAction::DeadTarget`](crate::error::InvalidAction::DeadTarget) otherwise.
//! *   Unchecked ([`bind_ref`], [`bind_ref_mut`]): the object is borrowed. No runtime check is
//!     made; the borrow checker keeps the object alive for as long as the action exists.
//!
//! [`from_fn`] wraps a free function or closure so it can sit in the same actuator.
//!
//! ```rust
//! use std::rc::Rc;
//! use untangle::prelude::*;
//!
//! struct Circle;
//! impl Circle {
//!     fn area(&self, r: f64) -> f64 { 3.0 * r * r }
//! }
//!
//! let circle = Rc::new(Circle);
//! let area = Slot::new(bind(&circle, Circle::area));
//! assert_eq!(area.call((2.0,)), Ok(12.0));
//! ```

use std::cell::RefCell;

use crate::traits::{Function, Method, MethodMut, SharedHandle};

pub use fn_action::FnAction;
pub use forward::{Exclusive, Forward, Shared};
pub use ref_binding::RefBinding;
pub use weak_binding::WeakBinding;

mod fn_action;
mod forward;
mod ref_binding;
mod weak_binding;

/// Binds a `&self` method of a shared object, checking liveness on every call.
///
/// `target` may be an `Rc<T>` or an `Arc<T>`; the binding keeps only its weak counterpart.
pub fn bind<P, M, Args, R>(target: &P, method: M) -> WeakBinding<P::Weak, Shared<M>, Args, R>
where
    P: SharedHandle,
    M: Method<P::Target, Args, R>,
{
    WeakBinding::new(SharedHandle::downgrade(target), Shared(method))
}

/// Binds a `&mut self` method of a shared `RefCell` object, checking liveness on every call.
pub fn bind_mut<P, T, M, Args, R>(
    target: &P,
    method: M,
) -> WeakBinding<P::Weak, Exclusive<M>, Args, R>
where
    P: SharedHandle<Target = RefCell<T>>,
    T: ?Sized,
    M: MethodMut<T, Args, R>,
{
    WeakBinding::new(SharedHandle::downgrade(target), Exclusive(method))
}

/// Binds a `&self` method of a borrowed object. No liveness check is made at call time.
pub fn bind_ref<T, M, Args, R>(target: &T, method: M) -> RefBinding<'_, T, Shared<M>, Args, R>
where
    T: ?Sized,
    M: Method<T, Args, R>,
{
    RefBinding::new(target, Shared(method))
}

/// Binds a `&mut self` method of a borrowed `RefCell` object.
pub fn bind_ref_mut<T, M, Args, R>(
    target: &RefCell<T>,
    method: M,
) -> RefBinding<'_, RefCell<T>, Exclusive<M>, Args, R>
where
    T: ?Sized,
    M: MethodMut<T, Args, R>,
{
    RefBinding::new(target, Exclusive(method))
}

/// Wraps a free function or closure as an action.
pub fn from_fn<F, Args, R>(function: F) -> FnAction<F, Args, R>
where
    F: Function<Args, R>,
{
    FnAction::new(function)
}
