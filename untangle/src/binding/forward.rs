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

use std::any::type_name;
use std::cell::RefCell;

use crate::error::InvalidAction;
use crate::traits::{Method, MethodMut};

/// Carries a call from a resolved target into the bound method.
///
/// [`Shared`] forwards to `&self` methods; [`Exclusive`] forwards to `&mut self` methods
/// through a `RefCell`, failing with [`InvalidAction::Busy`] instead of panicking when the
/// cell is already borrowed.
pub trait Forward<T: ?Sized, Args, R> {
    /// Calls the bound method on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAction::Busy`] if the target cannot be borrowed as required.
    fn forward(&self, target: &T, args: Args) -> Result<R, InvalidAction>;
}

/// Forwards to a method taking `&self`.
#[derive(Debug, Clone, Copy)]
pub struct Shared<M>(pub(crate) M);

/// Forwards to a method taking `&mut self`, borrowing the target's `RefCell` for the call.
#[derive(Debug, Clone, Copy)]
pub struct Exclusive<M>(pub(crate) M);

impl<T, Args, R, M> Forward<T, Args, R> for Shared<M>
where
    T: ?Sized,
    M: Method<T, Args, R>,
{
    #[inline]
    fn forward(&self, target: &T, args: Args) -> Result<R, InvalidAction> {
        Ok(self.0.invoke(target, args))
    }
}

impl<T, Args, R, M> Forward<RefCell<T>, Args, R> for Exclusive<M>
where
    T: ?Sized,
    M: MethodMut<T, Args, R>,
{
    fn forward(&self, target: &RefCell<T>, args: Args) -> Result<R, InvalidAction> {
        let mut target = target.try_borrow_mut().map_err(|_| InvalidAction::Busy {
            target: type_name::<T>(),
        })?;
        Ok(self.0.invoke_mut(&mut target, args))
    }
}
