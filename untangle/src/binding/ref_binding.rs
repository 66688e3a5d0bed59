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
use std::fmt;
use std::marker::PhantomData;

use crate::binding::Forward;
use crate::error::InvalidAction;
use crate::traits::Action;

/// An unchecked binding: an action that forwards to a method of a borrowed object.
///
/// No liveness check happens at call time. The borrow checker guarantees the object
/// outlives the binding (and every slot or actuator holding it), so this variant suits
/// short-lived wiring, such as an object binding its own methods for a local actuator.
///
/// Created by [`bind_ref`](crate::binding::bind_ref) and
/// [`bind_ref_mut`](crate::binding::bind_ref_mut).
pub struct RefBinding<'a, T: ?Sized, F, Args, R> {
    target: &'a T,
    forward: F,
    _signature: PhantomData<fn(Args) -> R>,
}

impl<'a, T: ?Sized, F, Args, R> RefBinding<'a, T, F, Args, R> {
    pub(crate) const fn new(target: &'a T, forward: F) -> Self {
        Self {
            target,
            forward,
            _signature: PhantomData,
        }
    }
}

impl<T, F, Args, R> Action<Args, R> for RefBinding<'_, T, F, Args, R>
where
    T: ?Sized,
    F: Forward<T, Args, R>,
{
    #[inline]
    fn call(&mut self, args: Args) -> Result<R, InvalidAction> {
        self.forward.forward(self.target, args)
    }
}

impl<T: ?Sized, F, Args, R> fmt::Debug for RefBinding<'_, T, F, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefBinding")
            .field("target", &type_name::<T>())
            .finish_non_exhaustive()
    }
}
