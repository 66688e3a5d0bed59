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

use crate::error::InvalidAction;

/// A callable unit with a fixed signature that an [`Actuator`](crate::common::Actuator) can trigger.
///
/// `Args` is the tuple of argument types (`()`, `(A,)`, `(A, B)`, ...) and `R` the return
/// type, `()` meaning "no value". Every binder in [`crate::binding`] produces an `Action`,
/// so objects of unrelated types can sit behind one actuator without sharing a base trait.
///
/// Implement it directly when an action needs to report its own staleness.
pub trait Action<Args, R> {
    /// Calls the action with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAction`] when the action can no longer reach the object it forwards to.
    fn call(&mut self, args: Args) -> Result<R, InvalidAction>;
}

impl<Args, R, A> Action<Args, R> for Box<A>
where
    A: Action<Args, R> + ?Sized,
{
    #[inline]
    fn call(&mut self, args: Args) -> Result<R, InvalidAction> {
        (**self).call(args)
    }
}
