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

use std::fmt;
use std::marker::PhantomData;

use crate::error::InvalidAction;
use crate::traits::{Action, Function};

/// A free function or closure used as an action. It never fails.
///
/// Created by [`from_fn`](crate::binding::from_fn).
pub struct FnAction<F, Args, R> {
    function: F,
    _signature: PhantomData<fn(Args) -> R>,
}

impl<F, Args, R> FnAction<F, Args, R> {
    pub(crate) const fn new(function: F) -> Self {
        Self {
            function,
            _signature: PhantomData,
        }
    }
}

impl<F, Args, R> Action<Args, R> for FnAction<F, Args, R>
where
    F: Function<Args, R>,
{
    #[inline]
    fn call(&mut self, args: Args) -> Result<R, InvalidAction> {
        Ok(self.function.call_with(args))
    }
}

impl<F, Args, R> fmt::Debug for FnAction<F, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction").finish_non_exhaustive()
    }
}
