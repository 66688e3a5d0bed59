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

use tracing::trace;

use crate::binding::Forward;
use crate::error::InvalidAction;
use crate::traits::{Action, WeakHandle};

/// A checked binding: an action that forwards to a method of an object it does not own.
///
/// Only a weak handle to the object is kept. Every call resolves it first; once the last
/// owner is gone the call fails with [`InvalidAction::DeadTarget`], which an
/// [`Actuator`](crate::common::Actuator) treats as a signal to drop the entry.
///
/// Created by [`bind`](crate::binding::bind) and [`bind_mut`](crate::binding::bind_mut).
pub struct WeakBinding<W, F, Args, R> {
    target: W,
    forward: F,
    _signature: PhantomData<fn(Args) -> R>,
}

impl<W, F, Args, R> WeakBinding<W, F, Args, R> {
    pub(crate) const fn new(target: W, forward: F) -> Self {
        Self {
            target,
            forward,
            _signature: PhantomData,
        }
    }
}

impl<W: WeakHandle, F, Args, R> WeakBinding<W, F, Args, R> {
    /// Returns `true` while the bound object is still alive.
    ///
    /// Liveness is observed, not altered: the handle is released again immediately.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.target.upgrade().is_some()
    }
}

impl<W, F, Args, R> Action<Args, R> for WeakBinding<W, F, Args, R>
where
    W: WeakHandle,
    F: Forward<W::Target, Args, R>,
{
    fn call(&mut self, args: Args) -> Result<R, InvalidAction> {
        let Some(target) = self.target.upgrade() else {
            trace!(target_type = type_name::<W::Target>(), "Bound object has been dropped");
            return Err(InvalidAction::DeadTarget {
                target: type_name::<W::Target>(),
            });
        };
        self.forward.forward(&*target, args)
    }
}

impl<W: WeakHandle, F, Args, R> fmt::Debug for WeakBinding<W, F, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakBinding")
            .field("target", &type_name::<W::Target>())
            .field("alive", &self.is_alive())
            .finish_non_exhaustive()
    }
}
