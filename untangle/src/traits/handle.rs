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

use std::ops::Deref;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// A shared-ownership handle that can hand out a weak counterpart.
///
/// Checked bindings accept any `SharedHandle` and keep only its [`WeakHandle`],
/// so binding never extends the target's lifetime.
pub trait SharedHandle {
    /// The pointee.
    type Target: ?Sized;
    /// The non-owning counterpart of this handle.
    type Weak: WeakHandle<Target = Self::Target>;

    /// Creates a weak handle to the same allocation.
    fn downgrade(&self) -> Self::Weak;
}

/// A non-owning handle that resolves to its target only while the target is alive.
pub trait WeakHandle {
    /// The pointee.
    type Target: ?Sized;
    /// The owning handle produced by a successful resolution.
    type Strong: Deref<Target = Self::Target>;

    /// Resolves the handle, or returns `None` once the last owner has been dropped.
    fn upgrade(&self) -> Option<Self::Strong>;
}

impl<T: ?Sized> SharedHandle for Rc<T> {
    type Target = T;
    type Weak = rc::Weak<T>;

    #[inline]
    fn downgrade(&self) -> rc::Weak<T> {
        Rc::downgrade(self)
    }
}

impl<T: ?Sized> WeakHandle for rc::Weak<T> {
    type Target = T;
    type Strong = Rc<T>;

    #[inline]
    fn upgrade(&self) -> Option<Rc<T>> {
        rc::Weak::upgrade(self)
    }
}

impl<T: ?Sized> SharedHandle for Arc<T> {
    type Target = T;
    type Weak = sync::Weak<T>;

    #[inline]
    fn downgrade(&self) -> sync::Weak<T> {
        Arc::downgrade(self)
    }
}

impl<T: ?Sized> WeakHandle for sync::Weak<T> {
    type Target = T;
    type Strong = Arc<T>;

    #[inline]
    fn upgrade(&self) -> Option<Arc<T>> {
        sync::Weak::upgrade(self)
    }
}
