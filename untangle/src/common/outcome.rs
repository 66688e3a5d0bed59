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
use std::mem;

/// The return of one action call, classified for result collection.
///
/// A `()` return is `Unit` and is never stored in an actuator's results. Everything else is a
/// `Value`, zero-sized types such as `struct Ack;` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<R> {
    /// The call produced no value.
    Unit,
    /// The call produced a value.
    Value(R),
}

impl<R> Outcome<R> {
    /// Classifies a return value.
    #[inline]
    pub fn new(value: R) -> Self {
        if mem::size_of::<R>() == 0 && type_name::<R>() == type_name::<()>() {
            Self::Unit
        } else {
            Self::Value(value)
        }
    }

    /// Returns the value, if any.
    #[inline]
    pub fn into_value(self) -> Option<R> {
        match self {
            Self::Unit => None,
            Self::Value(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::marker::PhantomData;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker;

    #[test]
    fn unit_returns_are_not_values() {
        assert_eq!(Outcome::new(()), Outcome::Unit);
        assert_eq!(Outcome::new(()).into_value(), None);
    }

    #[test]
    fn zero_sized_types_other_than_unit_are_values() {
        assert_eq!(Outcome::new(Marker), Outcome::Value(Marker));
        assert_eq!(
            Outcome::new(PhantomData::<u8>).into_value(),
            Some(PhantomData)
        );
    }

    #[test]
    fn sized_returns_are_values() {
        assert_eq!(Outcome::new(7_u8), Outcome::Value(7));
        assert_eq!(Outcome::new(String::from("h")).into_value().as_deref(), Some("h"));
    }
}
