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

//! Calling conventions that let plain methods and functions be bound as actions.
//!
//! Arguments travel as a tuple so that one generic `Args` parameter covers every arity.
//! `Circle::rotate`, of type `fn(&Circle, i32)`, is a `Method<Circle, (i32,), ()>`.

/// A callable taking a shared reference to its receiver.
pub trait Method<T: ?Sized, Args, R> {
    /// Calls the method on `target`.
    fn invoke(&self, target: &T, args: Args) -> R;
}

/// A callable taking an exclusive reference to its receiver.
pub trait MethodMut<T: ?Sized, Args, R> {
    /// Calls the method on `target`.
    fn invoke_mut(&self, target: &mut T, args: Args) -> R;
}

/// A receiver-less callable: a free function or a closure.
pub trait Function<Args, R> {
    /// Calls the function.
    fn call_with(&mut self, args: Args) -> R;
}

macro_rules! impl_calling_conventions {
    ($($arg:ident),*) => {
        impl<T, F, R, $($arg,)*> Method<T, ($($arg,)*), R> for F
        where
            T: ?Sized,
            F: Fn(&T, $($arg),*) -> R,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn invoke(&self, target: &T, ($($arg,)*): ($($arg,)*)) -> R {
                self(target, $($arg),*)
            }
        }

        impl<T, F, R, $($arg,)*> MethodMut<T, ($($arg,)*), R> for F
        where
            T: ?Sized,
            F: Fn(&mut T, $($arg),*) -> R,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn invoke_mut(&self, target: &mut T, ($($arg,)*): ($($arg,)*)) -> R {
                self(target, $($arg),*)
            }
        }

        impl<F, R, $($arg,)*> Function<($($arg,)*), R> for F
        where
            F: FnMut($($arg),*) -> R,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn call_with(&mut self, ($($arg,)*): ($($arg,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_calling_conventions!();
impl_calling_conventions!(A1);
impl_calling_conventions!(A1, A2);
impl_calling_conventions!(A1, A2, A3);
impl_calling_conventions!(A1, A2, A3, A4);
impl_calling_conventions!(A1, A2, A3, A4, A5);
impl_calling_conventions!(A1, A2, A3, A4, A5, A6);

#[cfg(test)]
mod tests {
    use super::*;

    struct Gauge(i32);

    impl Gauge {
        fn read(&self) -> i32 {
            self.0
        }

        fn offset(&self, by: i32) -> i32 {
            self.0 + by
        }

        fn set(&mut self, a: i32, b: i32) {
            self.0 = a * b;
        }
    }

    #[test]
    fn method_paths_take_tuple_arguments() {
        let gauge = Gauge(4);
        assert_eq!(Method::invoke(&Gauge::read, &gauge, ()), 4);
        assert_eq!(Method::invoke(&Gauge::offset, &gauge, (3,)), 7);
    }

    #[test]
    fn mutable_methods_unpack_every_argument() {
        let mut gauge = Gauge(0);
        MethodMut::invoke_mut(&Gauge::set, &mut gauge, (6, 7));
        assert_eq!(gauge.0, 42);
    }

    #[test]
    fn closures_are_functions() {
        let mut total = 0;
        let mut add = |x: i32, y: i32| {
            total += x + y;
            total
        };
        assert_eq!(add.call_with((1, 2)), 3);
        assert_eq!(add.call_with((3, 4)), 10);
    }
}
