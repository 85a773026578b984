//! The assertion-raising surface.
//!
//! Everything that owns an active log and a context — a [`TestCase`] or a
//! retry [`Attempt`] — exposes the same fixed set of operations through this
//! trait. Each method evaluates one check, records the resulting fact in
//! the active log, and returns the fact's own state so checks can be
//! chained in a single conditional.
//!
//! [`TestCase`]: crate::case::TestCase
//! [`Attempt`]: crate::retry::Attempt

use std::any::Any;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::assertion::{Assertion, TypeToken};
use crate::context::Context;
use crate::log::Log;

/// Raises assertions into an active log, attributed to a fixed context.
pub trait Record {
    /// The log assertions accumulate in.
    fn active_log(&mut self) -> &mut Log;

    /// The attribution context for failures.
    fn context(&self) -> &Context;

    /// Are the expected and actual values equal?
    fn are_equal<T: PartialEq + Debug>(&mut self, expected: &T, actual: &T) -> bool {
        let assertion = Assertion::are_equal(expected, actual, self.context());
        self.active_log().add(assertion)
    }

    /// Are the unexpected and actual values unequal?
    fn are_not_equal<T: PartialEq + Debug>(&mut self, unexpected: &T, actual: &T) -> bool {
        let assertion = Assertion::are_not_equal(unexpected, actual, self.context());
        self.active_log().add(assertion)
    }

    /// Is the condition true?
    fn is_true(&mut self, condition: bool) -> bool {
        let assertion = Assertion::is_true(condition, self.context());
        self.active_log().add(assertion)
    }

    /// Is the condition false?
    fn is_false(&mut self, condition: bool) -> bool {
        let assertion = Assertion::is_false(condition, self.context());
        self.active_log().add(assertion)
    }

    /// Is the value absent?
    fn is_none<T: Debug>(&mut self, value: &Option<T>) -> bool {
        let assertion = Assertion::is_none(value, self.context());
        self.active_log().add(assertion)
    }

    /// Is the value present?
    fn is_some<T: Debug>(&mut self, value: &Option<T>) -> bool {
        let assertion = Assertion::is_some(value, self.context());
        self.active_log().add(assertion)
    }

    /// Is the left hand side greater than the right hand side?
    fn is_greater_than<T: PartialOrd + Debug>(&mut self, lhs: &T, rhs: &T) -> bool {
        let assertion = Assertion::is_greater_than(lhs, rhs, self.context());
        self.active_log().add(assertion)
    }

    /// Is the left hand side greater than or equal to the right hand side?
    fn is_greater_than_or_equal_to<T: PartialOrd + Debug>(&mut self, lhs: &T, rhs: &T) -> bool {
        let assertion = Assertion::is_greater_than_or_equal_to(lhs, rhs, self.context());
        self.active_log().add(assertion)
    }

    /// Is the left hand side less than the right hand side?
    fn is_less_than<T: PartialOrd + Debug>(&mut self, lhs: &T, rhs: &T) -> bool {
        let assertion = Assertion::is_less_than(lhs, rhs, self.context());
        self.active_log().add(assertion)
    }

    /// Is the left hand side less than or equal to the right hand side?
    fn is_less_than_or_equal_to<T: PartialOrd + Debug>(&mut self, lhs: &T, rhs: &T) -> bool {
        let assertion = Assertion::is_less_than_or_equal_to(lhs, rhs, self.context());
        self.active_log().add(assertion)
    }

    /// Does the sequence contain the element?
    fn contains<T: PartialEq + Debug>(
        &mut self,
        elements: impl IntoIterator<Item = T>,
        element: &T,
    ) -> bool {
        let assertion = Assertion::contains(elements, element, self.context());
        self.active_log().add(assertion)
    }

    /// Does the sequence not contain the element?
    fn does_not_contain<T: PartialEq + Debug>(
        &mut self,
        elements: impl IntoIterator<Item = T>,
        element: &T,
    ) -> bool {
        let assertion = Assertion::does_not_contain(elements, element, self.context());
        self.active_log().add(assertion)
    }

    /// Are the two sequences element-wise equal, in order?
    fn sequence_equal<T: PartialEq>(
        &mut self,
        expected: impl IntoIterator<Item = T>,
        actual: impl IntoIterator<Item = T>,
    ) -> bool {
        let assertion = Assertion::sequence_equal(expected, actual, self.context());
        self.active_log().add(assertion)
    }

    /// Is the sequence empty?
    fn is_empty<T>(&mut self, elements: impl IntoIterator<Item = T>) -> bool {
        let assertion = Assertion::is_empty(elements, self.context());
        self.active_log().add(assertion)
    }

    /// Is the sequence not empty?
    fn is_not_empty<T>(&mut self, elements: impl IntoIterator<Item = T>) -> bool {
        let assertion = Assertion::is_not_empty(elements, self.context());
        self.active_log().add(assertion)
    }

    /// Is the expected type assignable to the actual type?
    fn is_assignable_to(&mut self, expected: Option<TypeToken>, actual: Option<TypeToken>) -> bool {
        let assertion = Assertion::is_assignable_to(expected, actual, self.context());
        self.active_log().add(assertion)
    }

    /// Is the value an instance of the given type?
    fn is_instance_of_type<T: Any>(&mut self, value: &T, ty: Option<TypeToken>) -> bool {
        let assertion = Assertion::is_instance_of_type(value, ty, self.context());
        self.active_log().add(assertion)
    }

    /// Look up a key, recording whether it was present, and return the value.
    fn try_get_value<'m, K, V>(&mut self, map: &'m HashMap<K, V>, key: &K) -> Option<&'m V>
    where
        K: Eq + Hash,
    {
        let value = map.get(key);
        let assertion = Assertion::is_true(value.is_some(), self.context());
        self.active_log().add(assertion);
        value
    }

    /// Run the action and record whether it raised the expected error kind.
    ///
    /// The expected kind is named explicitly:
    /// `case.throws::<std::num::ParseIntError, _>(|| ...)`.
    fn throws<E, F>(&mut self, action: F) -> bool
    where
        E: Display + Debug + Send + Sync + 'static,
        F: FnOnce() -> anyhow::Result<()>,
    {
        let assertion = Assertion::throws::<E>(action(), self.context());
        self.active_log().add(assertion)
    }
}
