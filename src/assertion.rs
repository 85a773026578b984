//! The assertion value model: one evaluated check as an immutable fact.
//!
//! Every operation evaluates its condition eagerly, builds the
//! human-readable message from the operands' rendered forms, and — only on
//! failure — asks the supplied [`Context`] for the originating stack frame.
//! Passed assertions never pay for a stack capture.
//!
//! Message templates are deliberate: a passed comparison reads
//! "Expected X and got Y." while a failed one reads "Expected X but got Y."
//! The conjunction word is the one-word polarity signal.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

use crate::context::{Context, Location};

/// Rendered in place of a location when no stack frame matched the context.
const UNKNOWN_LOCATION: &str = "unknown: line ?";

/// A statement of fact: did one check pass or fail.
#[derive(Debug, Clone)]
pub struct Assertion {
    passed: bool,
    name: &'static str,
    message: String,
    location: Option<Location>,
}

impl Assertion {
    /// A passed assertion never computes a location. A failed one captures
    /// the stack immediately — the frames are only valid while the raising
    /// call chain is still live.
    fn new(passed: bool, name: &'static str, message: String, context: &Context) -> Self {
        let location = if passed { None } else { context.locate() };
        Self {
            passed,
            name,
            message,
            location,
        }
    }

    /// The outcome of the check.
    pub fn is_passing(&self) -> bool {
        self.passed
    }

    /// The logical operation name, e.g. `"are_equal"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The outcome-specific explanation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attributed call site. Always `None` for passed assertions; `None`
    /// for failed ones only when no stack frame matched the context.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// The call site rendered for display, with a placeholder when no frame
    /// matched.
    pub fn location_display(&self) -> String {
        match &self.location {
            Some(location) => location.to_string(),
            None => UNKNOWN_LOCATION.to_string(),
        }
    }

    /// Are the expected and actual values equal?
    pub fn are_equal<T>(expected: &T, actual: &T, context: &Context) -> Self
    where
        T: PartialEq + fmt::Debug,
    {
        equality("are_equal", render(expected), render(actual), expected == actual, context)
    }

    /// Are the unexpected and actual values unequal?
    pub fn are_not_equal<T>(unexpected: &T, actual: &T, context: &Context) -> Self
    where
        T: PartialEq + fmt::Debug,
    {
        inequality("are_not_equal", render(unexpected), render(actual), unexpected != actual, context)
    }

    /// Is the condition true? Defined in terms of equality against `true`,
    /// reusing its message template.
    pub fn is_true(condition: bool, context: &Context) -> Self {
        equality("is_true", render(&true), render(&condition), condition, context)
    }

    /// Is the condition false?
    pub fn is_false(condition: bool, context: &Context) -> Self {
        equality("is_false", render(&false), render(&condition), !condition, context)
    }

    /// Is the value absent? `None` renders literally as "null".
    pub fn is_none<T: fmt::Debug>(value: &Option<T>, context: &Context) -> Self {
        equality("is_none", "null".to_string(), render_option(value), value.is_none(), context)
    }

    /// Is the value present?
    pub fn is_some<T: fmt::Debug>(value: &Option<T>, context: &Context) -> Self {
        inequality("is_some", "null".to_string(), render_option(value), value.is_some(), context)
    }

    /// Is the left hand side greater than the right hand side? Incomparable
    /// operands (e.g. NaN) fail.
    pub fn is_greater_than<T>(lhs: &T, rhs: &T, context: &Context) -> Self
    where
        T: PartialOrd + fmt::Debug,
    {
        comparison(
            "is_greater_than",
            lhs,
            rhs,
            "greater than",
            "not greater than",
            matches!(lhs.partial_cmp(rhs), Some(Ordering::Greater)),
            context,
        )
    }

    /// Is the left hand side greater than or equal to the right hand side?
    pub fn is_greater_than_or_equal_to<T>(lhs: &T, rhs: &T, context: &Context) -> Self
    where
        T: PartialOrd + fmt::Debug,
    {
        comparison(
            "is_greater_than_or_equal_to",
            lhs,
            rhs,
            "greater than or equal to",
            "not greater than nor equal to",
            matches!(lhs.partial_cmp(rhs), Some(Ordering::Greater | Ordering::Equal)),
            context,
        )
    }

    /// Is the left hand side less than the right hand side?
    pub fn is_less_than<T>(lhs: &T, rhs: &T, context: &Context) -> Self
    where
        T: PartialOrd + fmt::Debug,
    {
        comparison(
            "is_less_than",
            lhs,
            rhs,
            "less than",
            "not less than",
            matches!(lhs.partial_cmp(rhs), Some(Ordering::Less)),
            context,
        )
    }

    /// Is the left hand side less than or equal to the right hand side?
    pub fn is_less_than_or_equal_to<T>(lhs: &T, rhs: &T, context: &Context) -> Self
    where
        T: PartialOrd + fmt::Debug,
    {
        comparison(
            "is_less_than_or_equal_to",
            lhs,
            rhs,
            "less than or equal to",
            "not less than nor equal to",
            matches!(lhs.partial_cmp(rhs), Some(Ordering::Less | Ordering::Equal)),
            context,
        )
    }

    /// Does the sequence contain the element?
    pub fn contains<T, I>(elements: I, element: &T, context: &Context) -> Self
    where
        T: PartialEq + fmt::Debug,
        I: IntoIterator<Item = T>,
    {
        let found = elements.into_iter().any(|candidate| &candidate == element);
        if found {
            Self::new(true, "contains", format!("{} was found.", render(element)), context)
        } else {
            Self::new(false, "contains", format!("{} was not found.", render(element)), context)
        }
    }

    /// Does the sequence not contain the element?
    pub fn does_not_contain<T, I>(elements: I, element: &T, context: &Context) -> Self
    where
        T: PartialEq + fmt::Debug,
        I: IntoIterator<Item = T>,
    {
        let found = elements.into_iter().any(|candidate| &candidate == element);
        if found {
            Self::new(false, "does_not_contain", format!("{} was found.", render(element)), context)
        } else {
            Self::new(true, "does_not_contain", format!("{} was not found.", render(element)), context)
        }
    }

    /// Are the two sequences element-wise equal, in order? Empty equals
    /// empty.
    pub fn sequence_equal<T, I, J>(expected: I, actual: J, context: &Context) -> Self
    where
        T: PartialEq,
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = T>,
    {
        if expected.into_iter().eq(actual) {
            Self::new(true, "sequence_equal", "The two sequences are equal.".to_string(), context)
        } else {
            Self::new(false, "sequence_equal", "The two sequences are not equal.".to_string(), context)
        }
    }

    /// Is the sequence empty? Consumes at most one element, so a one-shot
    /// iterator is safe to pass.
    pub fn is_empty<T, I>(elements: I, context: &Context) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        if elements.into_iter().next().is_none() {
            Self::new(true, "is_empty", "Collection is empty.".to_string(), context)
        } else {
            Self::new(false, "is_empty", "Collection is not empty.".to_string(), context)
        }
    }

    /// Is the sequence not empty? Consumes at most one element.
    pub fn is_not_empty<T, I>(elements: I, context: &Context) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        if elements.into_iter().next().is_some() {
            Self::new(true, "is_not_empty", "Collection is not empty.".to_string(), context)
        } else {
            Self::new(false, "is_not_empty", "Collection is empty.".to_string(), context)
        }
    }

    /// Is the expected type assignable to the actual type? A missing token
    /// on either side fails the assertion, never panics.
    pub fn is_assignable_to(
        expected: Option<TypeToken>,
        actual: Option<TypeToken>,
        context: &Context,
    ) -> Self {
        let expected_name = expected.map_or_else(|| "null".to_string(), |t| t.name().to_string());
        let actual_name = actual.map_or_else(|| "null".to_string(), |t| t.name().to_string());
        let assignable = match (expected, actual) {
            (Some(expected), Some(actual)) => actual.is_assignable_from(expected),
            _ => false,
        };
        equality("is_assignable_to", expected_name, actual_name, assignable, context)
    }

    /// Is the value an instance of the given type? A missing token fails the
    /// assertion.
    pub fn is_instance_of_type<T: Any>(value: &T, ty: Option<TypeToken>, context: &Context) -> Self {
        let actual = TypeToken::for_value(value);
        let (expected_name, matched) = match ty {
            Some(ty) => (ty.name().to_string(), ty.is_assignable_from(actual)),
            None => ("null".to_string(), false),
        };
        equality("is_instance_of_type", expected_name, actual.name().to_string(), matched, context)
    }

    /// Did the action raise the expected error kind?
    ///
    /// Completing without an error fails against "null"; raising compares
    /// the error's exact concrete type against `E` via downcast — not an
    /// is-a check. On a kind mismatch the message carries the raised error's
    /// own rendering.
    pub fn throws<E>(outcome: anyhow::Result<()>, context: &Context) -> Self
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        let expected = std::any::type_name::<E>().to_string();
        match outcome {
            Ok(()) => equality("throws", expected, "null".to_string(), false, context),
            Err(error) => {
                let matched = error.downcast_ref::<E>().is_some();
                let actual = if matched { expected.clone() } else { format!("{error}") };
                equality("throws", expected, actual, matched, context)
            }
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, " + {} passed. {}", self.name, self.message)
        } else {
            write!(
                f,
                " - {} failed: {} {}",
                self.name,
                self.message,
                self.location_display()
            )
        }
    }
}

/// A reflective type token: the runtime identity and name of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// The token for a statically known type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The token for a value's type.
    pub fn for_value<T: Any>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Can a value of `source` be assigned where `self` is expected?
    /// Rust's nominal type system has no subtyping between concrete types,
    /// so assignability is identity.
    pub fn is_assignable_from(&self, source: TypeToken) -> bool {
        self.id == source.id
    }
}

fn equality(
    name: &'static str,
    expected: String,
    actual: String,
    equal: bool,
    context: &Context,
) -> Assertion {
    if equal {
        Assertion::new(true, name, format!("Expected {expected} and got {actual}."), context)
    } else {
        Assertion::new(false, name, format!("Expected {expected} but got {actual}."), context)
    }
}

fn inequality(
    name: &'static str,
    unexpected: String,
    actual: String,
    unequal: bool,
    context: &Context,
) -> Assertion {
    if unequal {
        Assertion::new(true, name, format!("Did not expect {unexpected} and got {actual}."), context)
    } else {
        Assertion::new(false, name, format!("Did not expect {unexpected} but got {actual}."), context)
    }
}

fn comparison<T: fmt::Debug>(
    name: &'static str,
    lhs: &T,
    rhs: &T,
    relation: &str,
    negated: &str,
    holds: bool,
    context: &Context,
) -> Assertion {
    if holds {
        Assertion::new(true, name, format!("{} is {} {}", render(lhs), relation, render(rhs)), context)
    } else {
        Assertion::new(false, name, format!("{} is {} {}", render(lhs), negated, render(rhs)), context)
    }
}

/// Render an operand for a message. Debug form keeps strings quoted and
/// collections readable.
fn render<T: fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Null-safe rendering for optional operands: `None` is literally "null".
fn render_option<T: fmt::Debug>(value: &Option<T>) -> String {
    match value {
        Some(inner) => render(inner),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // No stack frame belongs to this module, so failed assertions degrade
    // to the placeholder location.
    fn context() -> Context {
        Context::new("no::such::module").unwrap()
    }

    #[test]
    fn test_are_equal_messages() {
        let ctx = context();

        let passed = Assertion::are_equal(&1, &1, &ctx);
        assert!(passed.is_passing());
        assert_eq!(passed.message(), "Expected 1 and got 1.");

        let failed = Assertion::are_equal(&1, &2, &ctx);
        assert!(!failed.is_passing());
        assert_eq!(failed.message(), "Expected 1 but got 2.");
    }

    #[test]
    fn test_are_not_equal_messages() {
        let ctx = context();

        let passed = Assertion::are_not_equal(&1, &2, &ctx);
        assert!(passed.is_passing());
        assert_eq!(passed.message(), "Did not expect 1 and got 2.");

        let failed = Assertion::are_not_equal(&1, &1, &ctx);
        assert!(!failed.is_passing());
        assert_eq!(failed.message(), "Did not expect 1 but got 1.");
    }

    #[test]
    fn test_is_true_reuses_equality_template() {
        let ctx = context();

        let failed = Assertion::is_true(false, &ctx);
        assert_eq!(failed.message(), "Expected true but got false.");
        assert_eq!(failed.name(), "is_true");

        assert!(Assertion::is_false(false, &ctx).is_passing());
        assert_eq!(
            Assertion::is_false(true, &ctx).message(),
            "Expected false but got true."
        );
    }

    #[test]
    fn test_option_checks_render_null() {
        let ctx = context();

        let passed = Assertion::is_none(&None::<i32>, &ctx);
        assert!(passed.is_passing());
        assert_eq!(passed.message(), "Expected null and got null.");

        let failed = Assertion::is_none(&Some(5), &ctx);
        assert_eq!(failed.message(), "Expected null but got 5.");

        let failed = Assertion::is_some(&None::<i32>, &ctx);
        assert_eq!(failed.message(), "Did not expect null but got null.");
        assert!(Assertion::is_some(&Some(5), &ctx).is_passing());
    }

    #[test]
    fn test_ordering_messages_state_both_phrasings() {
        let ctx = context();

        let passed = Assertion::is_greater_than(&3, &2, &ctx);
        assert_eq!(passed.message(), "3 is greater than 2");

        let failed = Assertion::is_greater_than(&2, &3, &ctx);
        assert_eq!(failed.message(), "2 is not greater than 3");

        let failed = Assertion::is_greater_than_or_equal_to(&2, &3, &ctx);
        assert_eq!(failed.message(), "2 is not greater than nor equal to 3");

        assert!(Assertion::is_less_than(&2, &3, &ctx).is_passing());
        assert!(Assertion::is_less_than_or_equal_to(&3, &3, &ctx).is_passing());
    }

    #[test]
    fn test_incomparable_operands_fail() {
        let ctx = context();
        assert!(!Assertion::is_greater_than(&f64::NAN, &1.0, &ctx).is_passing());
        assert!(!Assertion::is_less_than_or_equal_to(&f64::NAN, &f64::NAN, &ctx).is_passing());
    }

    #[test]
    fn test_contains() {
        let ctx = context();
        let elements = vec![1, 2, 3];

        let passed = Assertion::contains(elements.clone(), &2, &ctx);
        assert!(passed.is_passing());
        assert_eq!(passed.message(), "2 was found.");

        let failed = Assertion::contains(elements.clone(), &4, &ctx);
        assert_eq!(failed.message(), "4 was not found.");

        assert!(Assertion::does_not_contain(elements.clone(), &4, &ctx).is_passing());
        assert!(!Assertion::does_not_contain(elements, &2, &ctx).is_passing());
    }

    #[test]
    fn test_sequence_equal() {
        let ctx = context();

        assert!(Assertion::sequence_equal(vec![1, 2, 3], vec![1, 2, 3], &ctx).is_passing());
        assert!(Assertion::sequence_equal(Vec::<i32>::new(), Vec::new(), &ctx).is_passing());

        let failed = Assertion::sequence_equal("test".chars(), "tes".chars(), &ctx);
        assert!(!failed.is_passing());
        assert_eq!(failed.message(), "The two sequences are not equal.");

        // Same elements, different order.
        assert!(!Assertion::sequence_equal(vec![1, 2], vec![2, 1], &ctx).is_passing());
    }

    #[test]
    fn test_emptiness_is_single_pass() {
        let ctx = context();
        let polls = std::cell::Cell::new(0);
        let one_shot = std::iter::from_fn(|| {
            polls.set(polls.get() + 1);
            Some(1)
        });

        assert!(Assertion::is_not_empty(one_shot, &ctx).is_passing());
        assert_eq!(polls.get(), 1);

        assert!(Assertion::is_empty(std::iter::empty::<i32>(), &ctx).is_passing());
        assert!(!Assertion::is_empty(vec![1], &ctx).is_passing());
    }

    #[test]
    fn test_type_assertions() {
        let ctx = context();

        let same = Assertion::is_assignable_to(
            Some(TypeToken::of::<Vec<i32>>()),
            Some(TypeToken::of::<Vec<i32>>()),
            &ctx,
        );
        assert!(same.is_passing());

        let different = Assertion::is_assignable_to(
            Some(TypeToken::of::<Vec<i32>>()),
            Some(TypeToken::of::<i32>()),
            &ctx,
        );
        assert!(!different.is_passing());

        let missing = Assertion::is_assignable_to(None, Some(TypeToken::of::<i32>()), &ctx);
        assert!(!missing.is_passing());
        assert!(missing.message().starts_with("Expected null"));
    }

    #[test]
    fn test_is_instance_of_type() {
        let ctx = context();
        let value = vec![1, 2, 3];

        assert!(Assertion::is_instance_of_type(&value, Some(TypeToken::of::<Vec<i32>>()), &ctx)
            .is_passing());
        assert!(!Assertion::is_instance_of_type(&value, Some(TypeToken::of::<i32>()), &ctx)
            .is_passing());
        assert!(!Assertion::is_instance_of_type(&value, None, &ctx).is_passing());
    }

    #[test]
    fn test_throws() {
        let ctx = context();

        let not_raised = Assertion::throws::<std::num::ParseIntError>(Ok(()), &ctx);
        assert!(!not_raised.is_passing());
        assert!(not_raised.message().contains("but got null"));

        let raised_expected = Assertion::throws::<std::num::ParseIntError>(
            Err("x".parse::<i32>().unwrap_err().into()),
            &ctx,
        );
        assert!(raised_expected.is_passing());

        let raised_other = Assertion::throws::<std::num::ParseIntError>(
            Err(anyhow::anyhow!("connection refused")),
            &ctx,
        );
        assert!(!raised_other.is_passing());
        assert!(raised_other.message().contains("ParseIntError"));
        assert!(raised_other.message().contains("connection refused"));
    }

    #[test]
    fn test_passed_assertion_has_no_location() {
        let assertion = Assertion::are_equal(&1, &1, &context());
        assert_eq!(assertion.location(), None);
        assert_eq!(assertion.to_string(), " + are_equal passed. Expected 1 and got 1.");
    }

    #[test]
    fn test_failed_assertion_renders_placeholder_without_match() {
        let assertion = Assertion::are_equal(&1, &2, &context());
        assert_eq!(
            assertion.to_string(),
            " - are_equal failed: Expected 1 but got 2. unknown: line ?"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Equality and inequality are exact duals over arbitrary operands.
        #[test]
        fn equality_duality(a in any::<i32>(), b in any::<i32>()) {
            let ctx = context();
            prop_assert_eq!(Assertion::are_equal(&a, &b, &ctx).is_passing(), a == b);
            prop_assert_eq!(Assertion::are_not_equal(&a, &b, &ctx).is_passing(), a != b);
        }

        /// The derived boolean assertions agree with their operand.
        #[test]
        fn boolean_composition(x in any::<bool>()) {
            let ctx = context();
            prop_assert_eq!(Assertion::is_true(x, &ctx).is_passing(), x);
            prop_assert_eq!(Assertion::is_false(x, &ctx).is_passing(), !x);
        }

        /// Ordering assertions agree with the total order on integers.
        #[test]
        fn ordering_matches_cmp(a in any::<i32>(), b in any::<i32>()) {
            let ctx = context();
            prop_assert_eq!(Assertion::is_greater_than(&a, &b, &ctx).is_passing(), a > b);
            prop_assert_eq!(Assertion::is_greater_than_or_equal_to(&a, &b, &ctx).is_passing(), a >= b);
            prop_assert_eq!(Assertion::is_less_than(&a, &b, &ctx).is_passing(), a < b);
            prop_assert_eq!(Assertion::is_less_than_or_equal_to(&a, &b, &ctx).is_passing(), a <= b);
        }
    }
}
