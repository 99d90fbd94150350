use alloc::boxed::Box;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{
    AdviceColumn, AdviceQuery, Challenge, FixedColumn, FixedQuery, InstanceColumn, InstanceQuery,
    Rotation, Selector,
};

/// A polynomial constraint, represented as a tree over column queries.
///
/// Leaves reference a single value (a constant, a cell of some column, a challenge or a selector)
/// and inner nodes combine their children with ring operations. Every child is owned by exactly
/// one parent, so trees never share nodes and cannot contain cycles.
///
/// Expressions are built once while a constraint system is configured and are read-only
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression<F> {
    /// A constant field element.
    Constant(F),

    /// An uncompiled selector. Evaluators reject it.
    Selector(Selector),

    /// A cell of a fixed column.
    Fixed(FixedQuery),

    /// A cell of an advice column.
    Advice(AdviceQuery),

    /// A cell of an instance column.
    Instance(InstanceQuery),

    /// A verifier challenge.
    Challenge(Challenge),

    /// Negation of a sub-expression.
    Negated(Box<Self>),

    /// Sum of two sub-expressions.
    Sum(Box<Self>, Box<Self>),

    /// Product of two sub-expressions.
    Product(Box<Self>, Box<Self>),

    /// A sub-expression multiplied by a constant.
    Scaled(Box<Self>, F),
}

impl<F> Expression<F> {
    pub const fn constant(value: F) -> Self {
        Self::Constant(value)
    }

    pub const fn selector(selector: Selector) -> Self {
        Self::Selector(selector)
    }

    pub const fn fixed(column: FixedColumn, rotation: Rotation) -> Self {
        Self::Fixed(FixedQuery::new(column, rotation))
    }

    pub const fn advice(column: AdviceColumn, rotation: Rotation) -> Self {
        Self::Advice(AdviceQuery::new(column, rotation))
    }

    pub const fn instance(column: InstanceColumn, rotation: Rotation) -> Self {
        Self::Instance(InstanceQuery::new(column, rotation))
    }

    pub const fn challenge(challenge: Challenge) -> Self {
        Self::Challenge(challenge)
    }

    /// Folds the tree bottom-up, mapping every variant through the matching closure.
    ///
    /// Children of binary nodes are folded left before right.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate<T>(
        &self,
        constant: &impl Fn(&F) -> T,
        selector: &impl Fn(Selector) -> T,
        fixed: &impl Fn(FixedQuery) -> T,
        advice: &impl Fn(AdviceQuery) -> T,
        instance: &impl Fn(InstanceQuery) -> T,
        challenge: &impl Fn(Challenge) -> T,
        negated: &impl Fn(T) -> T,
        sum: &impl Fn(T, T) -> T,
        product: &impl Fn(T, T) -> T,
        scaled: &impl Fn(T, &F) -> T,
    ) -> T {
        let fold = |expr: &Self| {
            expr.evaluate(
                constant, selector, fixed, advice, instance, challenge, negated, sum, product,
                scaled,
            )
        };
        match self {
            Self::Constant(value) => constant(value),
            Self::Selector(s) => selector(*s),
            Self::Fixed(query) => fixed(*query),
            Self::Advice(query) => advice(*query),
            Self::Instance(query) => instance(*query),
            Self::Challenge(c) => challenge(*c),
            Self::Negated(a) => negated(fold(a)),
            Self::Sum(a, b) => {
                let a = fold(a);
                let b = fold(b);
                sum(a, b)
            }
            Self::Product(a, b) => {
                let a = fold(a);
                let b = fold(b);
                product(a, b)
            }
            Self::Scaled(a, scalar) => scaled(fold(a), scalar),
        }
    }

    /// The degree of this expression, counting every column query and selector as degree one.
    pub fn degree(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Challenge(_) => 0,
            Self::Selector(_) | Self::Fixed(_) | Self::Advice(_) | Self::Instance(_) => 1,
            Self::Negated(a) | Self::Scaled(a, _) => a.degree(),
            Self::Sum(a, b) => a.degree().max(b.degree()),
            Self::Product(a, b) => a.degree() + b.degree(),
        }
    }

    /// A rough cost of evaluating this expression, used to pick between equivalent forms.
    pub fn complexity(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Challenge(_) => 0,
            Self::Selector(_) | Self::Fixed(_) | Self::Advice(_) | Self::Instance(_) => 1,
            Self::Negated(a) => a.complexity() + 5,
            Self::Sum(a, b) => a.complexity() + b.complexity() + 15,
            Self::Product(a, b) => a.complexity() + b.complexity() + 30,
            Self::Scaled(a, _) => a.complexity() + 30,
        }
    }

    /// Whether a simple selector occurs anywhere in the tree.
    pub fn contains_simple_selector(&self) -> bool {
        self.evaluate(
            &|_| false,
            &|selector| selector.is_simple(),
            &|_| false,
            &|_| false,
            &|_| false,
            &|_| false,
            &|a| a,
            &|a, b| a || b,
            &|a, b| a || b,
            &|a, _| a,
        )
    }

    /// The left-most selector in the tree, if any survived selector compilation.
    pub fn first_selector(&self) -> Option<Selector> {
        self.evaluate(
            &|_| None,
            &Some,
            &|_| None,
            &|_| None,
            &|_| None,
            &|_| None,
            &|a| a,
            &|a, b| a.or(b),
            &|a, b| a.or(b),
            &|a, _| a,
        )
    }
}

impl<F: Clone> Expression<F> {
    pub fn square(self) -> Self {
        self.clone() * self
    }
}

impl<F> Neg for Expression<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::Negated(Box::new(self))
    }
}

impl<F> Add for Expression<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::Sum(Box::new(self), Box::new(rhs))
    }
}

impl<F> Sub for Expression<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::Sum(Box::new(self), Box::new(-rhs))
    }
}

impl<F> Mul for Expression<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::Product(Box::new(self), Box::new(rhs))
    }
}

impl<F> Mul<F> for Expression<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Self::Scaled(Box::new(self), rhs)
    }
}

impl<F> From<Selector> for Expression<F> {
    fn from(selector: Selector) -> Self {
        Self::Selector(selector)
    }
}

impl<F> From<FixedQuery> for Expression<F> {
    fn from(query: FixedQuery) -> Self {
        Self::Fixed(query)
    }
}

impl<F> From<AdviceQuery> for Expression<F> {
    fn from(query: AdviceQuery) -> Self {
        Self::Advice(query)
    }
}

impl<F> From<InstanceQuery> for Expression<F> {
    fn from(query: InstanceQuery) -> Self {
        Self::Instance(query)
    }
}

impl<F> From<Challenge> for Expression<F> {
    fn from(challenge: Challenge) -> Self {
        Self::Challenge(challenge)
    }
}

impl<F: fmt::Display> fmt::Display for Expression<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Selector(selector) => write!(f, "selector[{}]", selector.index),
            Self::Fixed(query) => {
                write!(f, "fixed[{}]@{}", query.column_index(), query.rotation.0)
            }
            Self::Advice(query) if query.phase().value() == 0 => {
                write!(f, "advice[{}]@{}", query.column_index(), query.rotation.0)
            }
            Self::Advice(query) => write!(
                f,
                "advice[{}, phase {}]@{}",
                query.column_index(),
                query.phase().value(),
                query.rotation.0
            ),
            Self::Instance(query) => {
                write!(f, "instance[{}]@{}", query.column_index(), query.rotation.0)
            }
            Self::Challenge(challenge) => write!(f, "challenge[{}]", challenge.index),
            Self::Negated(a) => write!(f, "-{a}"),
            Self::Sum(a, b) => write!(f, "({a} + {b})"),
            Self::Product(a, b) => write!(f, "({a} * {b})"),
            Self::Scaled(a, scalar) => write!(f, "({a} * {scalar})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use p3_baby_bear::BabyBear;
    use p3_field::PrimeCharacteristicRing;

    use super::*;
    use crate::{FIRST_PHASE, SECOND_PHASE};

    type Expr = Expression<BabyBear>;

    fn advice(index: usize, rotation: Rotation) -> Expr {
        Expr::advice(AdviceColumn::new(index, FIRST_PHASE), rotation)
    }

    fn fixed(index: usize) -> Expr {
        Expr::fixed(FixedColumn::new(index), Rotation::cur())
    }

    /// `s_mul * (lhs * rhs - out)`, the multiplication gate of the simple example circuit.
    fn mul_gate() -> Expr {
        let lhs = advice(0, Rotation::cur());
        let rhs = advice(1, Rotation::cur());
        let out = advice(0, Rotation::next());
        Expr::selector(Selector::simple(0)) * (lhs * rhs - out)
    }

    #[test]
    fn operators_build_the_expected_nodes() {
        let a = advice(0, Rotation::cur());
        let b = fixed(1);

        assert!(matches!(-a.clone(), Expression::Negated(x) if *x == a));
        assert!(matches!(
            a.clone() + b.clone(),
            Expression::Sum(x, y) if *x == a && *y == b
        ));
        assert!(matches!(
            a.clone() * b.clone(),
            Expression::Product(x, y) if *x == a && *y == b
        ));
        assert!(matches!(
            a.clone() * BabyBear::TWO,
            Expression::Scaled(x, s) if *x == a && s == BabyBear::TWO
        ));

        // Subtraction is a sum with a negated right operand.
        match a.clone() - b.clone() {
            Expression::Sum(x, y) => {
                assert_eq!(*x, a);
                assert!(matches!(*y, Expression::Negated(ref z) if **z == b));
            }
            other => panic!("expected a sum, got {other:?}"),
        }

        assert!(matches!(
            a.clone().square(),
            Expression::Product(x, y) if *x == a && *y == a
        ));
    }

    #[test]
    fn degree() {
        assert_eq!(Expr::constant(BabyBear::ONE).degree(), 0);
        assert_eq!(Expr::challenge(Challenge::new(0, FIRST_PHASE)).degree(), 0);
        assert_eq!(fixed(0).degree(), 1);
        assert_eq!((-fixed(0)).degree(), 1);
        assert_eq!((fixed(0) + fixed(1) * fixed(2)).degree(), 2);
        assert_eq!((fixed(0) * BabyBear::TWO).degree(), 1);
        assert_eq!(mul_gate().degree(), 3);
    }

    #[test]
    fn complexity() {
        assert_eq!(Expr::constant(BabyBear::ONE).complexity(), 0);
        assert_eq!(fixed(0).complexity(), 1);
        assert_eq!((-fixed(0)).complexity(), 6);
        assert_eq!((fixed(0) + fixed(1)).complexity(), 17);
        assert_eq!((fixed(0) * fixed(1)).complexity(), 32);
        assert_eq!((fixed(0) * BabyBear::TWO).complexity(), 31);
        // 1 + (1 + 1 + 30) + (1 + 5) + 15 + 30
        assert_eq!(mul_gate().complexity(), 84);
    }

    #[test]
    fn selector_detection() {
        assert!(mul_gate().contains_simple_selector());
        assert_eq!(mul_gate().first_selector(), Some(Selector::simple(0)));

        let complex = fixed(0) + Expr::selector(Selector::complex(3)) * fixed(1);
        assert!(!complex.contains_simple_selector());
        assert_eq!(complex.first_selector(), Some(Selector::complex(3)));

        let compiled = fixed(0) * (advice(0, Rotation::cur()) - advice(1, Rotation::next()));
        assert!(!compiled.contains_simple_selector());
        assert_eq!(compiled.first_selector(), None);
    }

    #[test]
    fn fold_visits_left_before_right() {
        let expr = (fixed(0) + fixed(1)) * (fixed(2) + fixed(3));
        let order = core::cell::RefCell::new(alloc::vec::Vec::new());
        expr.evaluate(
            &|_| (),
            &|_| (),
            &|query| order.borrow_mut().push(query.column_index()),
            &|_| (),
            &|_| (),
            &|_| (),
            &|_| (),
            &|_, _| (),
            &|_, _| (),
            &|_, _| (),
        );
        assert_eq!(order.into_inner(), [0, 1, 2, 3]);
    }

    #[test]
    fn display() {
        assert_eq!(
            mul_gate().to_string(),
            "(selector[0] * ((advice[0]@0 * advice[1]@0) + -advice[0]@1))"
        );

        let expr = Expr::instance(InstanceColumn::new(2), Rotation::prev())
            + Expr::advice(AdviceColumn::new(1, SECOND_PHASE), Rotation::cur())
                * BabyBear::new(3)
            + Expr::challenge(Challenge::new(4, SECOND_PHASE));
        assert_eq!(
            expr.to_string(),
            "((instance[2]@-1 + (advice[1, phase 1]@0 * 3)) + challenge[4])"
        );
    }

    #[test]
    fn serde_round_trip() {
        let expr = mul_gate() + Expr::constant(BabyBear::new(7)) * BabyBear::new(11);
        let json = serde_json::to_string(&expr).unwrap();
        let decoded: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, expr);
    }
}
