use alloc::vec::Vec;

use plonkish_evaluator::Arguments;
use plonkish_expr::{
    AdviceColumn, Challenge, Expression, FixedColumn, InstanceColumn, Phase, Rotation,
};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// Owned column tables and challenges for a single evaluation domain.
#[derive(Clone, Debug)]
pub struct TestTables<F> {
    pub fixed: Vec<Vec<F>>,
    pub advice: Vec<Vec<F>>,
    pub instance: Vec<Vec<F>>,
    pub challenges: Vec<F>,
}

impl<F> TestTables<F> {
    /// Random tables with `size` rows per column.
    pub fn random<R: Rng>(
        rng: &mut R,
        size: usize,
        num_fixed: usize,
        num_advice: usize,
        num_instance: usize,
        num_challenges: usize,
    ) -> Self
    where
        StandardUniform: Distribution<F>,
    {
        let mut columns = |n: usize| -> Vec<Vec<F>> {
            (0..n)
                .map(|_| (0..size).map(|_| rng.random()).collect())
                .collect()
        };
        let fixed = columns(num_fixed);
        let advice = columns(num_advice);
        let instance = columns(num_instance);
        let challenges = (0..num_challenges).map(|_| rng.random()).collect();
        Self {
            fixed,
            advice,
            instance,
            challenges,
        }
    }

    pub fn arguments(&self) -> Arguments<'_, F> {
        Arguments::new(&self.fixed, &self.advice, &self.instance, &self.challenges)
    }

    /// A random selector-free expression of at most `depth` levels of inner nodes whose queries
    /// all stay within these tables. Rotations range over `-3..=3`.
    pub fn random_expression<R: Rng>(&self, rng: &mut R, depth: usize) -> Expression<F>
    where
        StandardUniform: Distribution<F>,
    {
        if depth == 0 || rng.random_ratio(1, 4) {
            return self.random_leaf(rng);
        }
        match rng.random_range(0..4) {
            0 => -self.random_expression(rng, depth - 1),
            1 => self.random_expression(rng, depth - 1) + self.random_expression(rng, depth - 1),
            2 => self.random_expression(rng, depth - 1) * self.random_expression(rng, depth - 1),
            _ => self.random_expression(rng, depth - 1) * rng.random::<F>(),
        }
    }

    fn random_leaf<R: Rng>(&self, rng: &mut R) -> Expression<F>
    where
        StandardUniform: Distribution<F>,
    {
        let rotation = Rotation::new(rng.random_range(-3..=3));
        match rng.random_range(0..5) {
            0 if !self.fixed.is_empty() => Expression::fixed(
                FixedColumn::new(rng.random_range(0..self.fixed.len())),
                rotation,
            ),
            1 if !self.advice.is_empty() => Expression::advice(
                AdviceColumn::new(
                    rng.random_range(0..self.advice.len()),
                    Phase::new(rng.random_range(0..3)),
                ),
                rotation,
            ),
            2 if !self.instance.is_empty() => Expression::instance(
                InstanceColumn::new(rng.random_range(0..self.instance.len())),
                rotation,
            ),
            3 if !self.challenges.is_empty() => Expression::challenge(Challenge::new(
                rng.random_range(0..self.challenges.len()),
                Phase::new(rng.random_range(0..3)),
            )),
            _ => Expression::constant(rng.random()),
        }
    }
}
