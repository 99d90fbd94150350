use p3_baby_bear::BabyBear;
use p3_field::PrimeCharacteristicRing;
use plonkish_evaluator::{
    Arguments, EvaluationError, Evaluator, SimpleEvaluator, evaluate_rows, evaluate_rows_packed,
};
use plonkish_evaluator_testing::{Gf7, TestTables, assert_backends_agree, evaluate_partitioned};
use plonkish_expr::{
    AdviceColumn, Expression, FIRST_PHASE, FixedColumn, InstanceColumn, Rotation, Selector,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

type F = BabyBear;

/// Witness for a chain of multiplications: `out[i] = lhs[i] * rhs[i]` lands on row `i + 1`.
fn mul_chain_trace(rng: &mut SmallRng, rows: usize) -> TestTables<F> {
    let mut lhs = vec![F::ZERO; rows];
    let mut rhs = vec![F::ZERO; rows];
    let mut s_mul = vec![F::ZERO; rows];
    lhs[0] = rng.random();
    for row in 0..rows - 1 {
        rhs[row] = rng.random();
        s_mul[row] = F::ONE;
        lhs[row + 1] = lhs[row] * rhs[row];
    }
    let last = lhs[rows - 1];
    TestTables {
        fixed: vec![s_mul],
        advice: vec![lhs, rhs],
        instance: vec![vec![last; rows]],
        challenges: vec![],
    }
}

fn mul_gate() -> Expression<F> {
    let advice = |column, rotation| {
        Expression::<F>::advice(AdviceColumn::new(column, FIRST_PHASE), rotation)
    };
    let s_mul = Expression::<F>::fixed(FixedColumn::new(0), Rotation::cur());
    s_mul
        * (advice(0, Rotation::cur()) * advice(1, Rotation::cur())
            - advice(0, Rotation::next()))
}

#[test]
fn satisfied_gate_vanishes_on_every_row() {
    let mut rng = SmallRng::seed_from_u64(1);
    let trace = mul_chain_trace(&mut rng, 32);

    let values = evaluate_rows(&mul_gate(), 32, 1, trace.arguments()).unwrap();
    assert!(values.iter().all(|value| *value == F::ZERO));

    // The last row exposes the final product as a public input.
    let public = Expression::<F>::advice(AdviceColumn::new(0, FIRST_PHASE), Rotation::prev())
        - Expression::instance(InstanceColumn::new(0), Rotation::prev());
    let values = evaluate_rows(&public, 32, 1, trace.arguments()).unwrap();
    assert_eq!(values[0], F::ZERO);
}

#[test]
fn tampered_witness_is_detected_on_its_row() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut trace = mul_chain_trace(&mut rng, 16);
    trace.advice[0][9] += F::ONE;

    let values = evaluate_rows_packed(&mul_gate(), 16, 1, trace.arguments()).unwrap();
    let failing: Vec<_> = (0..16).filter(|&row| values[row] != F::ZERO).collect();
    // Row 8 computes the tampered cell, row 9 consumes it.
    assert_eq!(failing, [8, 9]);
}

#[test]
fn random_expressions_agree_on_extended_domains() {
    let mut rng = SmallRng::seed_from_u64(3);
    for (size, rot_scale) in [(16, 1), (64, 2), (128, 8)] {
        let tables = TestTables::<F>::random(&mut rng, size, 2, 3, 1, 2);
        for _ in 0..20 {
            let expr = tables.random_expression(&mut rng, 6);
            assert_backends_agree(&expr, size, rot_scale, tables.arguments());
        }
    }
}

#[test]
fn disjoint_evaluators_run_in_parallel() {
    let mut rng = SmallRng::seed_from_u64(4);
    let tables = TestTables::<F>::random(&mut rng, 256, 2, 2, 1, 1);

    for _ in 0..10 {
        let expr = tables.random_expression(&mut rng, 5);
        let sequential = evaluate_rows(&expr, 256, 1, tables.arguments());
        assert_eq!(
            evaluate_partitioned(&expr, 256, 1, tables.arguments(), 8),
            sequential
        );
    }
}

#[test]
fn evaluators_over_disjoint_ranges_share_tables_across_threads() {
    let mut rng = SmallRng::seed_from_u64(5);
    let tables = TestTables::<Gf7>::random(&mut rng, 40, 1, 1, 0, 0);
    let args = tables.arguments();
    let expr = Expression::<Gf7>::fixed(FixedColumn::new(0), Rotation::next())
        + Expression::advice(AdviceColumn::new(0, FIRST_PHASE), Rotation::prev());

    let halves: Vec<Vec<Gf7>> = std::thread::scope(|scope| {
        let handles: Vec<_> = [0, 20]
            .into_iter()
            .map(|start| {
                let expr = &expr;
                scope.spawn(move || {
                    let mut evaluator = SimpleEvaluator::new(start, 40, 1, args);
                    (0..20)
                        .map(|_| evaluator.evaluate(expr).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let expected = evaluate_rows(&expr, 40, 1, args).unwrap();
    assert_eq!(halves.concat(), expected);
}

#[test]
fn first_failure_stops_the_run() {
    let fixed = vec![vec![Gf7::new(1); 4]];
    let args = Arguments::new(&fixed, &[], &[], &[]);
    let expr = Expression::<Gf7>::fixed(FixedColumn::new(0), Rotation::cur())
        * Expression::selector(Selector::complex(0));

    let mut evaluator = SimpleEvaluator::new(0, 4, 1, args);
    assert_eq!(
        evaluator.evaluate(&expr),
        Err(EvaluationError::IllegalSelector(Selector::complex(0)))
    );
    assert_eq!(
        evaluate_rows(&expr, 4, 1, args),
        Err(EvaluationError::IllegalSelector(Selector::complex(0)))
    );
}
