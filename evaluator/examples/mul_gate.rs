use p3_baby_bear::BabyBear;
use p3_field::PrimeCharacteristicRing;
use plonkish_evaluator::{EvaluationError, evaluate_rows, evaluate_rows_packed};
use plonkish_evaluator_testing::TestTables;
use plonkish_expr::{AdviceColumn, Expression, FIRST_PHASE, FixedColumn, Rotation};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const LOG_ROWS: usize = 12;
const ROT_SCALE: i32 = 1;

type F = BabyBear;

fn main() -> Result<(), EvaluationError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let rows = 1 << LOG_ROWS;
    let mut rng = SmallRng::seed_from_u64(0);

    // lhs[i + 1] = lhs[i] * rhs[i] on every row but the last.
    let mut lhs = vec![F::ZERO; rows];
    let mut rhs = vec![F::ZERO; rows];
    let mut s_mul = vec![F::ZERO; rows];
    lhs[0] = rng.random();
    for row in 0..rows - 1 {
        rhs[row] = rng.random();
        s_mul[row] = F::ONE;
        lhs[row + 1] = lhs[row] * rhs[row];
    }
    let mut trace = TestTables {
        fixed: vec![s_mul],
        advice: vec![lhs, rhs],
        instance: vec![],
        challenges: vec![],
    };

    let advice = |column, rotation| {
        Expression::<F>::advice(AdviceColumn::new(column, FIRST_PHASE), rotation)
    };
    let gate = Expression::<F>::fixed(FixedColumn::new(0), Rotation::cur())
        * (advice(0, Rotation::cur()) * advice(1, Rotation::cur()) - advice(0, Rotation::next()));
    info!(
        "gate {gate} has degree {} and complexity {}",
        gate.degree(),
        gate.complexity()
    );

    let values = evaluate_rows(&gate, rows, ROT_SCALE, trace.arguments())?;
    let failing = values.iter().filter(|value| **value != F::ZERO).count();
    info!("honest witness: {failing} of {rows} rows violate the gate");

    trace.advice[0][rows / 2] += F::ONE;
    let values = evaluate_rows_packed(&gate, rows, ROT_SCALE, trace.arguments())?;
    let failing: Vec<_> = (0..rows).filter(|&row| values[row] != F::ZERO).collect();
    info!("tampered witness: rows {failing:?} violate the gate");

    Ok(())
}
