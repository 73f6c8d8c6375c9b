use climdex_grid::{AnnualGrid, DAYS_PER_YEAR, GridError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_series(n_years: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_years * DAYS_PER_YEAR)
        .map(|_| {
            if rng.random_bool(0.05) {
                f64::NAN
            } else {
                rng.random_range(-20.0..40.0)
            }
        })
        .collect()
}

#[test]
fn rows_tile_the_series() {
    let series = random_series(7, 11);
    let grid = AnnualGrid::new(&series).unwrap();
    assert_eq!(grid.n_years(), 7);
    assert_eq!(grid.years().len(), 7);

    let rejoined: Vec<f64> = grid.years().flatten().copied().collect();
    assert_eq!(rejoined.len(), series.len());
    for (a, b) in rejoined.iter().zip(&series) {
        assert!(a.to_bits() == b.to_bits());
    }
    assert!(grid.year(7).is_none());
}

#[test]
fn parallel_map_keeps_year_order() {
    let series = random_series(40, 12);
    let grid = AnnualGrid::new(&series).unwrap();
    let count = |_: usize, row: &[f64]| -> Result<usize, GridError> {
        Ok(row.iter().filter(|v| v.is_nan()).count())
    };
    assert_eq!(
        grid.try_map_years(count).unwrap(),
        grid.par_try_map_years(count).unwrap()
    );

    let years = grid.par_try_map_years(|i, _| Ok::<_, GridError>(i)).unwrap();
    assert_eq!(years, (0..40).collect::<Vec<_>>());
}

#[test]
fn failing_year_fails_the_whole_map() {
    let series = random_series(5, 13);
    let grid = AnnualGrid::new(&series).unwrap();
    let result = grid.try_map_years(|i, _| if i == 3 { Err(i) } else { Ok(i) });
    assert_eq!(result, Err(3));
    let result = grid.par_try_map_years(|i, _| if i == 3 { Err(i) } else { Ok(i) });
    assert_eq!(result, Err(3));
}

#[test]
fn malformed_series_rejected() {
    for len in [0, 1, 364, 366, 729] {
        let series = vec![0.0; len];
        assert_eq!(AnnualGrid::new(&series).unwrap_err(), GridError::Shape { len });
    }
    let mut series = random_series(2, 14);
    series[400] = f64::NEG_INFINITY;
    assert_eq!(
        AnnualGrid::new(&series).unwrap_err(),
        GridError::Infinite { index: 400 }
    );
}
