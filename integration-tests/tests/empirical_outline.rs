use approx::assert_relative_eq;
use strand_bridge::{EmpiricalDistribution, empirical_cdf_outline};
use strand_core::{EmpiricalCdf, UniformRng};
use strand_random::{Drand48, MersenneTwister32, MersenneTwister64};

fn draw(rng: &mut dyn UniformRng, n: usize) -> Vec<f64> {
    let mut sample = vec![0.0; n];
    rng.fill(&mut sample);
    sample
}

#[test]
fn outline_of_uniform_sample_is_a_staircase() {
    let mut rng = MersenneTwister64::new(42);
    let dist = EmpiricalDistribution::new(draw(&mut rng, 200)).expect("finite sample");

    let outline = empirical_cdf_outline(&dist, -0.5, 1.5).expect("valid interval");

    assert_eq!(outline.len(), 2 + 2 * 200);
    assert_eq!(outline.xs().first(), Some(&-0.5));
    assert_eq!(outline.xs().last(), Some(&1.5));
    assert_relative_eq!(outline.ys()[0], 0.0);
    assert_relative_eq!(*outline.ys().last().unwrap(), 1.0);

    // Abscissas never decrease and ordinates never decrease.
    for pair in outline.xs().windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    for pair in outline.ys().windows(2) {
        assert!(pair[0] <= pair[1]);
    }

    // Every vertical segment sits on a sample value and climbs one step.
    let step = 1.0 / 200.0;
    for i in (1..outline.len() - 1).step_by(2) {
        let (x0, y0) = (outline.xs()[i], outline.ys()[i]);
        let (x1, y1) = (outline.xs()[i + 1], outline.ys()[i + 1]);
        assert_eq!(x0, x1);
        assert_relative_eq!(y1 - y0, step, epsilon = 1e-12);
        assert_relative_eq!(dist.cdf(x1), y1, epsilon = 1e-12);
    }
}

#[test]
fn partial_window_starts_at_cdf_below_window() {
    let mut rng = MersenneTwister32::new(5489);
    let sample = draw(&mut rng, 100);
    let inside = sample.iter().filter(|&&x| (0.25..=0.5).contains(&x)).count();
    let dist = EmpiricalDistribution::new(sample).unwrap();

    let outline = empirical_cdf_outline(&dist, 0.25, 0.5).unwrap();

    assert_eq!(outline.len(), 2 + 2 * inside);
    assert_relative_eq!(outline.ys()[0], dist.cdf(0.25), epsilon = 1e-12);
    assert_relative_eq!(*outline.ys().last().unwrap(), dist.cdf(0.5), epsilon = 1e-12);
}

#[test]
fn generators_produce_distinct_samples() {
    let a = draw(&mut MersenneTwister32::new(7), 16);
    let b = draw(&mut MersenneTwister64::new(7), 16);
    let c = draw(&mut Drand48::new(), 16);

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert!(a.iter().chain(&b).chain(&c).all(|x| (0.0..1.0).contains(x)));
}

#[test]
fn same_seed_gives_same_outline() {
    let outline = |seed| {
        let mut rng = MersenneTwister64::new(seed);
        let dist = EmpiricalDistribution::new(draw(&mut rng, 50)).unwrap();
        empirical_cdf_outline(&dist, 0.0, 1.0).unwrap()
    };

    assert_eq!(outline(99), outline(99));
    assert_ne!(outline(99), outline(100));
}
