use super::*;
use crate::bitrev::{permute, reverse_bits};
use crate::common::{MAX_STAGES, Permute, PermuteError};
use num_complex::Complex;
use std::vec::Vec;

type C = Complex<i16>;

fn tagged(n: usize) -> Vec<C> {
    (0..n as i16).map(|i| C::new(i, -i)).collect()
}

#[test]
fn test_permute_complex_8() {
    let mut buffer = tagged(8);
    permute_complex(&mut buffer, 3).unwrap();

    let tags: Vec<i16> = buffer.iter().map(|c| c.re).collect();
    assert_eq!(tags, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    for c in &buffer {
        assert_eq!(c.im, -c.re);
    }
}

#[test]
fn test_permute_complex_matches_interleaved() {
    let entries = tagged(32);
    let mut components: Vec<i16> = entries.iter().flat_map(|c| [c.re, c.im]).collect();
    let mut buffer = entries.clone();

    permute_complex(&mut buffer, 5).unwrap();
    permute(&mut components, 5).unwrap();

    let from_components: Vec<C> = components
        .chunks_exact(2)
        .map(|pair| C::new(pair[0], pair[1]))
        .collect();
    assert_eq!(buffer, from_components);
}

#[test]
fn test_permute_complex_errors() {
    let mut buffer = tagged(5);
    assert_eq!(
        permute_complex(&mut buffer, 2),
        Err(PermuteError::SizeMismatch {
            expected: 4,
            actual: 5
        })
    );
    assert_eq!(buffer, tagged(5));

    assert_eq!(
        permute_complex(&mut buffer, -1),
        Err(PermuteError::InvalidArgument(-1))
    );
}

#[test]
fn test_bit_reversal_new() {
    let plan = BitReversal::new(4).unwrap();
    assert_eq!(plan.stages(), 4);
    assert_eq!(plan.entries(), 16);

    let plan = BitReversal::new(0).unwrap();
    assert_eq!(plan.stages(), 0);
    assert_eq!(plan.entries(), 1);

    let plan = BitReversal::new(MAX_STAGES as i32).unwrap();
    assert_eq!(plan.stages(), MAX_STAGES);

    assert_eq!(BitReversal::new(-3), Err(PermuteError::InvalidArgument(-3)));
    assert_eq!(BitReversal::new(31), Err(PermuteError::InvalidArgument(31)));
}

#[test]
fn test_bit_reversal_process_reuses_plan() {
    let plan = BitReversal::new(3).unwrap();

    for _ in 0..3 {
        let mut buffer = tagged(8);
        plan.process(&mut buffer).unwrap();
        let tags: Vec<i16> = buffer.iter().map(|c| c.re).collect();
        assert_eq!(tags, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    let mut wrong = tagged(16);
    assert_eq!(
        plan.process(&mut wrong),
        Err(PermuteError::SizeMismatch {
            expected: 8,
            actual: 16
        })
    );
}

#[test]
fn test_bit_reversal_process_interleaved() {
    let plan = BitReversal::new(2).unwrap();

    let mut buffer: [i32; 8] = [0, 10, 1, 11, 2, 12, 3, 13];
    plan.process_interleaved(&mut buffer).unwrap();
    assert_eq!(buffer, [0, 10, 2, 12, 1, 11, 3, 13]);

    let mut short = [0i32; 4];
    assert_eq!(
        plan.process_interleaved(&mut short),
        Err(PermuteError::SizeMismatch {
            expected: 8,
            actual: 4
        })
    );
}

#[test]
fn test_bit_reversal_indices() {
    let plan = BitReversal::new(5).unwrap();
    let indices = plan.indices();
    assert_eq!(indices.len(), 32);
    for (i, r) in indices {
        assert_eq!(r, reverse_bits(i, 5));
    }
}

#[test]
fn test_permute_trait() {
    fn run<P: Permute<C>>(p: &P, buffer: &mut [C]) -> Result<(), PermuteError> {
        p.permute(buffer)
    }

    let plan = BitReversal::new(3).unwrap();
    let original = tagged(8);
    let mut buffer = original.clone();

    run(&plan, &mut buffer).unwrap();
    run(&plan, &mut buffer).unwrap();
    assert_eq!(buffer, original);
}
