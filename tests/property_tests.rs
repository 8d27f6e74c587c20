use arith::{decode, encode, Codeword, Encoder, Model};
use num_rational::BigRational;
use num_traits::{One, Zero};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip_arbitrary_bytes(
        input in prop::collection::vec(any::<u8>(), 1..120),
    ) {
        let model = Model::build(&input).unwrap();
        let interval = encode(&model, &input).unwrap();
        let codeword = Codeword::from_interval(&interval).unwrap();

        prop_assert!(interval.contains(&codeword.value()));

        let decoded = decode(&model, &codeword, input.len()).unwrap();
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn test_roundtrip_small_alphabet(
        input in prop::collection::vec(0u8..4, 1..200),
    ) {
        let model = Model::build(&input).unwrap();
        let interval = encode(&model, &input).unwrap();
        let codeword = Codeword::from_interval(&interval).unwrap();

        let decoded = decode(&model, &codeword, input.len()).unwrap();
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn test_partition_covers_unit_interval_exactly(
        input in prop::collection::vec(any::<u8>(), 1..120),
    ) {
        let model = Model::build(&input).unwrap();

        let mut lo = BigRational::zero();
        let mut total_frequency = 0u64;
        for (_, entry) in model.iter() {
            // Contiguous in insertion order: each slice starts where the
            // previous one ended, no gaps, no overlaps.
            prop_assert_eq!(entry.interval().low(), &lo);
            prop_assert_eq!(&entry.interval().width(), entry.probability());
            lo = entry.interval().high().clone();
            total_frequency += entry.frequency();
        }
        prop_assert!(lo.is_one());
        prop_assert_eq!(total_frequency as usize, input.len());
    }

    #[test]
    fn test_narrowing_is_strictly_monotonic(
        input in prop::collection::vec(0u8..6, 2..60),
    ) {
        let model = Model::build(&input).unwrap();

        // A single-symbol model owns all of [0, 1): its width factor is
        // exactly 1 and the interval never moves. Every other model
        // shrinks the width at each step.
        let degenerate = model.len() == 1;

        let mut encoder = Encoder::new(&model);
        let mut previous = encoder.interval().clone();
        for symbol in &input {
            encoder.push(symbol).unwrap();
            let current = encoder.interval();
            prop_assert!(current.low() >= previous.low());
            prop_assert!(current.high() <= previous.high());
            if degenerate {
                prop_assert_eq!(&current.width(), &previous.width());
            } else {
                prop_assert!(current.width() < previous.width());
            }
            prop_assert!(current.low() < current.high());
            previous = current.clone();
        }
    }

    #[test]
    fn test_codeword_survives_its_string_form(
        input in prop::collection::vec(any::<u8>(), 1..80),
    ) {
        let model = Model::build(&input).unwrap();
        let interval = encode(&model, &input).unwrap();
        let codeword = Codeword::from_interval(&interval).unwrap();

        // The wire form is the bare digit string; parsing it back must
        // reproduce the value exactly.
        let reparsed: Codeword = codeword.to_string().parse().unwrap();
        prop_assert_eq!(reparsed.value(), codeword.value());

        let decoded = decode(&model, &reparsed, input.len()).unwrap();
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn test_prefix_encoding_contains_full_encoding(
        input in prop::collection::vec(0u8..4, 2..80),
        split in 1usize..79,
    ) {
        prop_assume!(split < input.len());
        let model = Model::build(&input).unwrap();

        let prefix = encode(&model, &input[..split]).unwrap();
        let full = encode(&model, &input).unwrap();
        prop_assert!(full.low() >= prefix.low());
        prop_assert!(full.high() <= prefix.high());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_roundtrip_long_inputs_force_precision_growth(
        seed in prop::collection::vec(0u8..2, 1..8),
        repeats in 60usize..120,
    ) {
        let input: Vec<u8> = seed
            .iter()
            .copied()
            .cycle()
            .take(seed.len() * repeats)
            .collect();

        let model = Model::build(&input).unwrap();
        let interval = encode(&model, &input).unwrap();
        let codeword = Codeword::from_interval(&interval).unwrap();

        let decoded = decode(&model, &codeword, input.len()).unwrap();
        prop_assert_eq!(decoded, input);
    }
}
