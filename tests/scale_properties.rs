//! Property tests for transforms, discretization and colour assignment

use proptest::prelude::*;

use ggscale::plot::scale::{discretize, Transform};
use ggscale::{apply_scales, Data, Field, Scale, Value};

fn level_values() -> impl Strategy<Value = Vec<Option<Value>>> {
    prop::collection::vec(
        prop::option::weighted(0.9, "[a-e]{1,2}".prop_map(Value::from)),
        0..40,
    )
}

proptest! {
    #[test]
    fn positive_transforms_round_trip(x in 1e-6f64..1e9) {
        for t in [Transform::log10(), Transform::log2(), Transform::ln(), Transform::sqrt()] {
            let back = t.inverse(t.transform(x));
            prop_assert!((back - x).abs() <= 1e-9 * x.abs(), "{} via {}: {}", x, t, back);
        }
    }

    #[test]
    fn real_transforms_round_trip(x in -1e6f64..1e6) {
        for t in [Transform::identity(), Transform::asinh()] {
            let back = t.inverse(t.transform(x));
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0), "{} via {}: {}", x, t, back);
        }
    }

    #[test]
    fn discretize_is_idempotent(values in level_values()) {
        let first = discretize(&values, None, None).unwrap();
        let second = discretize(&first.values(), Some(first.levels()), None).unwrap();
        prop_assert_eq!(first.indices(), second.indices());
        prop_assert_eq!(first.rediscretize(None, None).unwrap(), first);
    }

    #[test]
    fn ordered_levels_follow_permutation(values in level_values(), seed in any::<u64>()) {
        let base = discretize(&values, None, None).unwrap();
        let n = base.levels().len();

        // Deterministic permutation of 1..=n derived from the seed
        let mut order: Vec<usize> = (1..=n).collect();
        let mut state = seed;
        for i in (1..n).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            order.swap(i, (state >> 33) as usize % (i + 1));
        }

        let ordered = discretize(&values, Some(base.levels()), Some(&order)).unwrap();
        for (k, &p) in order.iter().enumerate() {
            prop_assert_eq!(&ordered.levels()[k], &base.levels()[p - 1]);
        }
        // Grouping is unchanged
        prop_assert_eq!(ordered.values(), base.values());
    }

    #[test]
    fn wrong_order_length_fails(values in level_values(), extra in 1usize..3) {
        let n = discretize(&values, None, None).unwrap().levels().len();
        let order: Vec<usize> = (1..=n + extra).collect();
        prop_assert!(discretize(&values, None, Some(&order)).is_err());
    }

    #[test]
    fn discrete_colours_ignore_input_order(mut labels in prop::collection::vec("[a-h]", 1..20)) {
        let scale = Scale::color_discrete(Default::default());
        let first = apply_scales(
            &[scale.clone()],
            &[Data::new().with_values(Field::Color, labels.clone())],
        )
        .unwrap();
        labels.reverse();
        let second = apply_scales(&[scale], &[Data::new().with_values(Field::Color, labels)]).unwrap();
        prop_assert_eq!(&first[0].color_key_colors, &second[0].color_key_colors);
    }

    #[test]
    fn continuous_colour_never_fails_on_finite_data(values in prop::collection::vec(-1e6f64..1e6, 1..30)) {
        let data = Data::new().with_values(Field::Color, values.clone());
        let aes = apply_scales(&[Scale::color_continuous(Default::default())], &[data]).unwrap();
        let colors = aes[0].colors(Field::Color).unwrap();
        prop_assert_eq!(colors.len(), values.len());
        prop_assert!(colors.iter().all(Option::is_some));
        prop_assert!(!aes[0].color_key_colors.is_empty());
    }

    #[test]
    fn missing_values_stay_missing(values in prop::collection::vec(prop::option::of(1f64..1e4), 0..30)) {
        let column = values.iter().map(|v| v.map(Value::from)).collect();
        let data = Data::new().with_column(Field::Y, column);
        let aes = apply_scales(&[Scale::y_log10(Default::default())], &[data]).unwrap();
        let y = aes[0].numeric(Field::Y).unwrap();
        for (input, output) in values.iter().zip(y) {
            prop_assert_eq!(input.is_none(), output.is_none());
        }
    }
}
