use proptest::prelude::*;
use spectrum_chart::core::{
    ColorTable, LinearScale, OccupancyBin, bisect_left, build_bar_nodes, default_palette,
    project_bar_rects,
};

fn table() -> ColorTable {
    ColorTable::new(0.0, 100.0, &default_palette()).expect("valid table")
}

proptest! {
    #[test]
    fn visible_rects_tile_any_window_without_gaps(
        steps in proptest::collection::vec(1.0f64..500.0, 2..48),
        values in proptest::collection::vec(0.0f64..=100.0, 2..48),
        window_a in 0.0f64..1.0,
        window_b in 0.0f64..1.0
    ) {
        let len = steps.len().min(values.len());
        prop_assume!(len >= 2);

        let mut frequency = 470_000.0;
        let mut bins = Vec::with_capacity(len);
        for i in 0..len {
            bins.push(OccupancyBin::new(frequency, values[i].round()));
            frequency += steps[i];
        }
        let nodes = build_bar_nodes(&bins);

        let domain_min = bins[0].frequency;
        let domain_max = bins[len - 1].frequency;
        let span = domain_max - domain_min;

        let (low, high) = if window_a <= window_b {
            (window_a, window_b)
        } else {
            (window_b, window_a)
        };
        prop_assume!(high - low > 0.01);
        let window_min = domain_min + span * low;
        let window_max = domain_min + span * high;

        let scale = LinearScale::new((domain_min, domain_max), (0.0, 1000.0))
            .expect("valid scale");
        let rects = project_bar_rects(&nodes, window_min, window_max, scale, 500.0, &table());

        prop_assert!(rects.len() <= nodes.len() + 1);

        let window_edge = scale.map(window_max).round();
        for rect in &rects {
            prop_assert!(rect.x >= 0.0);
            prop_assert!(rect.width >= 0.0);
            prop_assert!(rect.x + rect.width <= window_edge + 1e-9);
        }

        let mut sorted = rects.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        for pair in sorted.windows(2) {
            prop_assert!(
                pair[1].x <= pair[0].x + pair[0].width + 1e-9,
                "x-gap between consecutive rects"
            );
        }
    }

    #[test]
    fn find_color_is_total_over_finite_values(value in -1.0e6f64..1.0e6) {
        let table = table();
        let palette = default_palette();
        let color = table.find_color(value);
        prop_assert!(palette.iter().any(|candidate| candidate == color));
    }

    #[test]
    fn bisect_left_matches_the_linear_scan(
        mut xs in proptest::collection::vec(-1.0e6f64..1.0e6, 0..64),
        query in -1.0e6f64..1.0e6
    ) {
        xs.sort_by(|a, b| a.total_cmp(b));
        let expected = xs.iter().take_while(|&&x| x < query).count();
        prop_assert_eq!(bisect_left(&xs, query), expected);
    }
}
