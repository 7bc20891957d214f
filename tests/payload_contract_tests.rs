use approx::assert_relative_eq;
use spectrum_chart::core::SpectrumDataset;

const PAYLOAD: &str = r#"{
    "occupancy": [
        { "frequency": 471, "value": 89.6 },
        { "frequency": 470, "value": 10.2 }
    ],
    "result": [
        { "frequency": 470.5, "rms": 52.0, "peak": 60.0 },
        { "frequency": 470.0, "rms": 48.5, "peak": 55.0 }
    ]
}"#;

#[test]
fn payload_frequencies_are_scaled_from_kilohertz_units() {
    let dataset = SpectrumDataset::from_json_str(PAYLOAD).expect("valid payload");

    assert_eq!(dataset.occupancy.len(), 2);
    assert_relative_eq!(dataset.occupancy[0].frequency, 470_000.0, epsilon = 1e-9);
    assert_relative_eq!(dataset.occupancy[1].frequency, 471_000.0, epsilon = 1e-9);
    assert_relative_eq!(dataset.samples[0].frequency, 470_000.0, epsilon = 1e-9);
    assert_relative_eq!(dataset.samples[1].frequency, 470_500.0, epsilon = 1e-9);
}

#[test]
fn occupancy_values_are_rounded_to_whole_percent() {
    let dataset = SpectrumDataset::from_json_str(PAYLOAD).expect("valid payload");

    assert_eq!(dataset.occupancy[0].value, 10.0);
    assert_eq!(dataset.occupancy[1].value, 90.0);
    // RMS measurements are left untouched.
    assert_relative_eq!(dataset.samples[1].rms, 52.0, epsilon = 1e-9);
}

#[test]
fn out_of_order_series_are_canonicalized_ascending() {
    let dataset = SpectrumDataset::from_json_str(PAYLOAD).expect("valid payload");

    assert!(dataset.occupancy[0].frequency < dataset.occupancy[1].frequency);
    assert!(dataset.samples[0].frequency < dataset.samples[1].frequency);
}

#[test]
fn extents_follow_the_normalized_series() {
    let dataset = SpectrumDataset::from_json_str(PAYLOAD).expect("valid payload");

    assert_eq!(dataset.frequency_extent(), Some((470_000.0, 470_500.0)));
    assert_eq!(dataset.rms_extent(), Some((48.5, 52.0)));
    assert_eq!(
        dataset.occupancy_frequency_extent(),
        Some((470_000.0, 471_000.0))
    );
}

#[test]
fn empty_payload_yields_an_empty_dataset() {
    let dataset =
        SpectrumDataset::from_json_str(r#"{ "occupancy": [], "result": [] }"#).expect("parse");

    assert!(dataset.is_empty());
    assert_eq!(dataset.frequency_extent(), None);
    assert_eq!(dataset.rms_extent(), None);
}

#[test]
fn malformed_payload_is_reported_as_invalid_data() {
    let result = SpectrumDataset::from_json_str("{ not json }");
    assert!(result.is_err());
}
