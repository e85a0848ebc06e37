use radial_progress::ChartError;
use radial_progress::core::{CellValue, ChartSettings, Color, DataTable, DisplaySettings};
use rust_decimal::Decimal;

#[test]
fn defaults_match_documented_values() {
    let display = DisplaySettings::default();
    let settings = ChartSettings::default();

    assert_eq!(display.max_radius, 35.0);
    assert_eq!(display.min_radius, 20.0);
    assert_eq!(display.max_thickness, 15.0);
    assert_eq!(display.thickness_overlap, 0.3);
    assert_eq!(display.overlap_amount, 0.5);
    assert_eq!(display.offset_amount, 0.5);
    assert_eq!(display.duration_ms, 15_000.0);
    assert_eq!(settings.percentages.font_size, 12.0);
    assert_eq!(settings.percentages.color, Color::rgb(0.0, 0.0, 0.0));
    assert!(settings.validate().is_ok());
}

#[test]
fn settings_json_roundtrip() {
    let settings = ChartSettings::default()
        .with_radius_band(10.0, 45.0)
        .with_duration_ms(2_500.0)
        .with_percentage_text(16.0, Color::rgb(0.2, 0.2, 0.2));

    let json = settings.to_json_pretty().expect("serialize");
    let restored = ChartSettings::from_json_str(&json).expect("deserialize");

    assert_eq!(restored, settings);
}

#[test]
fn partial_json_fills_defaults() {
    let settings =
        ChartSettings::from_json_str(r#"{ "display": { "max_radius": 40.0 } }"#).expect("parse");

    assert_eq!(settings.display.max_radius, 40.0);
    assert_eq!(settings.display.min_radius, 20.0);
    assert_eq!(settings.percentages.font_size, 12.0);
}

#[test]
fn malformed_json_is_invalid_data() {
    let result = ChartSettings::from_json_str("{ display: ");

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn validation_rejects_out_of_range_values() {
    let cases = [
        ChartSettings::default().with_radius_band(10.0, f64::NAN),
        ChartSettings::default().with_radius_band(10.0, 0.0),
        ChartSettings::default().with_radius_band(-1.0, 30.0),
        ChartSettings::default().with_radius_band(40.0, 30.0),
        ChartSettings::default().with_radius_band(30.0, 30.0),
        ChartSettings::default().with_max_thickness(0.0),
        ChartSettings::default().with_thickness_overlap(1.5),
        ChartSettings::default().with_overlap_amount(-0.1),
        ChartSettings::default().with_duration_ms(-1.0),
        ChartSettings::default().with_percentage_text(0.0, Color::rgb(0.0, 0.0, 0.0)),
    ];

    for settings in cases {
        assert!(
            matches!(settings.validate(), Err(ChartError::InvalidSettings(_))),
            "{settings:?} should be rejected"
        );
    }
}

#[test]
fn invalid_text_color_is_rejected() {
    let settings =
        ChartSettings::default().with_percentage_text(12.0, Color::rgba(0.0, 0.0, 2.0, 1.0));

    assert!(settings.validate().is_err());
}

#[test]
fn color_hex_tokens_roundtrip() {
    let color = Color::from_hex("#fd625e").expect("hex");

    assert_eq!(color.to_hex(), "#fd625e");
    assert_eq!(Color::from_hex("01B8AA").expect("hex").to_hex(), "#01b8aa");
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zz0000").is_err());
}

#[test]
fn table_json_accepts_mixed_cells() {
    let table = DataTable::from_json_str(
        r#"{
            "columns": [
                { "name": "Team", "roles": ["label"] },
                { "name": "Progress", "roles": ["percentage"] }
            ],
            "rows": [
                ["North", 0.5],
                ["South", "0.25"],
                [null, null]
            ]
        }"#,
    )
    .expect("table");

    assert_eq!(table.role_index("percentage"), Some(1));
    assert_eq!(table.role_index("label"), Some(0));
    assert_eq!(table.cell(0, 1), &CellValue::Number(0.5));
    assert_eq!(table.cell(1, 1), &CellValue::Decimal(Decimal::new(25, 2)));
    assert_eq!(table.cell(2, 0), &CellValue::Null);
    assert_eq!(table.cell(9, 9), &CellValue::Null);
}

#[test]
fn table_json_without_columns_is_rejected() {
    assert!(matches!(
        DataTable::from_json_str(r#"{ "rows": [] }"#),
        Err(ChartError::InvalidData(_))
    ));
}
