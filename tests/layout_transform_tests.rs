use std::f64::consts::FRAC_PI_2;

use approx::assert_abs_diff_eq;
use radial_progress::ChartError;
use radial_progress::core::{
    CategoryPalette, CellValue, ChartSettings, Color, ColorResolver, DataTable, DisplaySettings,
    LABEL_ROLE, PERCENTAGE_ROLE, PI2, TableColumn, normalize_angle, ring_thickness,
    visual_transform,
};
use rust_decimal::Decimal;

fn percentage_table(values: &[f64]) -> DataTable {
    values.iter().fold(
        DataTable::new(vec![TableColumn::new("Progress").with_role(PERCENTAGE_ROLE)]),
        |table, value| table.with_row(vec![CellValue::from(*value)]),
    )
}

fn labelled_table(rows: &[(f64, &str)]) -> DataTable {
    rows.iter().fold(
        DataTable::new(vec![
            TableColumn::new("Team").with_role(LABEL_ROLE),
            TableColumn::new("Progress").with_role(PERCENTAGE_ROLE),
        ]),
        |table, (value, label)| table.with_row(vec![CellValue::from(*label), CellValue::from(*value)]),
    )
}

fn band_settings() -> ChartSettings {
    ChartSettings::default()
        .with_radius_band(20.0, 35.0)
        .with_overlap_amount(0.5)
        .with_max_thickness(15.0)
}

#[test]
fn three_rows_stack_half_scale_spans() {
    let table = percentage_table(&[0.5, 0.3, 0.2]);
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &band_settings(), &mut palette).expect("layout");

    assert_eq!(model.rings.len(), 3);
    assert_eq!(model.rings[0].angular_span, FRAC_PI_2);
    assert_eq!(model.rings[0].angular_offset, 0.0);
    assert_abs_diff_eq!(model.rings[1].angular_span, PI2 * 0.15, epsilon = 1e-12);
    assert_abs_diff_eq!(model.rings[1].angular_offset, FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(
        model.rings[2].angular_offset,
        normalize_angle(model.rings[1].angular_offset + model.rings[1].angular_span),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(model.rings[2].angular_span, PI2 * 0.1, epsilon = 1e-12);
    for ring in &model.rings {
        assert_eq!(ring.adjust, 0.0);
    }
}

#[test]
fn thickness_fits_radius_band() {
    let table = percentage_table(&[0.5, 0.3, 0.2]);
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &band_settings(), &mut palette).expect("layout");

    for ring in &model.rings {
        assert_eq!(ring.thickness, 10.0);
    }
    assert_eq!(model.rings[0].radius, 35.0);
    assert_eq!(model.rings[1].radius, 30.0);
    assert_eq!(model.rings[2].radius, 25.0);
}

#[test]
fn default_band_gives_three_rows_thickness_ten() {
    let thickness = ring_thickness(&DisplaySettings::default(), 3).expect("thickness");

    assert_eq!(thickness, 10.0);
}

#[test]
fn thickness_is_capped_at_max_thickness() {
    let display = DisplaySettings::default();

    let thickness = ring_thickness(&display, 1).expect("thickness");

    assert_eq!(thickness, display.max_thickness);
}

#[test]
fn more_rows_give_thinner_rings() {
    let display = DisplaySettings::default();

    let mut previous = ring_thickness(&display, 1).expect("thickness");
    for rows in 2..12 {
        let thickness = ring_thickness(&display, rows).expect("thickness");
        assert!(thickness <= previous);
        previous = thickness;
    }
    assert!(previous < display.max_thickness);
}

#[test]
fn zero_rows_is_a_contract_violation() {
    let result = ring_thickness(&DisplaySettings::default(), 0);

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn missing_table_or_rows_yield_empty_model() {
    let mut palette = CategoryPalette::default();
    let settings = ChartSettings::default();

    let missing = visual_transform(None, &settings, &mut palette).expect("layout");
    let empty = visual_transform(Some(&percentage_table(&[])), &settings, &mut palette)
        .expect("layout");

    for model in [missing, empty] {
        assert!(model.is_empty());
        assert_eq!(model.headline_value, None);
        assert_eq!(model.settings, settings);
    }
}

#[test]
fn table_without_percentage_role_yields_empty_model() {
    let table = DataTable::new(vec![
        TableColumn::new("Team").with_role(LABEL_ROLE),
        TableColumn::new("Progress"),
    ])
    .with_row(vec![CellValue::from("North"), CellValue::from(0.4)]);
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &ChartSettings::default(), &mut palette)
        .expect("layout");

    assert!(model.rings.is_empty());
    assert_eq!(model.headline_value, None);
    assert!(palette.assignments().is_empty());
}

#[test]
fn headline_is_raw_first_row_percentage() {
    let table = labelled_table(&[(0.62, "North"), (0.2, "South")]);
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &ChartSettings::default(), &mut palette)
        .expect("layout");

    assert_eq!(model.headline_value, Some(0.62));
}

#[test]
fn ring_colors_follow_labels() {
    let table = labelled_table(&[(0.5, "North"), (0.2, "South"), (0.1, "North")]);
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &ChartSettings::default(), &mut palette)
        .expect("layout");

    assert_eq!(model.rings[0].color, model.rings[2].color);
    assert_ne!(model.rings[0].color, model.rings[1].color);
    let labels: Vec<&str> = palette.assignments().keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["North", "South"]);
}

#[test]
fn rows_without_label_are_colored_by_index() {
    let table = percentage_table(&[0.5, 0.3]);
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &ChartSettings::default(), &mut palette)
        .expect("layout");

    assert_eq!(model.rings[0].color, palette.resolve("0"));
    assert_eq!(model.rings[1].color, palette.resolve("1"));
    assert_eq!(
        model.rings[0].color,
        Color::from_hex("#01b8aa").expect("hex color")
    );
}

#[test]
fn custom_palette_wraps_and_rejects_empty_color_list() {
    assert!(matches!(
        CategoryPalette::with_colors(Vec::new()),
        Err(ChartError::InvalidSettings(_))
    ));
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let mut palette = CategoryPalette::with_colors(vec![red, blue]).expect("palette");
    let table = labelled_table(&[(0.5, "North"), (0.2, "South"), (0.1, "East")]);

    let model = visual_transform(Some(&table), &ChartSettings::default(), &mut palette)
        .expect("layout");

    let colors: Vec<Color> = model.rings.iter().map(|ring| ring.color).collect();
    assert_eq!(colors, vec![red, blue, red]);
    assert_eq!(palette.resolve("South"), blue);
}

#[test]
fn layout_is_deterministic_for_same_inputs() {
    let table = labelled_table(&[(0.5, "North"), (0.3, "South"), (0.9, "East")]);
    let settings = band_settings();
    let mut palette = CategoryPalette::default();

    let first = visual_transform(Some(&table), &settings, &mut palette).expect("layout");
    let second = visual_transform(Some(&table), &settings, &mut palette).expect("layout");

    assert_eq!(first, second);
}

#[test]
fn numeric_text_decimal_and_blank_cells_are_read() {
    let table = DataTable::new(vec![TableColumn::new("Progress").with_role(PERCENTAGE_ROLE)])
        .with_row(vec![CellValue::from(" 0.4 ")])
        .with_row(vec![CellValue::from(Decimal::new(25, 2))])
        .with_row(vec![CellValue::Null])
        .with_row(Vec::new());
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &ChartSettings::default(), &mut palette)
        .expect("layout");

    assert_eq!(model.headline_value, Some(0.4));
    assert_abs_diff_eq!(model.rings[0].angular_span, PI2 * 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(model.rings[1].angular_span, PI2 * 0.125, epsilon = 1e-12);
    assert_eq!(model.rings[2].angular_span, 0.0);
    assert_eq!(model.rings[3].angular_span, 0.0);
}

#[test]
fn non_numeric_percentage_fails_the_pass() {
    let table = percentage_table(&[0.5]).with_row(vec![CellValue::from("half")]);
    let mut palette = CategoryPalette::default();

    let result = visual_transform(Some(&table), &ChartSettings::default(), &mut palette);

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn malformed_settings_fail_the_pass() {
    let table = percentage_table(&[0.5]);
    let settings = ChartSettings::default().with_radius_band(40.0, 30.0);
    let mut palette = CategoryPalette::default();

    let result = visual_transform(Some(&table), &settings, &mut palette);

    assert!(matches!(result, Err(ChartError::InvalidSettings(_))));
}

#[test]
fn percentages_beyond_full_scale_are_not_clamped() {
    let table = percentage_table(&[3.0]);
    let mut palette = CategoryPalette::default();

    let model = visual_transform(Some(&table), &ChartSettings::default(), &mut palette)
        .expect("layout");

    assert_eq!(model.rings[0].angular_span, 1.5 * PI2);
}
