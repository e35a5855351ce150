use bandchart::api::{
    ChartConfig, ChartGeometry, GEOMETRY_SNAPSHOT_JSON_SCHEMA_V1, layout_grouped_bar_chart,
    layout_line_chart,
};
use bandchart::core::{Datum, GroupDatum, Orientation};
use serde_json::Value;

fn grouped_geometry() -> ChartGeometry {
    let data = vec![
        GroupDatum::new("Q1").with_value("a", 3.0).with_value("b", 7.0),
        GroupDatum::new("Q2").with_value("a", 5.0),
    ];
    let config = ChartConfig::default().with_orientation(Orientation::Horizontal);
    layout_grouped_bar_chart(&data, &config, true).expect("layout")
}

#[test]
fn contract_v1_wraps_geometry_with_schema_version() {
    let json = grouped_geometry()
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"],
        Value::from(GEOMETRY_SNAPSHOT_JSON_SCHEMA_V1)
    );
    assert_eq!(value["geometry"]["kind"], "grouped_bar");
    assert_eq!(value["geometry"]["orientation"], "horizontal");
    assert_eq!(value["geometry"]["series_order"][1], "b");
}

#[test]
fn compat_parser_accepts_bare_and_versioned_payloads() {
    let geometry = grouped_geometry();
    let versioned = geometry.to_json_contract_v1_pretty().expect("contract");
    let bare = geometry.to_json_pretty().expect("bare");

    assert_eq!(
        ChartGeometry::from_json_compat_str(&versioned).expect("versioned"),
        geometry
    );
    assert_eq!(
        ChartGeometry::from_json_compat_str(&bare).expect("bare"),
        geometry
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = grouped_geometry()
        .to_json_contract_v1_pretty()
        .expect("contract")
        .replacen("\"schema_version\": 1", "\"schema_version\": 99", 1);
    let err = ChartGeometry::from_json_compat_str(&json).expect_err("version mismatch");
    assert!(err.to_string().contains("unsupported geometry schema version"));
}

#[test]
fn line_paths_serialize_as_tagged_commands() {
    let geometry = layout_line_chart(
        &[Datum::new("a", 1.0), Datum::new("b", 2.0)],
        &ChartConfig::default().with_area(true),
    )
    .expect("layout");
    let value: Value =
        serde_json::from_str(&geometry.to_json_pretty().expect("json")).expect("valid json");
    let area = &value["lines"][0]["area"]["commands"];
    assert_eq!(area[0]["op"], "move_to");
    assert_eq!(area[area.as_array().expect("array").len() - 1]["op"], "close");
    assert!(value["lines"][0]["series_key"].is_null());
}
