mod common;

use common::row;
use spaceline_lib::table::{separator, HEADER};
use spaceline_lib::{
    generate_table, render, render_with, Carrier, SeededSource, TableRenderMode, TicketTable,
    TripType,
};

#[test]
fn empty_table_is_header_and_separator() {
    assert_eq!(
        render(&[]),
        "Spaceline        Days Trip type  Price\n======================================\n"
    );
}

#[test]
fn single_row_matches_reference_layout() {
    let rows = [row(Carrier::SpaceX, 44, TripType::OneWay, 36.0)];
    let text = render(&rows);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], separator());
    assert_eq!(lines[2], "SpaceX             44 One-way    $  36");
}

#[test]
fn every_carrier_and_trip_type_lines_up() {
    let rows = [
        row(Carrier::SpaceAdventures, 44, TripType::RoundTrip, 72.0),
        row(Carrier::VirginGalactic, 23, TripType::OneWay, 50.0),
        row(Carrier::SpaceX, 31, TripType::RoundTrip, 100.0),
    ];
    let text = render(&rows);
    let lines: Vec<&str> = text.lines().skip(2).collect();
    assert_eq!(
        lines,
        vec![
            "Space Adventures   44 Round-trip $  72",
            "Virgin Galactic    23 One-way    $  50",
            "SpaceX             31 Round-trip $ 100",
        ]
    );
}

#[test]
fn generated_lines_share_header_width() {
    let rows = generate_table(50, &mut SeededSource::from_seed_u64(1)).expect("table");
    let text = render(&rows);
    assert_eq!(text.lines().count(), 52);
    for line in text.lines() {
        assert_eq!(line.len(), HEADER.len(), "misaligned line: {line:?}");
    }
}

#[test]
fn rendering_is_deterministic() {
    let rows = [row(Carrier::VirginGalactic, 30, TripType::OneWay, 41.0)];
    assert_eq!(render(&rows), render(&rows));
    assert_eq!(render(&rows), render_with(&rows, TableRenderMode::PlainText));
}

#[test]
fn markdown_lists_every_row() {
    let rows = vec![
        row(Carrier::SpaceX, 44, TripType::OneWay, 36.0),
        row(Carrier::VirginGalactic, 23, TripType::RoundTrip, 100.0),
    ];
    let text = TicketTable::new(rows).render(TableRenderMode::Markdown);
    assert!(text.starts_with("**Tickets to Mars** departing _2020-10-13_"));
    assert!(text.contains("| Spaceline | Days | Trip type | Price | Arrival |"));
    assert!(text.contains("| SpaceX | 44 | One-way | $36 | 2020-11-26 |"));
    assert!(text.contains("| Virgin Galactic | 23 | Round-trip | $100 | 2020-11-05 |"));
}

#[test]
fn table_serializes_to_json() {
    let table = TicketTable::new(vec![row(Carrier::SpaceAdventures, 44, TripType::RoundTrip, 72.0)]);
    let value = serde_json::to_value(&table).expect("serializes");
    assert_eq!(value["departure"], "2020-10-13");
    assert_eq!(value["rows"][0]["carrier"], "Space Adventures");
    assert_eq!(value["rows"][0]["trip_type"], "Round-trip");
    assert_eq!(value["rows"][0]["duration_days"], 44);
    assert_eq!(value["rows"][0]["price_millions"], 72.0);
}
