use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use skatefit::engine::EquipmentSpec;
use skatefit::error::SfResult;
use skatefit::explain::{ComponentNote, ExplanationFragment};
use skatefit::util::format_inches;
use std::path::Path;

pub fn print_placeholder() {
    println!("\n⏳ Enter height, weight, shoe size, experience, riding style and terrain");
    println!("   to see your recommended setup.");
}

fn section(title: &str, rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(title).add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new(""),
    ]);
    for (k, v) in rows {
        table.add_row(vec![
            Cell::new(k),
            Cell::new(v).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn print_spec_tables(spec: &EquipmentSpec) {
    let d = &spec.deck;
    println!(
        "\n{}",
        section(
            "Deck",
            vec![
                ("Width", format_inches(d.width)),
                ("Length", format_inches(d.length)),
                ("Wheelbase", format_inches(d.wheelbase)),
                ("Concave", d.concave.to_string()),
                ("Construction", d.construction.to_string()),
            ],
        )
    );

    let t = &spec.trucks;
    println!(
        "{}",
        section(
            "Trucks",
            vec![
                ("Width", format_inches(t.width)),
                ("Height", t.height.to_string()),
                ("Tightness", t.tightness.to_string()),
                ("Responsiveness", t.responsiveness.to_string()),
            ],
        )
    );

    let w = &spec.wheels;
    println!(
        "{}",
        section(
            "Wheels",
            vec![
                ("Diameter", format!("{}mm", w.diameter_mm)),
                ("Hardness", w.hardness.to_string()),
                ("Contact Patch", w.contact_patch.to_string()),
            ],
        )
    );

    let h = &spec.hardware;
    println!(
        "{}",
        section(
            "Hardware",
            vec![
                ("Bearings", h.bearing_rating.to_string()),
                ("Hardware", h.hardware_length.to_string()),
                ("Risers", h.risers.to_string()),
                ("Bushings", h.bushing_durometer.to_string()),
                ("Setup Weight", h.setup_weight.to_string()),
            ],
        )
    );
}

pub fn print_component_notes(notes: &[ComponentNote]) {
    println!();
    for note in notes {
        println!("🛹 {}: {}", note.component, note.text);
    }
}

pub fn print_explanations(fragments: &[ExplanationFragment]) {
    println!("\n🔬 === WHY THIS SETUP === 🔬");
    for f in fragments {
        println!("\n{}: {}", f.label, f.text);
    }
}

pub fn print_preset_report(results: &[(String, EquipmentSpec)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Preset").add_attribute(Attribute::Bold),
        Cell::new("Width").fg(Color::Cyan),
        Cell::new("Length"),
        Cell::new("WB"),
        Cell::new("Concave"),
        Cell::new("Truck"),
        Cell::new("Tight"),
        Cell::new("Wheel").fg(Color::Green),
        Cell::new("Duro").fg(Color::Green),
        Cell::new("ABEC"),
        Cell::new("Risers"),
        Cell::new("Bush"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, s) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", s.deck.width)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", s.deck.length)),
            Cell::new(format!("{:.1}", s.deck.wheelbase)),
            Cell::new(s.deck.concave.to_string()),
            Cell::new(s.trucks.height.to_string()),
            Cell::new(s.trucks.tightness.to_string()),
            Cell::new(format!("{}mm", s.wheels.diameter_mm)).fg(Color::Green),
            Cell::new(s.wheels.hardness.to_string()).fg(Color::Green),
            Cell::new(s.hardware.bearing_rating.to_string()),
            Cell::new(s.hardware.risers.to_string()),
            Cell::new(s.hardware.bushing_durometer.to_string()),
        ]);
    }
    println!("\n{}", table);
}

#[derive(Serialize)]
struct PresetRow<'a> {
    preset: &'a str,
    deck_width_in: f64,
    deck_length_in: f64,
    wheelbase_in: f64,
    concave: String,
    construction: String,
    truck_height: String,
    tightness: String,
    responsiveness: String,
    wheel_diameter_mm: u32,
    wheel_hardness: String,
    contact_patch: String,
    bearing_rating: String,
    hardware_length: String,
    risers: String,
    bushing_durometer: String,
    setup_weight: String,
}

pub fn export_preset_csv<P: AsRef<Path>>(
    path: P,
    results: &[(String, EquipmentSpec)],
) -> SfResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (name, s) in results {
        writer.serialize(PresetRow {
            preset: name,
            deck_width_in: s.deck.width,
            deck_length_in: s.deck.length,
            wheelbase_in: s.deck.wheelbase,
            concave: s.deck.concave.to_string(),
            construction: s.deck.construction.to_string(),
            truck_height: s.trucks.height.to_string(),
            tightness: s.trucks.tightness.to_string(),
            responsiveness: s.trucks.responsiveness.to_string(),
            wheel_diameter_mm: s.wheels.diameter_mm,
            wheel_hardness: s.wheels.hardness.to_string(),
            contact_patch: s.wheels.contact_patch.to_string(),
            bearing_rating: s.hardware.bearing_rating.to_string(),
            hardware_length: s.hardware.hardware_length.to_string(),
            risers: s.hardware.risers.to_string(),
            bushing_durometer: s.hardware.bushing_durometer.to_string(),
            setup_weight: s.hardware.setup_weight.to_string(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
