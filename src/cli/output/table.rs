//! Table output formatting for CLI commands
//!
//! Renders breakdown records and iteration histories using comfy-table.

use crate::domain::models::{BreakdownRecord, IterationSummary, MassUnit};
use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format a breakdown record, one row per member plus group totals and roll-ups
    pub fn format_breakdown(&self, record: &BreakdownRecord, unit: MassUnit) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Group").add_attribute(Attribute::Bold),
            Cell::new("Item").add_attribute(Attribute::Bold),
            Cell::new(format!("Mass ({})", unit.symbol())).add_attribute(Attribute::Bold),
        ]);

        let s = &record.structural_breakdown;
        let p = &record.propulsion_breakdown;
        let y = &record.systems_breakdown;
        let o = &record.operational_items;
        let l = &record.payload_breakdown;

        let groups: [(&str, Vec<(&str, f64)>, f64); 5] = [
            (
                "structural",
                vec![
                    ("wing", s.wing),
                    ("horizontal_tail", s.horizontal_tail),
                    ("vertical_tail", s.vertical_tail),
                    ("fuselage", s.fuselage),
                    ("main_landing_gear", s.main_landing_gear),
                    ("nose_landing_gear", s.nose_landing_gear),
                    ("nacelle", s.nacelle),
                    ("paint", s.paint),
                ],
                s.total,
            ),
            (
                "propulsion",
                vec![
                    ("engines", p.engines),
                    ("thrust_reversers", p.thrust_reversers),
                    ("miscellaneous", p.miscellaneous),
                    ("fuel_system", p.fuel_system),
                    ("battery", p.battery),
                    ("nacelle (structural)", s.nacelle),
                ],
                p.total,
            ),
            (
                "systems",
                vec![
                    ("control_systems", y.control_systems),
                    ("apu", y.apu),
                    ("electrical", y.electrical),
                    ("avionics", y.avionics),
                    ("hydraulics", y.hydraulics),
                    ("furnish", y.furnish),
                    ("air_conditioner", y.air_conditioner),
                    ("instruments", y.instruments),
                ],
                y.total,
            ),
            (
                "operational",
                vec![
                    ("operating_items_less_crew", o.operating_items_less_crew),
                    ("flight_crew", o.flight_crew),
                    ("flight_attendants", o.flight_attendants),
                ],
                o.total,
            ),
            (
                "payload",
                vec![
                    ("passengers", l.passengers),
                    ("baggage", l.baggage),
                    ("cargo", l.cargo),
                ],
                l.total,
            ),
        ];

        for (group, members, total) in groups {
            for (item, mass) in members {
                table.add_row(vec![
                    Cell::new(group),
                    Cell::new(item),
                    mass_cell(mass),
                ]);
            }
            table.add_row(vec![
                Cell::new(group).add_attribute(Attribute::Bold),
                Cell::new("total").add_attribute(Attribute::Bold),
                mass_cell(total).add_attribute(Attribute::Bold),
            ]);
        }

        for (label, mass) in [
            ("empty", record.empty),
            ("operating_empty", record.operating_empty),
            ("zero_fuel_weight", record.zero_fuel_weight),
            ("max_takeoff", record.max_takeoff),
        ] {
            let cell = if self.use_colors {
                Cell::new(label).fg(Color::Cyan)
            } else {
                Cell::new(label)
            };
            table.add_row(vec![Cell::new(""), cell, mass_cell(mass)]);
        }

        table.to_string()
    }

    /// Format the per-iteration history of a run
    pub fn format_history(&self, history: &[IterationSummary], unit: MassUnit) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Iter").add_attribute(Attribute::Bold),
            Cell::new(format!("Gross ({})", unit.symbol())).add_attribute(Attribute::Bold),
            Cell::new(format!("Candidate ({})", unit.symbol())).add_attribute(Attribute::Bold),
            Cell::new("Residual").add_attribute(Attribute::Bold),
        ]);

        for entry in history {
            table.add_row(vec![
                Cell::new(entry.iteration).set_alignment(CellAlignment::Right),
                mass_cell(entry.gross_mass),
                mass_cell(entry.candidate),
                Cell::new(format!("{:.3e}", entry.residual)).set_alignment(CellAlignment::Right),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn mass_cell(mass: f64) -> Cell {
    Cell::new(format!("{mass:.2}")).set_alignment(CellAlignment::Right)
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
