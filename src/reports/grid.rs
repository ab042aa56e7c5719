use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use keystat::consts::{ROW_LENGTHS, ROW_STARTS};
use keystat::LayoutMapping;

fn heat_color(heat: Option<f64>) -> Color {
    match heat {
        None => Color::DarkGrey,
        Some(h) if h < 0.25 => Color::Blue,
        Some(h) if h < 0.5 => Color::Cyan,
        Some(h) if h < 0.75 => Color::Magenta,
        Some(_) => Color::Red,
    }
}

pub fn print_layout(name: &str, mapping: &LayoutMapping, heat: &[Option<f64>]) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for (&start, &len) in ROW_STARTS.iter().zip(ROW_LENGTHS.iter()) {
        let cells: Vec<Cell> = (start..start + len)
            .map(|pos| {
                let label = mapping
                    .char_at(pos)
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| " ".to_string());
                Cell::new(label)
                    .set_alignment(CellAlignment::Center)
                    .fg(heat_color(heat.get(pos).copied().flatten()))
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
