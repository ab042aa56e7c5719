use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keystat::classify::Category;
use keystat::config::{RatingTable, Severity};
use keystat::stats::{Analysis, MorphemeStats, NgramFamily, StatKey};

fn severity_color(s: Severity) -> Color {
    match s {
        Severity::Excellent => Color::Green,
        Severity::Good => Color::Cyan,
        Severity::Okay => Color::Yellow,
        Severity::Poor => Color::Magenta,
        Severity::Terrible => Color::Red,
    }
}

fn rated_cell(ratings: &RatingTable, name: &str, value: f64) -> Cell {
    let cell = Cell::new(format!("{:.2}%", value * 100.0));
    match ratings.rate(name, value) {
        Some(s) => cell.fg(severity_color(s)),
        None => cell,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn ngrams(analysis: &Analysis, ratings: &RatingTable, show_top: bool) {
    let mut table = new_table();

    let mut header = vec![
        Cell::new("Stat").add_attribute(Attribute::Bold),
        Cell::new("Freq"),
        Cell::new("Rating"),
    ];
    if show_top {
        header.push(Cell::new("Top"));
    }
    table.add_row(header);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (key, stat) in &analysis.ngram_stats {
        let name = key.to_string();
        let rating = ratings
            .rate(&name, stat.frequency)
            .map(|s| Cell::new(s).fg(severity_color(s)))
            .unwrap_or_else(|| Cell::new("-"));

        let mut row = vec![
            Cell::new(&name).add_attribute(Attribute::Bold),
            rated_cell(ratings, &name, stat.frequency),
            rating,
        ];
        if show_top {
            let top: Vec<String> = stat
                .top
                .iter()
                .map(|(g, w)| {
                    let share = if stat.total > 0.0 { w / stat.total } else { 0.0 };
                    format!("{} {:.2}%", g, share * 100.0)
                })
                .collect();
            row.push(Cell::new(top.join("  ")));
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn fingers(analysis: &Analysis, ratings: &RatingTable) {
    let mut table = new_table();
    let entries = analysis.finger_stats.entries();

    table.add_row(
        entries
            .iter()
            .map(|(name, _)| Cell::new(name).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        entries
            .iter()
            .map(|(name, value)| rated_cell(ratings, name, *value))
            .collect::<Vec<_>>(),
    );
    println!("\n{}", table);
}

pub fn morphemes(title: &str, stats: &MorphemeStats) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Categories"),
    ]);

    for (morpheme, tags) in &stats.classified {
        table.add_row(vec![Cell::new(morpheme), Cell::new(tags.to_string())]);
    }
    println!("\n{}", table);

    if stats.unsupported > 0 {
        println!(
            "({} entries skipped: only 2 or 3 characters can be classified)",
            stats.unsupported
        );
    }
}

const COMPARISON_COLUMNS: [(Category, NgramFamily); 10] = [
    (Category::SameFinger, NgramFamily::Bigram),
    (Category::SameFinger, NgramFamily::Skipgram),
    (Category::LateralStretch, NgramFamily::Bigram),
    (Category::HalfScissor, NgramFamily::Bigram),
    (Category::FullScissor, NgramFamily::Bigram),
    (Category::WingedPinky, NgramFamily::Bigram),
    (Category::Alternate, NgramFamily::Trigram),
    (Category::Roll, NgramFamily::Trigram),
    (Category::OneHand, NgramFamily::Trigram),
    (Category::Redirect, NgramFamily::Trigram),
];

pub fn comparison(results: &[(String, Analysis)], ratings: &RatingTable) {
    let mut table = new_table();

    let mut header = vec![Cell::new("Layout").add_attribute(Attribute::Bold)];
    header.extend(
        COMPARISON_COLUMNS
            .iter()
            .map(|&(c, f)| Cell::new(StatKey::new(c, f))),
    );
    header.push(Cell::new("LH"));
    header.push(Cell::new("RH"));
    table.add_row(header);

    for i in 1..=COMPARISON_COLUMNS.len() + 2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, a) in results {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        for &(cat, family) in &COMPARISON_COLUMNS {
            let key = StatKey::new(cat, family).to_string();
            row.push(rated_cell(ratings, &key, a.frequency(cat, family)));
        }
        row.push(rated_cell(ratings, "LH", a.finger_stats.left_hand));
        row.push(rated_cell(ratings, "RH", a.finger_stats.right_hand));
        table.add_row(row);
    }
    println!("\n{}", table);
}
