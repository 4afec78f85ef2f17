//! Example demonstrating the butterfly diagram pipeline end to end
//!
//! This example shows how to:
//! 1. Define a shared grid for two observation sources
//! 2. Aggregate raw sightings into per-period latitude tables
//! 3. Merge both sources into a bit-plane composite
//! 4. Colorize the composite and inspect the axis indices
//!
//! To run this example:
//! ```bash
//! cargo run --example butterfly_demo
//! ```

use butterfly_rust::api::{
    aggregate_for_grid, create_color_image, create_date_index, create_lat_index,
    create_merged_image, ButterflyInfo, Color, ColorMap, DateDelta, Observation,
};
use chrono::NaiveDate;

fn main() -> anyhow::Result<()> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    println!("=== Butterfly Diagram Pipeline ===\n");

    // Step 1: one shared grid for both sources
    let info = ButterflyInfo::new(
        -5,
        5,
        date(2020, 2, 1),
        date(2020, 2, 10),
        DateDelta::one_day(),
    )?;
    println!("1. Grid definition:\n{}\n", info.to_json());

    // Step 2: two independent observation catalogs
    let northern = vec![
        Observation::new(date(2020, 2, 2), 2, 4),
        Observation::new(date(2020, 2, 3), 2, 3),
        Observation::new(date(2020, 2, 6), 1, 2),
        Observation::new(date(2020, 2, 9), 0, 1),
    ];
    let southern = vec![
        Observation::new(date(2020, 2, 2), -4, -3),
        Observation::new(date(2020, 2, 5), -3, -2),
        Observation::new(date(2020, 2, 6), -2, -1),
        Observation::new(date(2020, 2, 9), -1, 0),
    ];
    let sources = vec![
        aggregate_for_grid(&northern, &info),
        aggregate_for_grid(&southern, &info),
    ];
    println!(
        "2. Aggregated {} + {} sightings over {} periods",
        northern.len(),
        southern.len(),
        info.date_axis_len()
    );

    // Step 3: bit-plane composite (source 0 = bit 0, source 1 = bit 1)
    let composite = create_merged_image(&sources, &info)?;
    println!("\n3. Composite ({} rows x {} cols):", composite.rows(), composite.cols());
    let lat_index = create_lat_index(info.lat_min, info.lat_max);
    for (row, label) in lat_index.iter().enumerate() {
        let cells: String = composite
            .row(row)
            .iter()
            .map(|&value| match value {
                0 => '.',
                1 => 'N',
                2 => 'S',
                _ => '*',
            })
            .collect();
        let label = if *label >= 0 {
            format!("{:>3}", label)
        } else {
            "   ".to_string()
        };
        println!("   {} |{}|", label, cells);
    }

    // Step 4: RGB rendering plus the date axis for the chart collaborator
    let cmap = ColorMap::new(vec![
        Color::new(0xD6, 0x27, 0x28),
        Color::new(0x1F, 0x77, 0xB4),
        Color::new(0x2C, 0xA0, 0x2C),
    ]);
    let image = create_color_image(&composite, &cmap);
    let dates = create_date_index(&info);
    println!(
        "\n4. Rendered {}x{} RGB grid spanning {} .. {}",
        image.rows(),
        image.cols(),
        dates.first().map(|d| d.to_string()).unwrap_or_default(),
        dates.last().map(|d| d.to_string()).unwrap_or_default(),
    );

    Ok(())
}
