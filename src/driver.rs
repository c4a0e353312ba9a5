// 🚦 Driver - loads the seed data and walks every capability once

use crate::compare::{compare_values, ComplexNumber, Ratio};
use crate::entities::{ClientRegistry, ItemStore};
use crate::replicate::{clone_object, Dot, Quadrilateral};
use crate::seed::{Lookups, SeedData};
use crate::store::{Identifiable, RecordStore};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

const SEPARATOR: &str = "-------------------------------------";

/// Run the full demo, writing the report to `out`
pub fn run<W: Write>(out: &mut W, seed: &SeedData) -> Result<()> {
    let items = seed.item_store();
    let clients = seed.client_registry();
    info!(items = items.len(), clients = clients.len(), "stores populated");

    print_stores(out, &items, &clients)?;
    print_lookups(out, &items, &clients, seed.lookups)?;

    writeln!(out, "{}", SEPARATOR)?;
    print_copies(out)?;

    writeln!(out, "{}", SEPARATOR)?;
    print_comparisons(out)?;

    Ok(())
}

fn print_stores<W: Write>(out: &mut W, items: &ItemStore, clients: &ClientRegistry) -> Result<()> {
    writeln!(out, "Items:")?;
    for item in items.all() {
        writeln!(out, "{}", item)?;
    }

    writeln!(out, "\nClients:")?;
    for client in clients.all() {
        writeln!(out, "{}", client)?;
    }

    Ok(())
}

fn print_lookups<W: Write>(
    out: &mut W,
    items: &ItemStore,
    clients: &ClientRegistry,
    lookups: Lookups,
) -> Result<()> {
    match items.find_by_id(lookups.item_id) {
        Some(item) => writeln!(out, "\nItem with ID {}: {}", item.id(), item.name)?,
        None => writeln!(out, "\nItem with ID {} not found.", lookups.item_id)?,
    }

    match clients.find_by_id(lookups.client_id) {
        Some(client) => writeln!(out, "\nClient with ID {}: {}", client.id(), client.name)?,
        None => writeln!(out, "\nClient with ID {} not found.", lookups.client_id)?,
    }

    Ok(())
}

fn print_copies<W: Write>(out: &mut W) -> Result<()> {
    let dot = clone_object(&Dot::new(1, 2));
    let quad = clone_object(&Quadrilateral::new(Dot::new(1, 2), Dot::new(3, 4)));

    writeln!(out, "Copied Dot: ({}, {})", dot.x, dot.y)?;
    writeln!(
        out,
        "Copied Quadrilateral: Upper Left - ({}, {}), Lower Right - ({}, {})",
        quad.upper_left.x, quad.upper_left.y, quad.lower_right.x, quad.lower_right.y
    )?;

    Ok(())
}

fn print_comparisons<W: Write>(out: &mut W) -> Result<()> {
    let real = compare_values(&ComplexNumber::new(3.0, 4.0), &ComplexNumber::new(1.0, 2.0));

    let three_fifths = Ratio::new(3, 5).context("Invalid sample ratio 3/5")?;
    let one_third = Ratio::new(1, 3).context("Invalid sample ratio 1/3")?;
    let decimal = compare_values(&three_fifths, &one_third);

    writeln!(out, "Comparison of Real Numbers: {}", real)?;
    writeln!(out, "Comparison of Decimal Numbers: {}", decimal)?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    fn render(seed: &SeedData) -> String {
        let mut buf = Vec::new();
        run(&mut buf, seed).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_builtin_report() {
        let output = render(&SeedData::builtin().unwrap());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Items:");
        assert_eq!(lines[1], "ID: 1, Item Name: Friend, Item Price: 1");
        assert_eq!(lines[2], "ID: 2, Item Name: Liver, Item Price: 70000");
        assert_eq!(lines[3], "ID: 3, Item Name: Buy a job on c#, Item Price: 99999999");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Clients:");
        assert_eq!(lines[6], "ID: 1, Client Name: Johnson, Client Address: Maple Street");
        assert_eq!(lines[7], "ID: 2, Client Name: Smith, Client Address: Elm Street");
        assert_eq!(lines[8], "ID: 3, Client Name: Williams, Client Address: Oak Street");

        assert!(output.contains("\nItem with ID 2: Liver\n"));
        assert!(output.contains("\nClient with ID 3: Williams\n"));
        assert!(output.contains("Copied Dot: (1, 2)\n"));
        assert!(output.contains(
            "Copied Quadrilateral: Upper Left - (1, 2), Lower Right - (3, 4)\n"
        ));
        assert!(output.contains("Comparison of Real Numbers: 1\n"));
        assert!(output.contains("Comparison of Decimal Numbers: 1\n"));
        assert_eq!(output.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn test_missing_lookups_reported() {
        let seed = SeedData {
            items: vec![
                Item::new(1, "Friend", 1.0),
                Item::new(2, "Liver", 70000.0),
                Item::new(3, "Buy", 99999999.0),
            ],
            clients: Vec::new(),
            lookups: Lookups {
                item_id: 99,
                client_id: 3,
            },
        };

        let output = render(&seed);

        assert!(output.contains("Item with ID 99 not found."));
        assert!(output.contains("Client with ID 3 not found."));
        assert!(output.contains("Clients:\n\n"));
    }
}
