//! CSV batch quoting.
//!
//! Input files have a header naming product codes (any subset of `A`..`I`,
//! any order, any case) and one order per row. Blank cells count as zero.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Writer};
use tracing::{debug, info};

use crate::domain::types::{Order, Product};
use crate::error::{Error, Result};
use crate::simulation::RouteSimulator;

pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>> {
    let file = std::fs::File::open(path.as_ref())?;
    let orders = read_orders_from(file)?;
    info!(
        "Loaded {} order(s) from {}",
        orders.len(),
        path.as_ref().display()
    );
    Ok(orders)
}

pub fn read_orders_from<R: io::Read>(input: R) -> Result<Vec<Order>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let columns: Vec<Product> = reader
        .headers()?
        .iter()
        .map(str::parse)
        .collect::<Result<_>>()?;
    debug!("Order columns: {:?}", columns);

    let mut orders = Vec::new();
    for row in reader.records() {
        let record = row?;
        let mut order = Order::new();
        for (product, cell) in columns.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }
            let quantity: i64 = cell
                .parse()
                .map_err(|_| Error::OrderSyntax(format!("{product}={cell}")))?;
            let total = order
                .quantity(*product)
                .checked_add(quantity)
                .ok_or_else(|| Error::OrderSyntax(format!("{product}={cell}")))?;
            order.set(*product, total);
        }
        orders.push(order);
    }

    Ok(orders)
}

/// Write `row,order,minimum_cost`, one line per quote.
pub fn write_quotes<W: io::Write>(output: W, quotes: &[(Order, f64)]) -> Result<()> {
    let mut wtr = Writer::from_writer(output);

    wtr.write_record(["row", "order", "minimum_cost"])?;
    for (row, (order, cost)) in quotes.iter().enumerate() {
        wtr.write_record([
            (row + 1).to_string(),
            order.to_string(),
            format!("{cost:.2}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Quote every order in `input` and write the results to `output`.
/// Returns the number of orders quoted.
pub fn quote_file<P, Q>(simulator: &RouteSimulator<'_>, input: P, output: Q) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let quotes: Vec<(Order, f64)> = read_orders(input)?
        .into_iter()
        .map(|order| {
            let cost = simulator.calculate_min_cost(&order);
            (order, cost)
        })
        .collect();

    let file = std::fs::File::create(output.as_ref())?;
    write_quotes(file, &quotes)?;
    info!(
        "Wrote {} quote(s) to {}",
        quotes.len(),
        output.as_ref().display()
    );
    Ok(quotes.len())
}
