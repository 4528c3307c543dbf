//! Listing output in table, JSON and CSV form.

use crate::error::CliError;
use magnolia::booking::PASSENGER_HEADERS;
use magnolia::config::OutputFormat;
use magnolia::flight::FLIGHT_HEADERS;
use magnolia::{FieldKind, Flight, PassengerBooking};
use std::io::Write;

/// Write flights in the requested format.
pub fn write_flights<W: Write>(
    out: &mut W,
    flights: &[Flight],
    format: OutputFormat,
) -> Result<(), CliError> {
    let rows: Vec<Vec<String>> = flights.iter().map(Flight::to_row).collect();
    match format {
        OutputFormat::Table => write_table(out, &FLIGHT_HEADERS, &rows),
        OutputFormat::Csv => write_csv(out, &FLIGHT_HEADERS, &rows),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, flights)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Write a flight's passengers in the requested format.
pub fn write_passengers<W: Write>(
    out: &mut W,
    passengers: &[PassengerBooking],
    format: OutputFormat,
) -> Result<(), CliError> {
    let rows: Vec<Vec<String>> = passengers
        .iter()
        .map(|booking| {
            PASSENGER_HEADERS
                .iter()
                .map(|header| booking.cell(header).unwrap_or_default())
                .collect()
        })
        .collect();
    match format {
        OutputFormat::Table => write_table(out, &PASSENGER_HEADERS, &rows),
        OutputFormat::Csv => write_csv(out, &PASSENGER_HEADERS, &rows),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, passengers)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Write one booking: the passenger's full name, then an indented
/// `Label: value` line for the flight and every other column.
pub fn write_booking<W: Write>(out: &mut W, booking: &PassengerBooking) -> Result<(), CliError> {
    writeln!(out, "{}", booking.passenger.full_name())?;
    writeln!(out, "   Flight: {}", booking.flight)?;
    let name_headers = [FieldKind::GivenNames.header(), FieldKind::Surname.header()];
    for header in PASSENGER_HEADERS {
        if name_headers.contains(&header) {
            continue;
        }
        writeln!(
            out,
            "   {}: {}",
            capitalize(header),
            booking.cell(header).unwrap_or_default()
        )?;
    }
    Ok(())
}

// "booking number" -> "Booking number"
fn capitalize(header: &str) -> String {
    let mut chars = header.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line flight summary for prompts.
pub fn flight_line(flight: &Flight) -> String {
    format!(
        "{}  {}  {}  dep {}  arr {}",
        flight.number,
        flight.destination,
        flight.date,
        flight.departure,
        flight.arrival
    )
}

// Tab-separated with uppercase headers, like a terminal table.
fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for row in rows {
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| if cell.is_empty() { "-" } else { cell.as_str() })
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
