use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{AggregationResult, AwardRecord, IntervalEntry, Prediction, ProducerDetails, YearWinners};

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|n| Cell::new(n).add_attribute(Attribute::Bold))
        .collect()
}

fn new_table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(columns));
    table
}

/// Render the min/max interval report. With `links`, each row also shows the
/// producer and movie lookups a client would follow.
pub fn render_awards(result: &AggregationResult, links: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!(
            "Min: {}  Max: {}",
            summarize(&result.min).green(),
            summarize(&result.max).yellow(),
        );
        return Ok(());
    }

    println!("\n {} v{}\n", "award-intervals".bold(), env!("CARGO_PKG_VERSION"));

    if result.is_empty() {
        println!(" No producer has won more than once.\n");
        return Ok(());
    }

    println!(" {} Shortest gap between consecutive wins:\n", "[MIN]".green().bold());
    println!("{}\n", interval_table(&result.min, links, Color::Green));

    println!(" {} Longest gap between consecutive wins:\n", "[MAX]".yellow().bold());
    println!("{}\n", interval_table(&result.max, links, Color::Yellow));

    if links {
        println!(" All movies: {}\n", "/movies".cyan());
    }

    Ok(())
}

fn summarize(entries: &[IntervalEntry]) -> String {
    match entries.first() {
        Some(first) => format!("{} year(s) x{}", first.interval, entries.len()),
        None => "-".to_string(),
    }
}

fn interval_table(entries: &[IntervalEntry], links: bool, color: Color) -> Table {
    let mut columns = vec!["Producer", "Interval", "Previous win", "Following win"];
    if links {
        columns.extend(["Producer details", "Movie details"]);
    }
    let mut table = new_table(&columns);

    for entry in entries {
        let mut row = vec![
            Cell::new(&entry.producer),
            Cell::new(entry.interval)
                .fg(color)
                .set_alignment(CellAlignment::Right),
            Cell::new(entry.previous_win),
            Cell::new(entry.following_win),
        ];
        if links {
            row.push(Cell::new(format!("/producers/{}", entry.producer)));
            row.push(Cell::new(format!(
                "/movies?year={}&producer={}",
                entry.previous_win, entry.producer
            )));
        }
        table.add_row(row);
    }

    table
}

fn record_table(records: &[AwardRecord], with_producer: bool) -> Table {
    let mut columns = vec!["Year", "Title", "Studios"];
    if with_producer {
        columns.push("Producer");
    }
    columns.push("Winner");
    let mut table = new_table(&columns);

    for record in records {
        let mut row = vec![
            Cell::new(record.year),
            Cell::new(&record.title),
            Cell::new(&record.studios),
        ];
        if with_producer {
            row.push(Cell::new(&record.producer));
        }
        row.push(if record.won {
            Cell::new("✓ yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::DarkGrey)
        });
        table.add_row(row);
    }

    table
}

pub fn render_movies(records: &[AwardRecord], quiet: bool) -> Result<()> {
    let winners = records.iter().filter(|r| r.won).count();
    if quiet {
        println!("Records: {}  Winners: {}", records.len(), winners.to_string().green());
        return Ok(());
    }

    println!(" {} records, {} winning\n", records.len(), winners);
    if !records.is_empty() {
        println!("{}", record_table(records, true));
    }
    Ok(())
}

pub fn render_producer(details: &ProducerDetails, quiet: bool) -> Result<()> {
    let wins = details.movies.iter().filter(|r| r.won).count();
    if quiet {
        println!("{}: {} movies, {} wins", details.producer, details.movies.len(), wins);
        return Ok(());
    }

    println!(
        " {} {} movies, {} wins\n",
        details.producer.bold(),
        details.movies.len(),
        wins
    );
    println!("{}", record_table(&details.movies, false));
    Ok(())
}

pub fn render_winners(winners: &YearWinners) -> Result<()> {
    println!(" {} Winners of {}:\n", "[WIN]".green().bold(), winners.year);
    for title in &winners.winners {
        println!("  {} {}", "•".green(), title);
    }
    Ok(())
}

pub fn render_prediction(producer: &str, studio: &str, prediction: Prediction) -> Result<()> {
    let verdict = match prediction {
        Prediction::LikelyBad => prediction.to_string().red().bold(),
        Prediction::Unlikely => prediction.to_string().green(),
    };
    println!(" {} / {}: {}", producer, studio, verdict);
    Ok(())
}

pub fn render_names(names: &[String]) -> Result<()> {
    for (i, name) in names.iter().enumerate() {
        println!(" {:>3}. {}", i + 1, name);
    }
    Ok(())
}
