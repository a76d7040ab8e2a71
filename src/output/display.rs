//! Display functions for command results

use super::histogram::render;
use crate::commands::ReportResult;
use crate::patience::{SimulationResult, distribution};
use colored::Colorize;

/// Print the anagram report for a word file
pub fn print_report(result: &ReportResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANAGRAM REPORT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Corpus:".bright_cyan().bold());
    println!("   Words ingested:   {}", result.total_words);
    println!("   Distinct groups:  {}", result.group_count);
    println!(
        "   Build time:       {:.3}s",
        result.build_duration.as_secs_f64()
    );
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n🔤 {}", "Anagrams:".bright_cyan().bold());
    match result.largest_group {
        Some(size) => println!(
            "   Largest group:    {} variants",
            size.to_string().bright_yellow().bold()
        ),
        None => println!("   Largest group:    no data"),
    }
    match &result.longest_pair {
        Some((first, second)) => println!(
            "   Longest pair:     {} and {} ({} letters)",
            first.bright_yellow().bold(),
            second.bright_yellow().bold(),
            first.len()
        ),
        None => println!("   Longest pair:     no pair found"),
    }

    if result.distribution.is_empty() {
        println!("\nNo groups with two or more members.");
    } else {
        println!(
            "\n📈 {} (log10 of group count per size)",
            "Group size distribution:".bright_cyan().bold()
        );
        let (sizes, log_counts): (Vec<usize>, Vec<f64>) =
            result.distribution.iter().copied().unzip();
        print!("{}", render(&sizes, &log_counts, 50));
    }
}

/// Print the word-length histogram rows for a file
pub fn print_length_histogram(path: &str, rows: &[(usize, f64)]) {
    println!("Word Length Histogram for {path}:");
    println!("Length | % Frequency");
    let (lengths, percentages): (Vec<usize>, Vec<f64>) = rows.iter().copied().unzip();
    print!("{}", render(&lengths, &percentages, 50));
}

/// Print the outcome distribution of a patience simulation
pub fn print_simulation(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PATIENCE RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_pct = (result.wins() as f64 / result.games as f64) * 100.0;
    println!("\n   Games played:     {}", result.games);
    println!(
        "   Wins (empty deck): {} ({win_pct:.2}%)",
        result.wins().to_string().green().bold()
    );

    println!("\n📈 {} (% of games)", "Cards left in deck:".bright_cyan().bold());
    let (labels, percentages): (Vec<usize>, Vec<f64>) =
        distribution(result).iter().copied().unzip();
    print!("{}", render(&labels, &percentages, 30));
}
