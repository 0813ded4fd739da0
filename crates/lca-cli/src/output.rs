//! Terminal output formatting.

use colored::Colorize;
use lca_core::analysis::model::AnalysisRecord;
use lca_core::contract::model::{ContractRecord, ContractSource};

/// Print a single contract.
pub fn print_contract(record: &ContractRecord) {
    println!(
        "{} {}",
        record.contract.title.cyan().bold(),
        format!("({})", record.id).dimmed()
    );
    println!();

    println!("{}: {}", "Source".bold(), record.source.as_str().yellow());
    if let Some(name) = &record.file_name {
        println!("{}: {}", "File".bold(), name);
    }
    println!("{}: {}", "Created".bold(), record.created_at);

    if !record.contract.parties.is_empty() {
        println!();
        println!("{}", "Parties".bold());
        for (i, party) in record.contract.parties.iter().enumerate() {
            println!("  {}. {}", i + 1, party);
        }
    }

    println!();
    println!("{}", "Content".bold());
    println!("{}", truncate(&record.contract.content, 600));
}

/// Print the analysis attached to a contract.
pub fn print_analysis(record: &AnalysisRecord) {
    println!();
    println!(
        "{} {}",
        "Analysis".bold(),
        format!("(recorded {})", record.recorded_at).dimmed()
    );
    println!("{}", record.analysis.summary);

    print_list("Risks", &record.analysis.risks);
    print_list("Recommendations", &record.analysis.recommendations);
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", heading.bold());
    for item in items {
        println!("  - {}", item);
    }
}

/// Print contracts as a table.
pub fn print_contracts_table(contracts: &[ContractRecord]) {
    if contracts.is_empty() {
        println!("{}", "No contracts found.".dimmed());
        return;
    }

    println!("{:<10} {:<32} {:<8} {:<24} {:<20}", "ID", "Title", "Source", "Parties", "Created");
    println!("{}", "-".repeat(98));

    for record in contracts {
        let source = match record.source {
            ContractSource::Json => "json".normal(),
            ContractSource::Upload => "upload".blue(),
        };

        println!(
            "{:<10} {:<32} {:<8} {:<24} {:<20}",
            short_id(&record.id),
            truncate(&record.contract.title, 30),
            source,
            truncate(&record.contract.parties.join(", "), 22),
            record.created_at.get(..19).unwrap_or(&record.created_at)
        );
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Truncate to at most `max` characters, appending "..." when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Master Services Agreement", 10), "Master ...");
        assert_eq!(truncate("Übereinkunft", 5), "Üb...");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0f3c9a1e-aaaa-bbbb"), "0f3c9a1e");
        assert_eq!(short_id("abc"), "abc");
    }
}
