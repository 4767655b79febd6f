use crate::model::{ScanRecord, ScanResult, ScanResultContainer};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Scanner")]
    scanner: String,
    #[tabled(rename = "Provenance")]
    provenance: String,
    #[tabled(rename = "VCS Path")]
    vcs_path: String,
    #[tabled(rename = "Licenses")]
    licenses: usize,
    #[tabled(rename = "Copyrights")]
    copyrights: usize,
    #[tabled(rename = "Issues")]
    issues: usize,
}

impl ResultRow {
    fn new(container: &ScanResultContainer, result: &ScanResult) -> Self {
        let vcs_path = match &result.provenance.vcs_info {
            Some(vcs) if vcs.path.is_empty() => "/".to_string(),
            Some(vcs) => vcs.path.clone(),
            None => "-".to_string(),
        };

        Self {
            package: truncate(&container.id.to_string(), 50),
            scanner: format!("{} {}", result.scanner.name, result.scanner.version),
            provenance: result.provenance.kind().to_string(),
            vcs_path,
            licenses: result.summary.license_findings.len(),
            copyrights: result.summary.copyright_findings.len(),
            issues: result.summary.issues.len(),
        }
    }
}

fn rows<'a>(containers: impl IntoIterator<Item = &'a ScanResultContainer>) -> Vec<ResultRow> {
    containers
        .into_iter()
        .flat_map(|c| c.results().iter().map(move |r| ResultRow::new(c, r)))
        .collect()
}

pub fn print_container_table(container: &ScanResultContainer) -> Result<()> {
    println!();
    println!("Scan results for {}:", container.id);
    println!();

    if container.results().is_empty() {
        println!("No scan results.");
        return Ok(());
    }

    let table = Table::new(rows([container])).with(Style::rounded()).to_string();
    println!("{}", table);
    Ok(())
}

pub fn print_record_table(record: &ScanRecord) -> Result<()> {
    println!();

    let results = rows(record.scan_results());
    if results.is_empty() {
        println!("No scan results.");
        return Ok(());
    }

    println!(
        "Found {} scan results for {} packages:",
        results.len(),
        record.scan_results().len()
    );
    println!();

    let table = Table::new(results).with(Style::rounded()).to_string();
    println!("{}", table);
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
