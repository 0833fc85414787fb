use anyhow::Context;
use extsweep_core::report::notify_obsolete_libraries;
use extsweep_core::ExtensionScanner;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let scanner = ExtensionScanner::new().context("constructing extension scanner")?;
    let findings = scanner.list_obsolete_libraries();

    if findings.is_empty() {
        println!("No obsolete extension libraries detected.");
    } else {
        println!("Obsolete extension libraries detected: {}", findings.len());
        notify_obsolete_libraries(&findings, |message| eprintln!("{message}"));
    }

    Ok(())
}
