//! Help message display for CLI.

#![allow(clippy::print_stdout)]

/// Print help message based on configuration state.
pub fn print_smart_help(config_exists: bool) {
    if config_exists {
        print_configured_help();
    } else {
        print_first_time_help();
    }
}

/// Print setup guide for first-time users.
pub fn print_first_time_help() {
    println!("No configuration found. Get started with chordbatch:");
    println!();
    println!("1. Initialize configuration:");
    println!("   chordbatch config init");
    println!();
    println!("2. Point it at your corpus checkout:");
    println!("   set partitions_root and tools_root in the generated config.toml,");
    println!("   or pass --partitions-root / --tools-root on the command line.");
    println!();
    println!("3. Convert a partition:");
    println!("   chordbatch isophonics");
    println!();
    println!("   or everything at once:");
    println!("   chordbatch all");
    println!();
    println!("Run 'chordbatch list' to see the registered partitions and");
    println!("'chordbatch -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help() {
    println!("Usage: chordbatch [PARTITIONS]... [OPTIONS]");
    println!();
    println!("Example: chordbatch isophonics billboard --dry-run");
    println!();
    println!("Run 'chordbatch -h' for all options or 'chordbatch list' to see partitions.");
}
