//! The `schoolbook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("schoolbook.toml").exists() {
        println!("schoolbook.toml already exists, skipping.");
    } else {
        std::fs::write("schoolbook.toml", SAMPLE_CONFIG)?;
        println!("Created schoolbook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit schoolbook.toml (school name, data directory)");
    println!("  2. Run: schoolbook dashboard");
    println!("  3. Run: schoolbook students list");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# schoolbook configuration

school_name = "Greenwood Elementary School"

# Where the persisted store snapshot lives
data_dir = "./schoolbook-data"

# Rows on the dashboard leaderboard panel
leaderboard_top_n = 10

# Simulated seed fetch latency (milliseconds); 0 for instant
seed_delay_ms = 250

# Give up on the first-run data load after this many seconds
load_timeout_secs = 30
"#;
