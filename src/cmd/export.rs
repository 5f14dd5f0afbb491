use anyhow::Result;

use fitplan::core::export::{self, Table};
use fitplan::db::{self, Database};

pub fn run(table: &str, format: &str, output: Option<&str>) -> Result<()> {
    // Validate inputs before touching storage.
    let table: Table = table.parse()?;
    if format != "csv" && format != "json" {
        anyhow::bail!("unsupported format: {} (expected csv/json)", format);
    }

    let db = Database::open(&db::db_path()?)?;
    let content = match format {
        "csv" => export::to_csv(&db, table)?,
        _ => export::to_json(&db, table)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)?;
            println!("Exported {} to {}", table, path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
