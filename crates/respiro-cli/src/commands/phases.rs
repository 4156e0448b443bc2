use respiro_core::phase_table;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&phase_table())?);
    Ok(())
}
