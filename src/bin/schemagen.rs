fn main() -> anyhow::Result<()> {
    print!("{}", serde_json::to_string_pretty(&podgen::state_schema())?);
    println!();
    Ok(())
}
