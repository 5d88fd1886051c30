use anyhow::Result;

fn main() -> Result<()> {
    let status = region_ruler::cli::run()?;
    std::process::exit(status);
}
