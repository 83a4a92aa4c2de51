use anyhow::Result;

fn main() -> Result<()> {
    therascribe::cli::run()
}
