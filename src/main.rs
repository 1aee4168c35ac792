use anyhow::Result;

fn main() -> Result<()> {
    cc_summarize::cli::run()
}
