use anyhow::Result;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with redirected output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    kindle_clippings::cli::run()
}
