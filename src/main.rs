use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = edmv::cli::parse();
    app::run(args)
}
