// Digital Dreamland landing page
//
// `csr`: mounts the page in the browser (trunk serve).
// otherwise: prints the prerendered document to stdout.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    dreamland_landing::telemetry::init_browser();
    tracing::debug!("mounting landing page");
    dreamland_landing::mount();
}

#[cfg(not(feature = "csr"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use std::io::Write;

    dreamland_landing::telemetry::init_stderr();

    let html = dreamland_landing::render_page();
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing prerendered page to stdout")?;

    tracing::info!(bytes = html.len(), "page prerendered");
    Ok(())
}
