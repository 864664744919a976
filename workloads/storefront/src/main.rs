#[cfg(feature = "csr")]
fn main() {
    if let Err(err) = storefront::start() {
        wasm_bindgen::throw_str(&err.to_string());
    }
}

/// Native builds only validate the configuration and environment.
#[cfg(not(feature = "csr"))]
fn main() -> anyhow::Result<()> {
    let app = storefront::storefront_app()?;
    storefront_core::init_logging(&app.config().logging)?;

    let storefront = app.build_from_env()?;
    tracing::info!(
        commerce = storefront.context().commerce().is_enabled(),
        "configuration ok; build with --features csr to run in the browser"
    );
    Ok(())
}
