//! ShopHub Storefront - composition root binary.

use anyhow::Context;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shophub_domain::Catalog;
use shophub_storefront::StorefrontConfig;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shophub_storefront=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting ShopHub Storefront");

    #[allow(unused_mut)]
    let mut config = StorefrontConfig::from_env();

    // On the web the viewport decides the shell; env vars do not exist there.
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        config.shell = if width < 768.0 {
            shophub_storefront::ShellKind::Mobile
        } else {
            shophub_storefront::ShellKind::Desktop
        };
    }

    let catalog = Catalog::demo().context("loading product catalog")?;
    tracing::debug!(
        products = catalog.len(),
        shell = ?config.shell,
        "Catalog loaded"
    );

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title(config.title.clone());
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(config)
        .with_context(catalog)
        .launch(shophub_storefront::app);

    Ok(())
}
