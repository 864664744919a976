//! Root view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use storefront_core::{use_commerce, use_config, Registered};
use storefront_commerce::Merchant;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_config();
    let title = config
        .as_ref()
        .map(|c| c.title.clone())
        .unwrap_or_else(|| "Storefront".to_string());
    let stylesheet = config
        .as_ref()
        .and_then(|c| c.css_path.clone())
        .map(|href| view! { <Stylesheet id="storefront" href=href/> });

    view! {
        {stylesheet}
        <Title text=title.clone()/>
        <Header title=title/>
        <main class="container">
            <CommerceStatus/>
        </main>
    }
}

#[component]
fn Header(title: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <Registered name="icon-store"/>
            <h1>{title}</h1>
            <nav>
                <Registered name="icon-search"/>
                <Registered name="icon-user"/>
                <Registered name="icon-cart"/>
            </nav>
        </header>
    }
}

/// Shows which store the commerce client talks to, or why it is absent.
#[component]
pub fn CommerceStatus() -> impl IntoView {
    let Some(client) = use_commerce().client().cloned() else {
        return view! {
            <p class="notice">"Commerce is disabled. Set CHEC_PUBLIC_KEY to connect a store."</p>
        }
        .into_any();
    };

    let sandbox = client.public_key().is_sandbox();
    let merchant = RwSignal::new(None::<Result<Merchant, String>>);

    spawn_local(async move {
        let result = client.merchant().await.map_err(|e| e.to_string());
        if let Err(err) = &result {
            tracing::error!(error = %err, "failed to load merchant");
        }
        merchant.set(Some(result));
    });

    view! {
        <section class="merchant">
            {sandbox.then(|| view! { <span class="badge">"Sandbox"</span> })}
            {move || match merchant.get() {
                None => view! { <p>"Loading store..."</p> }.into_any(),
                Some(Ok(m)) => view! { <h2>{m.business_name}</h2> }.into_any(),
                Some(Err(e)) => view! {
                    <p class="error">"Could not reach the store: " {e}</p>
                }.into_any(),
            }}
        </section>
    }
    .into_any()
}
