use leptos::prelude::*;

mod seo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        base_url: seo::metadata::base_url(),
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let robots_method_router = axum::routing::get(seo::robots::handler);
    let sitemap_method_router = axum::routing::get(seo::sitemap::handler);
    let router = axum::Router::new()
        .route(seo::robots::URL_PATH, robots_method_router)
        .route(seo::sitemap::URL_PATH, sitemap_method_router)
        .leptos_routes(&ctx, routes, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .layer(tower_http::compression::CompressionLayer::new())
        .with_state(ctx);

    // run our app with hyper
    // `axum::Server` is a re-export of `hyper::Server`
    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
