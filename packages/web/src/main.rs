use dioxus::prelude::*;

use ui::AppStateProvider;
use views::{
    Admin, ArticleDetail, ArticleEdit, ArticleNew, Articles, Home, Login, NotFound, Profile,
    Root, SignUp, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/signUp")]
    SignUp {},
    #[layout(Admin)]
        #[route("/")]
        Root {},
        #[route("/home")]
        Home {},
        #[route("/user")]
        Users {},
        #[route("/profile")]
        Profile {},
        #[route("/article")]
        Articles {},
        #[route("/article/new")]
        ArticleNew {},
        #[route("/article/edit/:slug")]
        ArticleEdit { slug: String },
        #[route("/article/detail/:slug")]
        ArticleDetail { slug: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const CONFIG_TOML: &str = include_str!("../Inkdesk.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = store::AppConfig::load(CONFIG_TOML);
        tracing::info!("Using backend at {}", config.api.base_url);
        config
    });

    rsx! {
        document::Stylesheet { href: ui::MAIN_CSS }

        AppStateProvider {
            config,
            Router::<Route> {}
        }
    }
}
