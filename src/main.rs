use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod content;
mod counter;
mod hooks;
mod components {
    pub mod footer;
    pub mod header;
}
mod sections {
    pub mod about;
    pub mod brew_process;
    pub mod hero;
    pub mod locations;
    pub mod occasions;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, header::Header};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
                    color: #2b1d15;
                    background: #fff;
                }
                html {
                    scroll-behavior: smooth;
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Surface panics in the browser console with proper stack traces.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
