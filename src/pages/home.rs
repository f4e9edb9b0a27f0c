use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::sections::{
    about::AboutSection, brew_process::BrewProcessSection, hero::HeroSection,
    locations::LocationsSection, occasions::OccasionsSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Land at the top of the page on initial mount.
    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    html! {
        <div class="home-page">
            <HeroSection />
            <AboutSection />
            <OccasionsSection />
            <BrewProcessSection />
            <LocationsSection />
        </div>
    }
}
