use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::content::{self, Glyph};

// Past this scroll depth the bar trades transparency for the solid
// blurred backdrop.
const SCROLLED_THRESHOLD_PX: f64 = 20.0;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_scroll_x, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_THRESHOLD_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#top" class="header-logo" onclick={close_menu.clone()}>
                    {"Tezlaa Café"}
                </a>

                <nav class="header-nav">
                    {
                        content::MAIN_NAVIGATION.iter().map(|item| html! {
                            <a key={item.name} href={item.href} class="nav-link">
                                { item.name }
                            </a>
                        }).collect::<Html>()
                    }
                </nav>

                <a href="#locations" class="header-cta">
                    <span class="cta-glyph">{ Glyph::MapPin.symbol() }</span>
                    <span>{"Visit Tezlaa"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <nav class="mobile-nav">
                    {
                        content::MAIN_NAVIGATION.iter().map(|item| html! {
                            <a
                                key={item.name}
                                href={item.href}
                                class="mobile-nav-link"
                                onclick={close_menu.clone()}
                            >
                                { item.name }
                            </a>
                        }).collect::<Html>()
                    }
                </nav>
                <a href="#locations" class="mobile-cta" onclick={close_menu.clone()}>
                    { Glyph::MapPin.symbol() }{" Visit Tezlaa"}
                </a>
                <div class="mobile-contact">
                    <p>{ content::TAGLINE }</p>
                    {
                        content::CONTACT_DETAILS.iter().take(2).map(|contact| html! {
                            <p key={contact.label} class="mobile-contact-line">{ contact.value }</p>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 4px 18px rgba(60, 42, 33, 0.12);
                    border-bottom: 1px solid #f3e4d7;
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #3c2a21;
                    text-decoration: none;
                }
                .header-nav {
                    display: flex;
                    gap: 0.5rem;
                }
                .nav-link {
                    padding: 0.5rem 0.9rem;
                    border-radius: 999px;
                    color: #4b3a30;
                    font-weight: 500;
                    text-decoration: none;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .nav-link:hover {
                    background: #fff0e3;
                    color: #e8590c;
                }
                .header-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 0.55rem 1.3rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #f76707, #e03131);
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 6px 16px rgba(224, 49, 49, 0.25);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .header-cta:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 22px rgba(224, 49, 49, 0.35);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #3c2a21;
                    border-radius: 2px;
                }
                .mobile-menu {
                    display: none;
                }
                @media (max-width: 950px) {
                    .header-nav, .header-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .mobile-menu {
                        display: block;
                        max-height: 0;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.98);
                        transition: max-height 0.3s ease;
                    }
                    .mobile-menu.open {
                        max-height: 32rem;
                        border-bottom: 1px solid #f3e4d7;
                        box-shadow: 0 12px 24px rgba(60, 42, 33, 0.15);
                    }
                    .mobile-nav {
                        display: flex;
                        flex-direction: column;
                        padding: 0.5rem 1.5rem;
                    }
                    .mobile-nav-link {
                        padding: 0.8rem 1rem;
                        border-radius: 0.6rem;
                        color: #4b3a30;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .mobile-nav-link:hover {
                        background: #fff0e3;
                        color: #e8590c;
                    }
                    .mobile-cta {
                        display: block;
                        margin: 0.5rem 1.5rem;
                        padding: 0.8rem;
                        text-align: center;
                        border-radius: 0.8rem;
                        background: linear-gradient(90deg, #f76707, #e03131);
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .mobile-contact {
                        padding: 1rem 1.5rem 1.5rem;
                        border-top: 1px solid #f3e4d7;
                        text-align: center;
                        color: #6b5b4f;
                        font-size: 0.9rem;
                    }
                    .mobile-contact-line {
                        margin: 0.2rem 0;
                        font-weight: 500;
                        color: #3c2a21;
                    }
                }
                "#}
            </style>
        </header>
    }
}
