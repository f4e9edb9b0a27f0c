use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <a href="#top" class="footer-logo">{"Tezlaa Café"}</a>
                    <p class="footer-blurb">
                        {"Tezlaa Café serves handcrafted coffee, cozy spaces, and sustainable vibes — making every visit a moment worth savoring."}
                    </p>
                </div>

                <nav class="footer-nav">
                    {
                        content::FOOTER_NAVIGATION.iter().map(|item| html! {
                            <a key={item.name} href={item.href} class="footer-link">
                                { item.name }
                            </a>
                        }).collect::<Html>()
                    }
                </nav>

                <div class="footer-social">
                    <span class="social-label">{"Follow Us on:"}</span>
                    {
                        content::SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                key={social.name}
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                                title={social.name}
                            >
                                { social.glyph.symbol() }
                            </a>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-divider"></div>

                <div class="footer-contact">
                    <h3>{"Contact Details"}</h3>
                    {
                        content::CONTACT_DETAILS.iter().map(|contact| html! {
                            <a
                                key={contact.label}
                                href={contact.href}
                                class="contact-item"
                                target={contact.href.starts_with("http").then(|| "_blank")}
                                rel={contact.href.starts_with("http").then(|| "noopener noreferrer")}
                            >
                                <span class="contact-glyph">{ contact.glyph.symbol() }</span>
                                <span>{ contact.value }</span>
                            </a>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-divider"></div>

                <div class="footer-bottom">
                    <span>{ format!("Copyright © {year} tezlaa.com") }</span>
                    <div class="footer-legal">
                        <a href="#top" class="footer-link">{"Privacy Policy"}</a>
                        <a href="#contact" class="footer-link">{"Help"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #fef4ee;
                    border-top: 1px solid #f3e4d7;
                    padding: 3.5rem 1.5rem 1.5rem;
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .footer-brand {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .footer-logo {
                    font-family: Georgia, serif;
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #3c2a21;
                    text-decoration: none;
                }
                .footer-blurb {
                    max-width: 42rem;
                    margin: 1rem auto 0;
                    color: #6b5b4f;
                    font-size: 1.05rem;
                    line-height: 1.7;
                }
                .footer-nav {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 2.5rem;
                }
                .footer-link {
                    color: #4b3a30;
                    font-weight: 500;
                    text-decoration: none;
                }
                .footer-link:hover {
                    color: #e8590c;
                    text-decoration: underline;
                    text-underline-offset: 4px;
                }
                .footer-social {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.6rem;
                    margin-bottom: 2.5rem;
                }
                .social-label {
                    color: #4b3a30;
                    font-weight: 500;
                    margin-right: 0.5rem;
                }
                .social-link {
                    width: 2.4rem;
                    height: 2.4rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    color: #6b5b4f;
                    text-decoration: none;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .social-link:hover {
                    background: #fff0e3;
                    color: #e8590c;
                }
                .footer-divider {
                    height: 1px;
                    background: #f3e4d7;
                    margin: 0 0 2rem;
                }
                .footer-contact {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .footer-contact h3 {
                    margin: 0;
                    color: #3c2a21;
                    font-size: 1.1rem;
                }
                .contact-item {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #3c2a21;
                    font-weight: 500;
                    text-decoration: none;
                }
                .contact-item:hover {
                    color: #e8590c;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.5rem 0 0.5rem;
                    color: #6b5b4f;
                    font-size: 0.9rem;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
                @media (max-width: 700px) {
                    .footer-contact, .footer-bottom {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
