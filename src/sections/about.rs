use yew::prelude::*;

use crate::content;
use crate::hooks::use_in_view;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());

    html! {
        <section
            id="about"
            ref={section_ref}
            class={classes!("about-section", visible.then(|| "visible"))}
        >
            <div class="about-grid">
                <div class="about-copy">
                    <span class="section-label reveal">{"Our Story"}</span>
                    <h2 class="about-heading reveal">
                        <span>{"Rooted in Passion,"}</span>
                        <span>{"Served with Love"}</span>
                    </h2>
                    <p class="about-text reveal">
                        {"Tezlaa Café was built on a simple belief: great coffee should do good. From working with ethical farmers to using sustainable practices, we care about every step of the journey. Each cup we serve is a celebration of flavor, community, and a better planet — brewed with passion, served with love, and meant to brighten your day."}
                    </p>

                    <div class="values-grid reveal">
                        {
                            content::CAFE_VALUES.iter().map(|value| html! {
                                <div key={value.title} class="value-card">
                                    <div class="value-glyph">{ value.glyph.symbol() }</div>
                                    <h3>{ value.title }</h3>
                                    <p>{ value.description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <a href="#brew-process" class="about-cta reveal">{"Learn About Tezlaa"}</a>
                </div>

                <div class="about-panel reveal">
                    <div class="about-image">
                        <span class="about-image-glyph">{ content::Glyph::Coffee.symbol() }</span>
                        <img
                            src="/images/cafe/interior-main.jpg"
                            alt="Tezlaa Café interior"
                            loading="lazy"
                        />
                    </div>

                    <div class="stats-card">
                        <div class="stats-entry">
                            <div class="stats-number">{"12+"}</div>
                            <div class="stats-label">{"Outlets"}</div>
                        </div>
                        <div class="stats-rule"></div>
                        <div class="stats-entry">
                            <div class="stats-number">{"10K"}</div>
                            <div class="stats-label">{"Cups Served"}</div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-section {
                    padding: 6rem 1.5rem;
                    background: #fff;
                    overflow: hidden;
                }
                .about-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.1fr 0.9fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-section .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .about-section.visible .reveal {
                    opacity: 1;
                    transform: translateY(0);
                }
                .about-section.visible .reveal:nth-child(2) { transition-delay: 0.1s; }
                .about-section.visible .reveal:nth-child(3) { transition-delay: 0.2s; }
                .about-section.visible .reveal:nth-child(4) { transition-delay: 0.3s; }
                .about-section.visible .reveal:nth-child(5) { transition-delay: 0.45s; }
                .section-label {
                    display: inline-block;
                    font-size: 0.85rem;
                    font-weight: 600;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #e8590c;
                    margin-bottom: 1rem;
                }
                .about-heading {
                    margin: 0 0 1.5rem;
                    font-size: clamp(2rem, 4vw, 3.2rem);
                    line-height: 1.2;
                    color: #2b1d15;
                }
                .about-heading span {
                    display: block;
                }
                .about-text {
                    font-size: 1.15rem;
                    line-height: 1.8;
                    color: #6b5b4f;
                    margin-bottom: 2rem;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .value-card {
                    text-align: center;
                    padding: 1.2rem 1rem;
                    border-radius: 1.2rem;
                    background: #faf5f0;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .value-card:hover {
                    background: #fff0e3;
                    transform: translateY(-5px);
                }
                .value-glyph {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    font-size: 1.4rem;
                    border-radius: 0.9rem;
                    background: #ffe8d9;
                    margin-bottom: 0.6rem;
                }
                .value-card h3 {
                    margin: 0 0 0.3rem;
                    font-size: 1rem;
                    color: #2b1d15;
                }
                .value-card p {
                    margin: 0;
                    font-size: 0.88rem;
                    color: #6b5b4f;
                }
                .about-cta {
                    display: inline-block;
                    padding: 0.9rem 2.2rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #f76707, #e03131);
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 10px 24px rgba(224, 49, 49, 0.28);
                    transition: transform 0.3s ease;
                }
                .about-cta:hover {
                    transform: scale(1.05);
                }
                .about-panel {
                    position: relative;
                }
                .about-image {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    border-radius: 1.8rem;
                    overflow: hidden;
                    background: linear-gradient(135deg, #ffe8cc, #ffd8bd, #ffc2c2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 24px 48px rgba(60, 42, 33, 0.2);
                    transition: transform 0.4s ease;
                }
                .about-image:hover {
                    transform: scale(1.02);
                }
                .about-image-glyph {
                    font-size: 4rem;
                    opacity: 0.7;
                }
                .about-image img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .stats-card {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1.2rem;
                    padding: 1.3rem 1.6rem;
                    border-radius: 1.2rem;
                    background: #fff;
                    border: 1px solid #f3e4d7;
                    box-shadow: 0 18px 36px rgba(60, 42, 33, 0.18);
                }
                .stats-number {
                    font-size: 1.6rem;
                    font-weight: 700;
                    color: #e8590c;
                }
                .stats-label {
                    font-size: 0.75rem;
                    color: #6b5b4f;
                }
                .stats-rule {
                    width: 1px;
                    height: 2.2rem;
                    background: #f3e4d7;
                }
                @media (max-width: 950px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-panel {
                        order: -1;
                    }
                    .stats-card {
                        left: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
