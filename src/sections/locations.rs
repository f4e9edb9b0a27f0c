use yew::prelude::*;

use crate::content;
use crate::hooks::use_in_view;

#[function_component(LocationsSection)]
pub fn locations_section() -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());

    html! {
        <section
            id="locations"
            ref={section_ref}
            class={classes!("locations-section", visible.then(|| "visible"))}
        >
            <div class="locations-content">
                <div class="locations-header">
                    <h2 class="reveal">
                        {"Our Locations Across"}
                        <br />
                        {"Sri Lanka"}
                    </h2>
                    <a href="#contact" class="view-all reveal">
                        {"View All Locations"}
                        <span class="view-all-arrow">{"→"}</span>
                    </a>
                </div>

                <div class="locations-grid">
                    {
                        content::LOCATIONS.iter().enumerate().map(|(index, location)| html! {
                            <a
                                key={location.name}
                                href={location.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="location-pill reveal"
                                style={format!("transition-delay: {}ms", 200 + index * 150)}
                                title={location.address}
                            >
                                <span class="location-glyph">{ location.glyph.symbol() }</span>
                                <span class="location-name">{ location.name }</span>
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .locations-section {
                    padding: 6rem 1.5rem;
                    background: #faf5f0;
                    overflow: hidden;
                }
                .locations-content {
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .locations-section .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .locations-section.visible .reveal {
                    opacity: 1;
                    transform: translateY(0);
                }
                .locations-header {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    margin-bottom: 3.5rem;
                }
                .locations-header h2 {
                    margin: 0;
                    font-size: clamp(1.8rem, 4vw, 3rem);
                    line-height: 1.2;
                    color: #2b1d15;
                }
                .view-all {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #e8590c;
                    font-weight: 600;
                    text-decoration: none;
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    transition: background 0.3s ease;
                }
                .view-all:hover {
                    background: #fff0e3;
                }
                .view-all-arrow {
                    transition: transform 0.3s ease;
                }
                .view-all:hover .view-all-arrow {
                    transform: translateX(4px);
                }
                .locations-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.8rem;
                }
                .location-pill {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.7rem;
                    padding: 1.2rem 1.8rem;
                    border-radius: 999px;
                    background: #fff;
                    border: 2px solid #ffc9a3;
                    text-decoration: none;
                    box-shadow: 0 8px 18px rgba(60, 42, 33, 0.12);
                    transition: border-color 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
                }
                .location-pill:hover {
                    background: #fff4ec;
                    border-color: #ffa94d;
                    box-shadow: 0 14px 28px rgba(60, 42, 33, 0.18);
                }
                .location-glyph {
                    font-size: 1.2rem;
                }
                .location-name {
                    font-weight: 600;
                    color: #e8590c;
                }
                @media (max-width: 950px) {
                    .locations-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
